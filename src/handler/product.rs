use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{ApiResponse, ErrorResponse, ValidationErrorResponse},
    },
    errors::HttpError,
    model::Product,
    state::AppState,
    validation::{self, RequestSnapshot},
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use serde_json::Value;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    description = "Return a list of products",
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<Vec<Product>>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all().await?;
    Ok((StatusCode::OK, Json(ApiResponse { data: products })))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    description = "Return a product based on its unique ID",
    params(("id" = String, Path, description = "The Id of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<Product>),
        (status = 400, description = "Bad request - invalid ID", body = ValidationErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_product_by_id(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = RequestSnapshot::new().with_param("id", &id);
    validation::id_param_rules()
        .check(&snapshot)
        .map_err(HttpError::Validation)?;
    let id = require_id(&snapshot)?;

    let product = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse { data: product })))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    description = "Return a new record in the database",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, description = "Bad request - invalid input data", body = ValidationErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = RequestSnapshot::new().with_body(body);
    validation::create_product_rules()
        .check(&snapshot)
        .map_err(HttpError::Validation)?;

    let req = CreateProductRequest::from_body(snapshot.body());
    let product = service.create(&req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse { data: product })))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    description = "Updates a product with user input",
    params(("id" = String, Path, description = "The Id of the product to update")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<Product>),
        (status = 400, description = "Bad request - invalid ID or input data", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = RequestSnapshot::new().with_param("id", &id).with_body(body);
    validation::update_product_rules()
        .check(&snapshot)
        .map_err(HttpError::Validation)?;
    let id = require_id(&snapshot)?;

    let req = UpdateProductRequest::from_body(snapshot.body());
    let product = service.update(id, &req).await?;
    Ok((StatusCode::OK, Json(ApiResponse { data: product })))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    description = "Return the updated availability",
    params(("id" = String, Path, description = "The Id of the product to update")),
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<Product>),
        (status = 400, description = "Bad request - invalid ID", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_availability(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = RequestSnapshot::new().with_param("id", &id);
    validation::id_param_rules()
        .check(&snapshot)
        .map_err(HttpError::Validation)?;
    let id = require_id(&snapshot)?;

    let product = service.toggle_availability(id).await?;
    Ok((StatusCode::OK, Json(ApiResponse { data: product })))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    description = "Returns a confirmation message",
    params(("id" = String, Path, description = "The Id of the product to delete")),
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<String>),
        (status = 400, description = "Bad request - invalid ID", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let snapshot = RequestSnapshot::new().with_param("id", &id);
    validation::id_param_rules()
        .check(&snapshot)
        .map_err(HttpError::Validation)?;
    let id = require_id(&snapshot)?;

    service.delete(id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: "Producto Eliminado".to_string(),
        }),
    ))
}

// The integer rule already ran, so an absent value here is a programming error.
fn require_id(snapshot: &RequestSnapshot) -> Result<i64, HttpError> {
    snapshot
        .int_param("id")
        .ok_or_else(|| HttpError::Internal("id parameter missing after validation".to_string()))
}

pub fn product_routes(app_state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product_by_id))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", patch(update_availability))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
