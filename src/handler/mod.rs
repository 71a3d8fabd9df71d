mod product;

pub use self::product::product_routes;

use crate::{
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::Product,
    state::AppState,
    validation::FieldError,
};
use anyhow::{Context, Result};
use axum::{Router, http::HeaderValue};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ProdAdmin",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    paths(
        product::get_products,
        product::get_product_by_id,
        product::create_product,
        product::update_product,
        product::update_availability,
        product::delete_product,
    ),
    components(schemas(Product, CreateProductRequest, UpdateProductRequest, FieldError)),
    tags(
        (name = "Products", description = "API operations related to products"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// Assembles the full application: product routes, Swagger UI, request
    /// tracing, and a CORS policy that only accepts the configured origin.
    pub fn build(app_state: AppState, frontend_url: &str) -> Result<Router> {
        let allowed_origin = frontend_url
            .parse::<HeaderValue>()
            .context("FRONTEND_URL is not a valid origin")?;

        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact(allowed_origin))
            .allow_methods(Any)
            .allow_headers(Any);

        let api_router =
            OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(product_routes(app_state));

        let (router, api) = api_router.split_for_parts();

        let app = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        Ok(app)
    }

    pub async fn serve(port: u16, frontend_url: &str, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state, frontend_url)?;

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Servidor corriendo en el puerto {port}");
        println!("📖 Swagger UI: http://localhost:{port}/docs");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            error!("Failed to listen for Ctrl+C signal");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => error!("Failed to install SIGTERM handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received.");
}
