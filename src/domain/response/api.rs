use crate::validation::FieldError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful responses always wrap their payload in a `data` key.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Domain-level failures carry a single `error` message.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Producto no encontrado.")]
    pub error: String,
}

/// Input failures carry the full list of violated rules in one pass.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}
