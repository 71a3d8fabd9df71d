mod api;

pub use self::api::{ApiResponse, ErrorResponse, ValidationErrorResponse};
