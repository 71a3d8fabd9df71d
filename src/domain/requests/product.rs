use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Monitor curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
}

impl CreateProductRequest {
    /// Builds the request from a body that already passed the create rules.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text_field(body, "name"),
            price: numeric_field(body, "price"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "Monitor curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl UpdateProductRequest {
    /// Builds the request from a body that already passed the update rules.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: text_field(body, "name"),
            price: numeric_field(body, "price"),
            availability: body
                .get("availability")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

fn text_field(body: &Value, field: &str) -> String {
    match body.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

// Validation accepts numeric strings as well as JSON numbers, so the
// conversion mirrors that coercion.
fn numeric_field(body: &Value, field: &str) -> f64 {
    body.get(field)
        .and_then(|v| {
            v.as_f64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        })
        .unwrap_or_default()
}
