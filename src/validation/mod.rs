mod rules;

pub use self::rules::{create_product_rules, id_param_rules, update_product_rules};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Where a rule reads its input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Params,
    Body,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Location::Params => "params",
            Location::Body => "body",
        }
    }
}

/// One violated rule, in the shape callers receive inside the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub kind: String,
    #[schema(value_type = Object)]
    pub value: Value,
    #[schema(example = "ID no valido")]
    pub msg: String,
    #[schema(example = "id")]
    pub path: String,
    #[schema(example = "params")]
    pub location: String,
}

/// Structural snapshot of the parts of a request the rules inspect. Path
/// parameters are kept as raw strings; the body is the raw JSON document.
#[derive(Debug, Clone, Default)]
pub struct RequestSnapshot {
    params: Map<String, Value>,
    body: Value,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &str, raw: &str) -> Self {
        self.params
            .insert(name.to_string(), Value::String(raw.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Reads a path parameter that already passed the integer rule.
    pub fn int_param(&self, name: &str) -> Option<i64> {
        self.params
            .get(name)
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse::<i64>().ok())
    }

    fn lookup(&self, location: Location, path: &str) -> &Value {
        let found = match location {
            Location::Params => self.params.get(path),
            Location::Body => self.body.get(path),
        };
        found.unwrap_or(&Value::Null)
    }
}

/// An independent predicate over one request field. `check` returns `true`
/// when the input is acceptable.
pub struct Rule {
    pub path: &'static str,
    pub location: Location,
    pub msg: &'static str,
    pub check: fn(&Value) -> bool,
}

/// Ordered rules for one route. Every rule always runs, so the caller sees
/// all violations at once; each rule contributes at most one entry.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, snapshot: &RequestSnapshot) -> Vec<FieldError> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = snapshot.lookup(rule.location, rule.path);
                if (rule.check)(value) {
                    None
                } else {
                    Some(FieldError {
                        kind: "field".to_string(),
                        value: value.clone(),
                        msg: rule.msg.to_string(),
                        path: rule.path.to_string(),
                        location: rule.location.as_str().to_string(),
                    })
                }
            })
            .collect()
    }

    pub fn check(&self, snapshot: &RequestSnapshot) -> Result<(), Vec<FieldError>> {
        let errors = self.evaluate(snapshot);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
