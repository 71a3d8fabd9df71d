use super::{Location, Rule, RuleSet};
use serde_json::Value;

const MSG_INVALID_ID: &str = "ID no valido";
const MSG_NAME_EMPTY: &str = "El nombre del Producto no puede ir vacio";
const MSG_PRICE_NUMERIC: &str = "El precio debe ser un numero";
const MSG_PRICE_EMPTY: &str = "El precio del Producto no puede ir vacio";
const MSG_PRICE_NOT_POSITIVE: &str = "El precio no puede ser menor a cero";
const MSG_AVAILABILITY_BOOLEAN: &str = "La disponibilidad debe ser un Booleano";

/// Rules for routes that only take an `:id` path parameter
/// (get-by-id, patch, delete).
pub fn id_param_rules() -> RuleSet {
    RuleSet::new(vec![id_rule()])
}

/// Rules for the create route: name and the three independent price rules.
pub fn create_product_rules() -> RuleSet {
    RuleSet::new(body_rules())
}

/// Rules for the update route: id, the create rules, and availability.
pub fn update_product_rules() -> RuleSet {
    let mut rules = vec![id_rule()];
    rules.extend(body_rules());
    rules.push(Rule {
        path: "availability",
        location: Location::Body,
        msg: MSG_AVAILABILITY_BOOLEAN,
        check: is_boolean,
    });
    RuleSet::new(rules)
}

fn id_rule() -> Rule {
    Rule {
        path: "id",
        location: Location::Params,
        msg: MSG_INVALID_ID,
        check: is_int,
    }
}

fn body_rules() -> Vec<Rule> {
    vec![
        Rule {
            path: "name",
            location: Location::Body,
            msg: MSG_NAME_EMPTY,
            check: not_empty,
        },
        Rule {
            path: "price",
            location: Location::Body,
            msg: MSG_PRICE_NUMERIC,
            check: is_numeric,
        },
        Rule {
            path: "price",
            location: Location::Body,
            msg: MSG_PRICE_EMPTY,
            check: not_empty,
        },
        Rule {
            path: "price",
            location: Location::Body,
            msg: MSG_PRICE_NOT_POSITIVE,
            check: greater_than_zero,
        },
    ]
}

fn is_int(value: &Value) -> bool {
    match value {
        Value::String(raw) => raw.parse::<i64>().is_ok(),
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

// Missing fields, explicit nulls and empty strings all count as empty.
fn not_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(raw) => !raw.is_empty(),
        _ => true,
    }
}

// A JSON number or a string that parses as one.
fn is_numeric(value: &Value) -> bool {
    as_number(value).is_some()
}

fn greater_than_zero(value: &Value) -> bool {
    as_number(value).is_some_and(|n| n > 0.0)
}

fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(raw) if !raw.trim().is_empty() => raw.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RequestSnapshot;
    use serde_json::json;

    #[test]
    fn empty_create_body_fails_every_rule() {
        let snapshot = RequestSnapshot::new().with_body(json!({}));
        let errors = create_product_rules().evaluate(&snapshot);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].msg, MSG_NAME_EMPTY);
        assert_eq!(errors[1].msg, MSG_PRICE_NUMERIC);
        assert_eq!(errors[2].msg, MSG_PRICE_EMPTY);
        assert_eq!(errors[3].msg, MSG_PRICE_NOT_POSITIVE);
    }

    #[test]
    fn empty_update_body_fails_five_rules() {
        let snapshot = RequestSnapshot::new()
            .with_param("id", "1")
            .with_body(json!({}));
        let errors = update_product_rules().evaluate(&snapshot);

        assert_eq!(errors.len(), 5);
        assert_eq!(errors[4].msg, MSG_AVAILABILITY_BOOLEAN);
    }

    #[test]
    fn price_rules_fire_independently() {
        // An empty-string price violates numeric, not-empty and positive at once.
        let snapshot = RequestSnapshot::new().with_body(json!({
            "name": "Monitor",
            "price": ""
        }));
        let errors = create_product_rules().evaluate(&snapshot);

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.path == "price"));
    }

    #[test]
    fn zero_price_only_violates_the_positive_rule() {
        let snapshot = RequestSnapshot::new().with_body(json!({
            "name": "Monitor",
            "price": 0
        }));
        let errors = create_product_rules().evaluate(&snapshot);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, MSG_PRICE_NOT_POSITIVE);
    }

    #[test]
    fn numeric_string_prices_are_accepted() {
        let snapshot = RequestSnapshot::new().with_body(json!({
            "name": "Monitor",
            "price": "55"
        }));

        assert!(create_product_rules().evaluate(&snapshot).is_empty());
    }

    #[test]
    fn non_integer_id_yields_a_single_error() {
        let snapshot = RequestSnapshot::new().with_param("id", "not-valid-url");
        let errors = id_param_rules().evaluate(&snapshot);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, MSG_INVALID_ID);
        assert_eq!(errors[0].location, "params");
    }

    #[test]
    fn valid_update_body_passes() {
        let snapshot = RequestSnapshot::new().with_param("id", "1").with_body(json!({
            "name": "Monitor Curvo",
            "price": 300,
            "availability": true
        }));

        assert!(update_product_rules().check(&snapshot).is_ok());
    }
}
