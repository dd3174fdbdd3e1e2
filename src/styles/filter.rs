use crate::styles::expression;
use crate::styles::properties::FeatureLike;
use crate::utils::{Error, Result};

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    fn from_str(s: &str) -> Option<CompareOp> {
        match s {
            "==" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// Layer filter. Legacy arrays, e.g. `["all", ["==", "$type", "Polygon"], ["in", "class", "lake", "river"]]`,
/// are parsed; newer expression filters such as `["==", ["get", "class"], "lake"]` are kept as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Compare(CompareOp, String, Value),
    In(String, Vec<Value>),
    NotIn(String, Vec<Value>),
    Has(String),
    NotHas(String),
    All(Vec<Filter>),
    Any(Vec<Filter>),
    None(Vec<Filter>),
    Expression(Value),
}

const GEOMETRY_TYPE_KEY: &str = "$type";

fn invalid(msg: String) -> Error {
    Error::InvalidFilter(msg)
}

fn key_arg(parts: &[Value], op: &str) -> Result<String> {
    match parts.get(1) {
        Some(Value::String(k)) => Ok(k.clone()),
        _ => Err(invalid(format!("{} expects a key as its first argument", op))),
    }
}

fn is_literal(v: &Value) -> bool {
    match v {
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => true,
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    compare_values(a, b) == Some(Ordering::Equal)
}

/// Follows the style format's rule for telling expression filters from legacy ones.
fn is_expression(value: &Value) -> bool {
    let parts = match value {
        Value::Bool(_) => {
            return true;
        }
        Value::Array(p) if !p.is_empty() => p,
        _ => {
            return false;
        }
    };
    match parts[0].as_str() {
        Some("has") => parts.len() >= 2 && parts[1] != GEOMETRY_TYPE_KEY && parts[1] != "$id",
        Some("in") => parts.len() >= 3 && (!parts[1].is_string() || parts[2].is_array()),
        Some("!in") | Some("!has") | Some("none") => false,
        Some(op) if CompareOp::from_str(op).is_some() => {
            parts.len() != 3 || parts[1].is_array() || parts[2].is_array()
        }
        Some("any") | Some("all") => parts[1..].iter().all(|f| f.is_boolean() || is_expression(f)),
        Some(_) => true,
        None => false,
    }
}

impl Filter {
    pub fn from_value(value: &Value) -> Result<Filter> {
        if is_expression(value) {
            return Ok(Filter::Expression(value.clone()));
        }
        let parts = match value {
            Value::Array(p) => p,
            _ => {
                return Err(invalid(format!("filter must be an array, not {}", value)));
            }
        };
        let op = match parts.first() {
            Some(Value::String(op)) => op.as_str(),
            _ => {
                return Err(invalid(format!("filter {} has no operator", value)));
            }
        };

        if let Some(cmp) = CompareOp::from_str(op) {
            let key = key_arg(parts, op)?;
            if !is_literal(&parts[2]) {
                return Err(invalid(format!("{} compares against a literal", op)));
            }
            return Ok(Filter::Compare(cmp, key, parts[2].clone()));
        }

        match op {
            "in" | "!in" => {
                let key = key_arg(parts, op)?;
                let vals: Vec<Value> = parts[2..].to_vec();
                if let Some(v) = vals.iter().find(|v| !is_literal(v)) {
                    return Err(invalid(format!("{} can't match against {}", op, v)));
                }
                if op == "in" {
                    Ok(Filter::In(key, vals))
                } else {
                    Ok(Filter::NotIn(key, vals))
                }
            }
            "has" | "!has" => {
                if parts.len() != 2 {
                    return Err(invalid(format!("{} takes one argument", op)));
                }
                let key = key_arg(parts, op)?;
                if op == "has" {
                    Ok(Filter::Has(key))
                } else {
                    Ok(Filter::NotHas(key))
                }
            }
            "all" | "any" | "none" => {
                let mut subs = Vec::with_capacity(parts.len() - 1);
                for p in &parts[1..] {
                    subs.push(Filter::from_value(p)?);
                }
                Ok(match op {
                    "all" => Filter::All(subs),
                    "any" => Filter::Any(subs),
                    _ => Filter::None(subs),
                })
            }
            _ => Err(invalid(format!("unknown filter operator {:?}", op))),
        }
    }

    pub fn to_value(&self) -> Value {
        let combine = |op: &str, subs: &[Filter]| -> Value {
            let mut res = vec![json!(op)];
            res.extend(subs.iter().map(|f| f.to_value()));
            Value::Array(res)
        };
        let membership = |op: &str, key: &str, vals: &[Value]| -> Value {
            let mut res = vec![json!(op), json!(key)];
            res.extend(vals.iter().cloned());
            Value::Array(res)
        };

        match self {
            Filter::Compare(cmp, key, val) => json!([cmp.as_str(), key, val]),
            Filter::In(key, vals) => membership("in", key, vals),
            Filter::NotIn(key, vals) => membership("!in", key, vals),
            Filter::Has(key) => json!(["has", key]),
            Filter::NotHas(key) => json!(["!has", key]),
            Filter::All(subs) => combine("all", subs),
            Filter::Any(subs) => combine("any", subs),
            Filter::None(subs) => combine("none", subs),
            Filter::Expression(v) => v.clone(),
        }
    }

    fn lookup<F: FeatureLike + ?Sized>(feature: &F, key: &str) -> Option<Value> {
        if key == GEOMETRY_TYPE_KEY {
            return feature.geometry_type().map(|t| json!(t));
        }
        feature.property(key).cloned()
    }

    pub fn evaluate<F: FeatureLike + ?Sized>(&self, feature: &F) -> bool {
        match self {
            Filter::Compare(cmp, key, val) => match Filter::lookup(feature, key) {
                None => *cmp == CompareOp::Ne,
                Some(actual) => match cmp {
                    CompareOp::Eq => values_equal(&actual, val),
                    CompareOp::Ne => !values_equal(&actual, val),
                    _ => match compare_values(&actual, val) {
                        None => false,
                        Some(ord) => match cmp {
                            CompareOp::Lt => ord == Ordering::Less,
                            CompareOp::Le => ord != Ordering::Greater,
                            CompareOp::Gt => ord == Ordering::Greater,
                            _ => ord != Ordering::Less,
                        },
                    },
                },
            },
            Filter::In(key, vals) => match Filter::lookup(feature, key) {
                None => false,
                Some(actual) => vals.iter().any(|v| values_equal(&actual, v)),
            },
            Filter::NotIn(key, vals) => match Filter::lookup(feature, key) {
                None => true,
                Some(actual) => !vals.iter().any(|v| values_equal(&actual, v)),
            },
            Filter::Has(key) => Filter::lookup(feature, key).is_some(),
            Filter::NotHas(key) => Filter::lookup(feature, key).is_none(),
            Filter::All(subs) => subs.iter().all(|f| f.evaluate(feature)),
            Filter::Any(subs) => subs.iter().any(|f| f.evaluate(feature)),
            Filter::None(subs) => !subs.iter().any(|f| f.evaluate(feature)),
            // an expression this crate can't evaluate lets the feature through
            Filter::Expression(v) => match expression::evaluate(v, feature) {
                Some(Value::Bool(b)) => b,
                Some(_) => false,
                None => true,
            },
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Filter, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Filter::from_value(&value).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn props(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    fn filter(v: Value) -> Filter {
        Filter::from_value(&v).unwrap()
    }

    #[test]
    fn test_compare() {
        let f = props(json!({"class": "river", "rank": 4}));
        assert!(filter(json!(["==", "class", "river"])).evaluate(&f));
        assert!(!filter(json!(["==", "class", "lake"])).evaluate(&f));
        assert!(filter(json!(["!=", "class", "lake"])).evaluate(&f));
        assert!(filter(json!(["<", "rank", 5])).evaluate(&f));
        assert!(filter(json!(["<=", "rank", 4.0])).evaluate(&f));
        assert!(!filter(json!([">", "rank", 4])).evaluate(&f));
        assert!(filter(json!([">=", "rank", 4])).evaluate(&f));
        // mixed types never compare
        assert!(!filter(json!(["<", "rank", "5"])).evaluate(&f));
    }

    #[test]
    fn test_missing_property() {
        let f = props(json!({}));
        assert!(!filter(json!(["==", "class", "river"])).evaluate(&f));
        assert!(filter(json!(["!=", "class", "river"])).evaluate(&f));
        assert!(!filter(json!([">", "rank", 1])).evaluate(&f));
        assert!(!filter(json!(["in", "class", "river"])).evaluate(&f));
        assert!(filter(json!(["!in", "class", "river"])).evaluate(&f));
        assert!(filter(json!(["!has", "class"])).evaluate(&f));
    }

    #[test]
    fn test_membership_and_combinators() {
        let f = props(json!({"huc": "1402", "name": "Gunnison"}));
        let fl = filter(json!([
            "all",
            ["in", "huc", "1401", "1402"],
            ["has", "name"],
            ["none", ["==", "name", "Colorado"]]
        ]));
        assert!(fl.evaluate(&f));
        assert!(filter(json!(["any", ["==", "huc", "0"], ["!in", "huc", "1401"]])).evaluate(&f));
        assert!(filter(json!(["all"])).evaluate(&f));
        assert!(!filter(json!(["any"])).evaluate(&f));
    }

    #[test]
    fn test_geometry_type() {
        let feat: geojson::Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
            "properties": {"class": "stream"}
        }))
        .unwrap();
        assert!(filter(json!(["==", "$type", "LineString"])).evaluate(&feat));
        assert!(!filter(json!(["==", "$type", "Polygon"])).evaluate(&feat));
    }

    #[test]
    fn test_parse_errors() {
        for v in &[
            json!("=="),
            json!([]),
            json!([1, "a"]),
            json!(["==", 1, 1]),
            json!(["==", "a", {"b": 1}]),
            json!(["has"]),
            json!(["!has", "a", "b"]),
            json!(["!in"]),
            json!(["none", 1]),
        ] {
            match Filter::from_value(v) {
                Err(Error::InvalidFilter(_)) => {}
                other => panic!("{} gave {:?}", v, other),
            }
        }
    }

    #[test]
    fn test_expression_filters() {
        let f = props(json!({"status": "active", "rank": 2}));
        for v in &[
            json!(["==", ["get", "status"], "active"]),
            json!(["all", ["has", "rank"], [">", ["get", "rank"], 1]]),
            json!(["in", ["get", "status"], ["literal", ["active", "seasonal"]]]),
            json!(true),
        ] {
            let fl = filter(v.clone());
            assert!(matches!(fl, Filter::Expression(_)), "{}", v);
            assert!(fl.evaluate(&f), "{}", v);
            assert_eq!(&fl.to_value(), v);
        }
        assert!(!filter(json!(["==", ["get", "status"], "retired"])).evaluate(&f));
        // not evaluated here, so the feature is kept
        assert!(filter(json!(["<", ["zoom"], 5])).evaluate(&f));
        // legacy forms stay legacy
        assert!(matches!(filter(json!(["!has", "rank"])), Filter::NotHas(_)));
        assert!(matches!(filter(json!(["in", "status", "active"])), Filter::In(_, _)));
    }

    #[test]
    fn test_serde_keeps_array_form() {
        let v = json!(["all", ["==", "$type", "Polygon"], ["!in", "class", "a", 2], ["!has", "x"]]);
        let f: Filter = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(serde_json::to_value(&f).unwrap(), v);
    }
}
