use crate::styles::filter::compare_values;
use crate::styles::properties::FeatureLike;

use serde_json::{json, Value};
use std::cmp::Ordering;

fn same(a: &Value, b: &Value) -> bool {
    compare_values(a, b) == Some(Ordering::Equal)
}

/// Evaluates the feature-data subset of style expressions (`get`, `has`,
/// `geometry-type`, comparisons, `!`, `all`, `any`, `in`, `match`, `case`,
/// `coalesce` and `literal`). Returns `None` for anything else.
pub fn evaluate<F: FeatureLike + ?Sized>(expr: &Value, feature: &F) -> Option<Value> {
    let parts = match expr {
        Value::Array(p) => p,
        Value::Object(_) => {
            return None;
        }
        lit => {
            return Some(lit.clone());
        }
    };
    let op = parts.first()?.as_str()?;
    let args = &parts[1..];
    let arg = |i: usize| -> Option<Value> { evaluate(args.get(i)?, feature) };

    match op {
        "literal" if args.len() == 1 => Some(args[0].clone()),
        "get" if args.len() == 1 => {
            let key = arg(0)?;
            Some(feature.property(key.as_str()?).cloned().unwrap_or(Value::Null))
        }
        "has" if args.len() == 1 => {
            let key = arg(0)?;
            Some(Value::Bool(feature.property(key.as_str()?).is_some()))
        }
        "geometry-type" if args.is_empty() => Some(feature.geometry_type().map_or(Value::Null, |t| json!(t))),
        "!" if args.len() == 1 => Some(Value::Bool(!arg(0)?.as_bool()?)),
        "all" => {
            for a in args {
                if !evaluate(a, feature)?.as_bool()? {
                    return Some(Value::Bool(false));
                }
            }
            Some(Value::Bool(true))
        }
        "any" => {
            for a in args {
                if evaluate(a, feature)?.as_bool()? {
                    return Some(Value::Bool(true));
                }
            }
            Some(Value::Bool(false))
        }
        "==" | "!=" if args.len() == 2 => {
            let eq = same(&arg(0)?, &arg(1)?);
            Some(Value::Bool(if op == "==" { eq } else { !eq }))
        }
        "<" | "<=" | ">" | ">=" if args.len() == 2 => {
            let res = match compare_values(&arg(0)?, &arg(1)?) {
                None => false,
                Some(ord) => match op {
                    "<" => ord == Ordering::Less,
                    "<=" => ord != Ordering::Greater,
                    ">" => ord == Ordering::Greater,
                    _ => ord != Ordering::Less,
                },
            };
            Some(Value::Bool(res))
        }
        "in" if args.len() == 2 => {
            let needle = arg(0)?;
            match arg(1)? {
                Value::Array(items) => Some(Value::Bool(items.iter().any(|v| same(&needle, v)))),
                Value::String(hay) => Some(Value::Bool(hay.contains(needle.as_str()?))),
                _ => None,
            }
        }
        "match" if args.len() >= 4 && args.len() % 2 == 0 => {
            let input = arg(0)?;
            let fallback = args.len() - 1;
            for pair in args[1..fallback].chunks(2) {
                let hit = match &pair[0] {
                    Value::Array(labels) => labels.iter().any(|l| same(&input, l)),
                    label => same(&input, label),
                };
                if hit {
                    return evaluate(&pair[1], feature);
                }
            }
            evaluate(&args[fallback], feature)
        }
        "case" if args.len() >= 3 && args.len() % 2 == 1 => {
            let fallback = args.len() - 1;
            for pair in args[..fallback].chunks(2) {
                if evaluate(&pair[0], feature)?.as_bool()? {
                    return evaluate(&pair[1], feature);
                }
            }
            evaluate(&args[fallback], feature)
        }
        "coalesce" => {
            for a in args {
                match evaluate(a, feature) {
                    Some(Value::Null) | None => {}
                    Some(v) => {
                        return Some(v);
                    }
                }
            }
            Some(Value::Null)
        }
        _ => None,
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

    #[test]
    fn test_get_and_compare() {
        let f = props(json!({"status": "active", "flow": 120}));
        assert_eq!(evaluate(&json!(["get", "status"]), &f), Some(json!("active")));
        assert_eq!(evaluate(&json!(["get", "missing"]), &f), Some(Value::Null));
        assert_eq!(evaluate(&json!(["==", ["get", "status"], "active"]), &f), Some(json!(true)));
        assert_eq!(evaluate(&json!([">=", ["get", "flow"], 100]), &f), Some(json!(true)));
        assert_eq!(evaluate(&json!(["<", ["get", "missing"], 100]), &f), Some(json!(false)));
        assert_eq!(evaluate(&json!(["!", ["has", "flow"]]), &f), Some(json!(false)));
    }

    #[test]
    fn test_match_case_in() {
        let f = props(json!({"kind": "snotel", "huc": "1402"}));
        let colour = json!(["match", ["get", "kind"], ["scan", "snotel"], "#0000ff", "acis", "#00ff00", "#888888"]);
        assert_eq!(evaluate(&colour, &f), Some(json!("#0000ff")));
        assert_eq!(evaluate(&colour, &props(json!({}))), Some(json!("#888888")));

        let size = json!(["case", ["has", "huc"], 4, 2]);
        assert_eq!(evaluate(&size, &f), Some(json!(4)));

        let member = json!(["in", ["get", "huc"], ["literal", ["1401", "1402"]]]);
        assert_eq!(evaluate(&member, &f), Some(json!(true)));
        assert_eq!(evaluate(&json!(["in", "14", ["get", "huc"]]), &f), Some(json!(true)));

        assert_eq!(evaluate(&json!(["coalesce", ["get", "name"], "unnamed"]), &f), Some(json!("unnamed")));
    }

    #[test]
    fn test_unsupported() {
        let f = props(json!({"a": 1}));
        assert_eq!(evaluate(&json!(["zoom"]), &f), None);
        assert_eq!(evaluate(&json!(["==", ["zoom"], 1]), &f), None);
        assert_eq!(evaluate(&json!(["get"]), &f), None);
        assert_eq!(evaluate(&json!({"a": 1}), &f), None);
    }
}
