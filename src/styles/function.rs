use crate::styles::color::Color;
use crate::utils::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FunctionType {
    Exponential,
    Interval,
}

/// Zoom dependent property: `{"base": 1.2, "stops": [[5, 1], [12, 4]]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ZoomFunction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,

    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_type: Option<FunctionType>,

    pub stops: Vec<(f64, Value)>,
}

fn interpolation_factor(base: f64, lower: f64, upper: f64, zoom: f64) -> f64 {
    let diff = upper - lower;
    let progress = zoom - lower;
    if diff == 0.0 {
        return 0.0;
    }
    if base == 1.0 {
        return progress / diff;
    }
    (base.powf(progress) - 1.0) / (base.powf(diff) - 1.0)
}

fn interpolate_value(lower: &Value, upper: &Value, t: f64) -> Value {
    if let (Some(a), Some(b)) = (lower.as_f64(), upper.as_f64()) {
        return json!(a + (b - a) * t);
    }
    if let (Some(a), Some(b)) = (lower.as_str(), upper.as_str()) {
        if let (Ok(ca), Ok(cb)) = (Color::parse(a), Color::parse(b)) {
            return json!(ca.interpolate(&cb, t).to_string());
        }
    }
    lower.clone()
}

impl ZoomFunction {
    pub fn base(&self) -> f64 {
        self.base.unwrap_or(1.0)
    }

    pub fn function_type(&self) -> FunctionType {
        self.function_type.unwrap_or(FunctionType::Exponential)
    }

    pub fn validate(&self) -> Result<()> {
        if self.stops.is_empty() {
            return Err(Error::InvalidFunction(String::from("no stops")));
        }
        if self.base() <= 0.0 {
            return Err(Error::InvalidFunction(format!("base {} must be positive", self.base())));
        }
        for w in self.stops.windows(2) {
            if !(w[0].0 < w[1].0) {
                return Err(Error::InvalidFunction(format!(
                    "stops not ascending: {} then {}",
                    w[0].0, w[1].0
                )));
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, zoom: f64) -> Value {
        let first = match self.stops.first() {
            Some(f) => f,
            None => {
                return Value::Null;
            }
        };
        if zoom <= first.0 {
            return first.1.clone();
        }

        for w in self.stops.windows(2) {
            let (z0, v0) = (&w[0].0, &w[0].1);
            let (z1, v1) = (&w[1].0, &w[1].1);
            if zoom < *z1 {
                return match self.function_type() {
                    FunctionType::Interval => v0.clone(),
                    FunctionType::Exponential => {
                        let t = interpolation_factor(self.base(), *z0, *z1, zoom);
                        interpolate_value(v0, v1, t)
                    }
                };
            }
        }

        match self.stops.last() {
            Some(l) => l.1.clone(),
            None => Value::Null,
        }
    }
}

/// A layout or paint value: a zoom function or a plain literal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Function(ZoomFunction),
    Literal(Value),
}

impl PropertyValue {
    pub fn evaluate(&self, zoom: f64) -> Value {
        match self {
            PropertyValue::Function(f) => f.evaluate(zoom),
            PropertyValue::Literal(v) => v.clone(),
        }
    }

    /// Every value this property can take: the literal, or each stop value.
    pub fn values(&self) -> Vec<&Value> {
        match self {
            PropertyValue::Function(f) => f.stops.iter().map(|(_, v)| v).collect(),
            PropertyValue::Literal(v) => vec![v],
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            PropertyValue::Function(f) => f.validate(),
            PropertyValue::Literal(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(s: &str) -> ZoomFunction {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_linear_stops() {
        let f = func(r#"{"stops": [[5, 1], [10, 3]]}"#);
        assert_eq!(f.evaluate(0.0), json!(1));
        assert_eq!(f.evaluate(5.0), json!(1));
        assert_eq!(f.evaluate(7.5).as_f64().unwrap(), 2.0);
        assert_eq!(f.evaluate(10.0), json!(3));
        assert_eq!(f.evaluate(22.0), json!(3));
    }

    #[test]
    fn test_exponential_stops() {
        let f = func(r#"{"base": 2, "stops": [[0, 0], [2, 3]]}"#);
        // (2^1 - 1) / (2^2 - 1) = 1/3
        assert!((f.evaluate(1.0).as_f64().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_interval_stops() {
        let f = func(r#"{"type": "interval", "stops": [[4, "a"], [8, "b"], [12, "c"]]}"#);
        assert_eq!(f.evaluate(3.0), json!("a"));
        assert_eq!(f.evaluate(9.9), json!("b"));
        assert_eq!(f.evaluate(12.0), json!("c"));
    }

    #[test]
    fn test_colour_stops() {
        let f = func(r##"{"stops": [[0, "#000000"], [10, "rgba(200, 100, 50, 1)"]]}"##);
        assert_eq!(f.evaluate(5.0), json!("rgba(100, 50, 25, 1)"));
    }

    #[test]
    fn test_non_interpolable_takes_lower() {
        let f = func(r#"{"stops": [[0, "none"], [10, "visible"]]}"#);
        assert_eq!(f.evaluate(9.0), json!("none"));
    }

    #[test]
    fn test_validate() {
        assert!(func(r#"{"stops": [[0, 1], [3, 2]]}"#).validate().is_ok());
        assert!(func(r#"{"stops": [[3, 1], [3, 2]]}"#).validate().is_err());
        assert!(func(r#"{"stops": []}"#).validate().is_err());
        assert!(func(r#"{"base": 0, "stops": [[1, 1]]}"#).validate().is_err());
    }

    #[test]
    fn test_property_value_untagged() {
        let p: PropertyValue = serde_json::from_str(r#"{"stops": [[1, 2]]}"#).unwrap();
        assert!(matches!(p, PropertyValue::Function(_)));

        let p: PropertyValue = serde_json::from_str(r#"["Open Sans Regular"]"#).unwrap();
        assert_eq!(p, PropertyValue::Literal(json!(["Open Sans Regular"])));

        // objects that aren't zoom functions stay literal
        let p: PropertyValue = serde_json::from_str(r#"{"stops": [[1, 2]], "property": "x"}"#).unwrap();
        assert!(matches!(p, PropertyValue::Literal(_)));
        assert_eq!(p.evaluate(3.0), json!({"stops": [[1, 2]], "property": "x"}));
    }
}
