use serde_json::{Map, Value};

/// Read access to the attributes of a vector feature.
pub trait FeatureLike {
    fn property(&self, key: &str) -> Option<&Value>;

    /// `Point`, `LineString` or `Polygon`, if the geometry is known.
    fn geometry_type(&self) -> Option<&'static str>;
}

impl FeatureLike for Map<String, Value> {
    fn property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
    fn geometry_type(&self) -> Option<&'static str> {
        None
    }
}

impl FeatureLike for geojson::Feature {
    fn property(&self, key: &str) -> Option<&Value> {
        match &self.properties {
            Some(p) => p.get(key),
            None => None,
        }
    }

    fn geometry_type(&self) -> Option<&'static str> {
        let geom = self.geometry.as_ref()?;
        match &geom.value {
            geojson::Value::Point(_) | geojson::Value::MultiPoint(_) => Some("Point"),
            geojson::Value::LineString(_) | geojson::Value::MultiLineString(_) => Some("LineString"),
            geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_) => Some("Polygon"),
            geojson::Value::GeometryCollection(_) => None,
        }
    }
}

/// Text form of an attribute used to pick a class: integral numbers lose
/// their decimal point, so `1`, `1.0` and `"1"` all give `"1"`.
pub fn value_key(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i.to_string());
            }
            let f = n.as_f64()?;
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_key() {
        assert_eq!(value_key(&json!(1)), Some(String::from("1")));
        assert_eq!(value_key(&json!(-1)), Some(String::from("-1")));
        assert_eq!(value_key(&json!(3.0)), Some(String::from("3")));
        assert_eq!(value_key(&json!(2.5)), Some(String::from("2.5")));
        assert_eq!(value_key(&json!("Mildly Dry")), Some(String::from("Mildly Dry")));
        assert_eq!(value_key(&json!(true)), Some(String::from("true")));
        assert_eq!(value_key(&json!(null)), None);
    }

    #[test]
    fn test_geojson_feature() {
        let f: geojson::Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "MultiPolygon", "coordinates": []},
            "properties": {"dm": 2}
        }))
        .unwrap();
        assert_eq!(f.geometry_type(), Some("Polygon"));
        assert_eq!(FeatureLike::property(&f, "dm"), Some(&json!(2)));
        assert_eq!(FeatureLike::property(&f, "other"), None);
    }
}
