use crate::styles::default_styles::DEFAULT_STYLES;
use crate::styles::document::MapStyle;
use crate::styles::feature::{CategorizedStyle, FeatureStyle};
use crate::utils::{Error, Result, Timer};
use crate::{debug_message, message};

use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::sync::OnceLock;

/// One entry of the catalogue. The shape is picked from the keys present:
/// map styles have `version`, categorized styles `property`, anything else
/// must be a plain feature style.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Style {
    Map(MapStyle),
    Categorized(CategorizedStyle),
    Feature(FeatureStyle),
}

impl Style {
    pub fn kind(&self) -> &'static str {
        match self {
            Style::Map(_) => "map",
            Style::Categorized(_) => "categorized",
            Style::Feature(_) => "feature",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Style::Map(m) => m.validate(),
            Style::Categorized(c) => c.validate(),
            Style::Feature(f) => f.validate(),
        }
    }

    pub fn as_map(&self) -> Option<&MapStyle> {
        match self {
            Style::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_categorized(&self) -> Option<&CategorizedStyle> {
        match self {
            Style::Categorized(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_feature(&self) -> Option<&FeatureStyle> {
        match self {
            Style::Feature(f) => Some(f),
            _ => None,
        }
    }

    pub fn from_value(value: Value) -> Result<Style> {
        if !value.is_object() {
            return Err(Error::InvalidLayer(format!("style must be an object, not {}", value)));
        }
        let res = if value.get("version").is_some() {
            Style::Map(serde_json::from_value(value)?)
        } else if value.get("property").is_some() {
            Style::Categorized(serde_json::from_value(value)?)
        } else {
            Style::Feature(serde_json::from_value(value)?)
        };
        Ok(res)
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Style, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Style::from_value(value).map_err(|e| de::Error::custom(e.to_string()))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct StyleRegistry {
    styles: BTreeMap<String, Style>,
}

impl<'de> Deserialize<'de> for StyleRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<StyleRegistry, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut styles = BTreeMap::new();
        for (name, value) in raw {
            let style = Style::from_value(value).map_err(|e| de::Error::custom(format!("style {:?}: {}", name, e)))?;
            styles.insert(name, style);
        }
        Ok(StyleRegistry { styles })
    }
}

impl StyleRegistry {
    pub fn new() -> StyleRegistry {
        StyleRegistry { styles: BTreeMap::new() }
    }

    /// The catalogue compiled into the crate.
    pub fn default_styles() -> Result<StyleRegistry> {
        let tm = Timer::new();
        let res: StyleRegistry = serde_json::from_str(DEFAULT_STYLES)?;
        debug_message!("parsed {} default styles in {:0.3}s", res.len(), tm.since());
        Ok(res)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<StyleRegistry> {
        let mut fbuf = BufReader::new(reader);
        Ok(serde_json::from_reader(&mut fbuf)?)
    }

    pub fn from_file(infn: &str) -> Result<StyleRegistry> {
        let ff = File::open(infn)?;
        let res = StyleRegistry::from_reader(ff)?;
        message!("read {} styles from {}", res.len(), infn);
        Ok(res)
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Style)> {
        self.styles.iter()
    }

    pub fn insert(&mut self, name: &str, style: Style) -> Option<Style> {
        self.styles.insert(String::from(name), style)
    }

    /// Adds every style from `other`, replacing any with the same name.
    pub fn merge(&mut self, other: StyleRegistry) {
        for (k, v) in other.styles {
            if self.styles.insert(k.clone(), v).is_some() {
                debug_message!("style {:?} replaced", k);
            }
        }
    }

    /// Problems found in each style; empty when the whole catalogue is usable.
    pub fn check(&self) -> Vec<(String, Error)> {
        let mut res = Vec::new();
        for (k, v) in &self.styles {
            if let Err(e) = v.validate() {
                res.push((k.clone(), e));
            }
        }
        res
    }
}

/// Shared copy of [`StyleRegistry::default_styles`], parsed on first use.
pub fn default_registry() -> &'static StyleRegistry {
    static REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| StyleRegistry::default_styles().expect("embedded styles are valid json"))
}
