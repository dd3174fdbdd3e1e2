use crate::styles::color::Color;
use crate::styles::filter::Filter;
use crate::styles::function::PropertyValue;
use crate::styles::properties::FeatureLike;
use crate::styles::sprite::SpriteSource;
use crate::utils::{Error, Result};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

pub const STYLE_VERSION: u8 = 8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    Vector,
    Raster,
    RasterDem,
    Geojson,
    Image,
    Video,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TileScheme {
    Xyz,
    Tms,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    #[serde(rename = "type")]
    pub source_type: SourceType,

    /// TileJSON url, or an arcgis vector tile service root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<TileScheme>,
    #[serde(rename = "tileSize")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Keys without a field here (`bounds`, `encoding`, `coordinates`...), kept as written.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn tile_template_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{z\}.*\{[xy]\}.*\{[xy]\}").expect("tile pattern"))
}

impl Source {
    pub fn validate(&self) -> Result<()> {
        match self.source_type {
            SourceType::Video => {
                if !self.extra.contains_key("urls") {
                    return Err(Error::InvalidSource(String::from("video source needs urls")));
                }
            }
            SourceType::Image => {
                if self.url.is_none() {
                    return Err(Error::InvalidSource(String::from("image source needs a url")));
                }
            }
            _ => {
                if self.url.is_none() && self.tiles.is_none() && self.data.is_none() {
                    return Err(Error::InvalidSource(String::from("source needs url, tiles or data")));
                }
            }
        }
        if matches!(self.source_type, SourceType::Image | SourceType::Video) && !self.extra.contains_key("coordinates") {
            return Err(Error::InvalidSource(String::from("image and video sources need coordinates")));
        }
        if let Some(tiles) = &self.tiles {
            if tiles.is_empty() {
                return Err(Error::InvalidSource(String::from("empty tiles list")));
            }
            for t in tiles {
                if !(t.contains("{x}") && t.contains("{y}") && tile_template_pattern().is_match(t)) {
                    return Err(Error::InvalidSource(format!("tile url {:?} lacks {{z}}, {{x}} and {{y}}", t)));
                }
            }
        }
        if let (Some(a), Some(b)) = (self.minzoom, self.maxzoom) {
            if a > b {
                return Err(Error::InvalidSource(format!("minzoom {} above maxzoom {}", a, b)));
            }
        }
        if self.data.is_some() && self.source_type != SourceType::Geojson {
            return Err(Error::InvalidSource(String::from("only geojson sources carry data")));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    Background,
    Fill,
    Line,
    Symbol,
    Circle,
    Raster,
    FillExtrusion,
    Heatmap,
    Hillshade,
}

pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleLayer {
    pub id: String,

    #[serde(rename = "type")]
    pub layer_type: LayerType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(rename = "source-layer")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint: Option<Properties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn evaluate_all(props: &Option<Properties>, zoom: f64) -> BTreeMap<String, Value> {
    let mut res = BTreeMap::new();
    if let Some(p) = props {
        for (k, v) in p {
            res.insert(k.clone(), v.evaluate(zoom));
        }
    }
    res
}

fn is_color_property(key: &str) -> bool {
    key.ends_with("-color")
}

impl StyleLayer {
    pub fn visible_at(&self, zoom: f64) -> bool {
        if let Some(min) = self.minzoom {
            if zoom < min {
                return false;
            }
        }
        if let Some(max) = self.maxzoom {
            if zoom >= max {
                return false;
            }
        }
        match self.layout.as_ref().and_then(|l| l.get("visibility")) {
            Some(v) => v.evaluate(zoom) != Value::from("none"),
            None => true,
        }
    }

    pub fn paint_at(&self, zoom: f64) -> BTreeMap<String, Value> {
        evaluate_all(&self.paint, zoom)
    }

    pub fn layout_at(&self, zoom: f64) -> BTreeMap<String, Value> {
        evaluate_all(&self.layout, zoom)
    }

    pub fn matches<F: FeatureLike + ?Sized>(&self, feature: &F) -> bool {
        match &self.filter {
            None => true,
            Some(f) => f.evaluate(feature),
        }
    }

    /// Names of sprite icons this layer draws, where they are literal.
    pub fn icon_names(&self) -> Vec<String> {
        let mut res = Vec::new();
        if let Some(img) = self.layout.as_ref().and_then(|l| l.get("icon-image")) {
            for v in img.values() {
                if let Some(s) = v.as_str() {
                    if !s.contains('{') {
                        res.push(String::from(s));
                    }
                }
            }
        }
        res
    }

    fn validate_properties(&self, props: &Option<Properties>) -> Result<()> {
        let props = match props {
            Some(p) => p,
            None => {
                return Ok(());
            }
        };
        for (k, v) in props {
            v.validate().map_err(|e| Error::InvalidLayer(format!("layer {} {}: {}", self.id, k, e)))?;
            if is_color_property(k) {
                for c in v.values() {
                    match c.as_str() {
                        Some(s) => {
                            Color::parse(s)?;
                        }
                        // data expressions are not evaluated here
                        None if c.is_array() => {}
                        None => {
                            return Err(Error::InvalidColor(format!("layer {} {} is not a colour string", self.id, k)));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn validate(&self, sources: &BTreeMap<String, Source>) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidLayer(String::from("layer without an id")));
        }
        if let (Some(a), Some(b)) = (self.minzoom, self.maxzoom) {
            if a > b {
                return Err(Error::InvalidLayer(format!("layer {} minzoom {} above maxzoom {}", self.id, a, b)));
            }
        }
        match (self.layer_type, &self.source) {
            (LayerType::Background, _) => {}
            (_, None) => {
                return Err(Error::InvalidLayer(format!("layer {} has no source", self.id)));
            }
            (_, Some(s)) => match sources.get(s) {
                None => {
                    return Err(Error::InvalidLayer(format!("layer {} refers to missing source {}", self.id, s)));
                }
                Some(src) => {
                    if src.source_type == SourceType::Vector && self.source_layer.is_none() {
                        return Err(Error::InvalidLayer(format!(
                            "layer {} on vector source {} needs a source-layer",
                            self.id, s
                        )));
                    }
                }
            },
        }
        self.validate_properties(&self.layout)?;
        self.validate_properties(&self.paint)?;
        Ok(())
    }
}

/// A vector tile style document (version 8 of the mapbox / maplibre format).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub version: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<SpriteSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,

    pub sources: BTreeMap<String, Source>,
    pub layers: Vec<StyleLayer>,

    /// `bearing`, `pitch`, `light`, `transition` and anything newer.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MapStyle {
    pub fn layer(&self, id: &str) -> Option<&StyleLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn visible_layers(&self, zoom: f64) -> Vec<&StyleLayer> {
        self.layers.iter().filter(|l| l.visible_at(zoom)).collect()
    }

    /// Layers drawn at `zoom` for a feature from `source_layer`, in draw order.
    pub fn layers_for_feature<F: FeatureLike + ?Sized>(&self, source_layer: &str, feature: &F, zoom: f64) -> Vec<&StyleLayer> {
        self.layers
            .iter()
            .filter(|l| l.source_layer.as_deref() == Some(source_layer))
            .filter(|l| l.visible_at(zoom) && l.matches(feature))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != STYLE_VERSION {
            return Err(Error::InvalidLayer(format!("style version {} is not {}", self.version, STYLE_VERSION)));
        }
        if let Some(g) = &self.glyphs {
            if !(g.contains("{fontstack}") && g.contains("{range}")) {
                return Err(Error::InvalidSource(format!("glyphs url {:?} needs {{fontstack}} and {{range}}", g)));
            }
        }
        for (name, s) in &self.sources {
            s.validate().map_err(|e| Error::InvalidSource(format!("source {}: {}", name, e)))?;
        }

        let mut ids = BTreeSet::new();
        for l in &self.layers {
            if !ids.insert(l.id.as_str()) {
                return Err(Error::InvalidLayer(format!("duplicate layer id {}", l.id)));
            }
            l.validate(&self.sources)?;
        }

        if let Some(SpriteSource::Embedded(atlas)) = &self.sprite {
            atlas.validate()?;
            for l in &self.layers {
                for icon in l.icon_names() {
                    if atlas.icon(&icon).is_none() {
                        return Err(Error::InvalidSprite(format!("layer {} uses missing icon {}", l.id, icon)));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn style(v: Value) -> MapStyle {
        serde_json::from_value(v).unwrap()
    }

    fn rivers() -> MapStyle {
        style(json!({
            "version": 8,
            "name": "Rivers",
            "glyphs": "https://fonts.example.com/{fontstack}/{range}.pbf",
            "sources": {
                "hydro": {"type": "vector", "tiles": ["https://tiles.example.com/{z}/{x}/{y}.pbf"], "maxzoom": 14}
            },
            "layers": [
                {"id": "background", "type": "background", "paint": {"background-color": "#f8f4f0"}},
                {
                    "id": "streams",
                    "type": "line",
                    "source": "hydro",
                    "source-layer": "streams",
                    "minzoom": 6,
                    "filter": ["==", "$type", "LineString"],
                    "paint": {
                        "line-color": "#1E90FF",
                        "line-width": {"base": 1.4, "stops": [[6, 0.5], [14, 3]]}
                    }
                },
                {
                    "id": "lakes",
                    "type": "fill",
                    "source": "hydro",
                    "source-layer": "waterbodies",
                    "layout": {"visibility": "none"},
                    "paint": {"fill-color": "rgba(141, 214, 252, 1)"}
                }
            ]
        }))
    }

    #[test]
    fn test_visibility() {
        let s = rivers();
        s.validate().unwrap();
        let ids: Vec<&str> = s.visible_layers(4.0).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["background"]);
        let ids: Vec<&str> = s.visible_layers(8.0).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["background", "streams"]);
    }

    #[test]
    fn test_paint_at() {
        let s = rivers();
        let streams = s.layer("streams").unwrap();
        assert_eq!(streams.paint_at(6.0)["line-width"], json!(0.5));
        assert_eq!(streams.paint_at(20.0)["line-width"], json!(3));
        assert_eq!(streams.paint_at(10.0)["line-color"], json!("#1E90FF"));
        let mid = streams.paint_at(10.0)["line-width"].as_f64().unwrap();
        assert!(mid > 0.5 && mid < 1.75);
    }

    #[test]
    fn test_layers_for_feature() {
        let s = rivers();
        let feat: geojson::Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 0.5]]},
            "properties": {}
        }))
        .unwrap();
        assert_eq!(s.layers_for_feature("streams", &feat, 10.0).len(), 1);
        assert!(s.layers_for_feature("streams", &Map::new(), 10.0).is_empty());
        assert!(s.layers_for_feature("waterbodies", &feat, 10.0).is_empty());
    }

    #[test]
    fn test_validate_errors() {
        let mut s = rivers();
        s.layers[1].source = Some(String::from("nope"));
        assert!(matches!(s.validate(), Err(Error::InvalidLayer(_))));

        let mut s = rivers();
        s.layers[1].source_layer = None;
        assert!(matches!(s.validate(), Err(Error::InvalidLayer(_))));

        let mut s = rivers();
        s.layers[2].id = String::from("streams");
        assert!(matches!(s.validate(), Err(Error::InvalidLayer(_))));

        let mut s = rivers();
        s.glyphs = Some(String::from("https://fonts.example.com/font.pbf"));
        assert!(matches!(s.validate(), Err(Error::InvalidSource(_))));

        let mut s = rivers();
        s.version = 7;
        assert!(s.validate().is_err());

        let mut s = rivers();
        s.sources.get_mut("hydro").unwrap().tiles = Some(vec![String::from("https://tiles.example.com/tile.pbf")]);
        assert!(matches!(s.validate(), Err(Error::InvalidSource(_))));

        let bad_colour = style(json!({
            "version": 8,
            "sources": {},
            "layers": [{"id": "bg", "type": "background", "paint": {"background-color": "#12"}}]
        }));
        assert!(matches!(bad_colour.validate(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_keeps_unknown_keys() {
        let v = json!({
            "version": 8,
            "bearing": 12.5,
            "pitch": 40,
            "terrain": {"source": "dem", "exaggeration": 1.5},
            "sources": {
                "dem": {
                    "type": "raster-dem",
                    "tiles": ["https://dem.example.com/{z}/{x}/{y}.png"],
                    "tileSize": 256,
                    "encoding": "terrarium",
                    "bounds": [-109.1, 36.9, -102.0, 41.0]
                },
                "gauges": {"type": "geojson", "data": "https://example.com/gauges.geojson", "cluster": true}
            },
            "layers": [
                {"id": "relief", "type": "hillshade", "source": "dem", "paint": {"hillshade-shadow-color": "#473B24"}},
                {
                    "id": "gauges",
                    "type": "circle",
                    "source": "gauges",
                    "filter": ["==", ["get", "status"], "active"],
                    "paint": {"circle-color": ["match", ["get", "kind"], "snotel", "#0000ff", "#888888"]},
                    "interactive": true
                }
            ]
        });
        let s = style(v.clone());
        assert_eq!(s.extra["pitch"], json!(40));
        assert_eq!(s.sources["dem"].source_type, SourceType::RasterDem);
        assert_eq!(s.sources["dem"].extra["encoding"], json!("terrarium"));
        assert_eq!(s.layers[1].extra["interactive"], json!(true));
        s.validate().unwrap();
        assert_eq!(serde_json::to_value(&s).unwrap(), v);
    }

    #[test]
    fn test_image_and_video_sources() {
        let image: Source = serde_json::from_value(json!({
            "type": "image",
            "url": "https://example.com/radar.gif",
            "coordinates": [[-80.4, 37.9], [-71.2, 37.9], [-71.2, 31.4], [-80.4, 31.4]]
        }))
        .unwrap();
        image.validate().unwrap();

        let video: Source = serde_json::from_value(json!({"type": "video", "coordinates": []})).unwrap();
        assert!(matches!(video.validate(), Err(Error::InvalidSource(_))));

        let bare: Source = serde_json::from_value(json!({"type": "image", "url": "https://example.com/a.png"})).unwrap();
        assert!(matches!(bare.validate(), Err(Error::InvalidSource(_))));
    }
}
