use layerstyles::styles::{
    apply_layer_style_checked, default_registry, FeatureLike, StyledLayer,
};
use layerstyles::utils::{Error, Result};
use layerstyles::{apply_default_layer_style, apply_layer_style, Style, StyleRegistry, StyleTarget};

use serde_json::{json, Value};

#[derive(Default)]
struct MockLayer {
    calls: Vec<Option<Style>>,
}

impl StyleTarget for MockLayer {
    fn apply_style(&mut self, style: Option<&Style>) -> Result<()> {
        self.calls.push(style.cloned());
        Ok(())
    }
}

fn feature(props: Value) -> geojson::Feature {
    serde_json::from_value(json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [-105.0, 40.0]},
        "properties": props
    }))
    .unwrap()
}

#[test]
fn environment_base_is_passed_through() {
    let mut layer = MockLayer::default();
    apply_default_layer_style(&mut layer, "Environment Base").unwrap();

    assert_eq!(layer.calls.len(), 1);
    let passed = layer.calls[0].as_ref().unwrap();
    assert_eq!(Some(passed), default_registry().get("Environment Base"));

    let map = passed.as_map().unwrap();
    assert_eq!(map.version, 8);
    assert_eq!(map.name.as_deref(), Some("Environment Base"));
}

#[test]
fn every_style_applies_once() {
    let reg = StyleRegistry::default_styles().unwrap();
    assert!(reg.len() > 2);
    for name in reg.names() {
        let mut layer = MockLayer::default();
        apply_layer_style(&reg, &mut layer, name).unwrap();
        assert_eq!(layer.calls, vec![reg.get(name).cloned()]);
    }
}

#[test]
fn unknown_name_forwards_nothing() {
    let mut layer = MockLayer::default();
    apply_default_layer_style(&mut layer, "Environment Nowhere").unwrap();
    assert_eq!(layer.calls, vec![None]);

    let mut strict = MockLayer::default();
    let res = apply_layer_style_checked(default_registry(), &mut strict, "Environment Nowhere");
    assert!(matches!(res, Err(Error::StyleNotFound(_))));
    assert!(strict.calls.is_empty());
}

#[test]
fn categorized_styles_pick_by_attribute() {
    let reg = default_registry();
    let usdm = reg.get("USDM").unwrap().as_categorized().unwrap();

    let d3 = usdm.style_for(&feature(json!({"DM": 3}))).unwrap();
    assert_eq!(d3.fill.as_ref().unwrap().color, "rgba(230, 0, 0, 1)");

    // no class for 9, the transparent default applies
    let other = usdm.style_for(&feature(json!({"DM": 9}))).unwrap();
    assert!(other.is_hidden());

    let trends = reg.get("Trends").unwrap().as_categorized().unwrap();
    let down = trends.style_for(&feature(json!({"trend": -1}))).unwrap();
    assert_eq!(down.image.as_ref().unwrap().radius(), 2.0);
}

#[test]
fn watershed_layers_follow_zoom_and_filter() {
    let reg = default_registry();
    let sheds = reg.get("Environment Watersheds").unwrap().as_map().unwrap();

    let huc8 = feature(json!({"name": "Upper Gunnison", "huc8": "14020002"}));
    assert_eq!(huc8.geometry_type(), Some("Point"));

    let at6: Vec<&str> = sheds
        .layers_for_feature("WBDHU8", &huc8, 6.0)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert!(at6.is_empty());

    let at9: Vec<&str> = sheds
        .layers_for_feature("WBDHU8", &huc8, 9.0)
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(at9, vec!["huc8-line", "huc8-label"]);

    let label = sheds.layer("huc8-label").unwrap();
    assert_eq!(label.layout_at(9.0)["text-size"], json!(10));
    assert_eq!(label.layout_at(11.5)["text-size"], json!(12));
}

#[test]
fn registry_file_round_trip() {
    let reg = default_registry();
    let text = serde_json::to_string_pretty(reg).unwrap();
    let back = StyleRegistry::from_reader(text.as_bytes()).unwrap();
    assert_eq!(back.names(), reg.names());
    assert!(back.check().is_empty());

    let mut layer = StyledLayer::new("roundtrip");
    apply_layer_style(&back, &mut layer, "County Border").unwrap();
    assert_eq!(layer.style.as_ref(), reg.get("County Border"));
}

#[test]
fn loaded_styles_reach_the_layer_unchanged() {
    let input = json!({
        "Terrain": {
            "version": 8,
            "bearing": 12.5,
            "pitch": 40,
            "sources": {
                "dem": {
                    "type": "raster-dem",
                    "url": "https://dem.example.com/tiles.json",
                    "encoding": "terrarium",
                    "bounds": [-109.1, 36.9, -102.0, 41.0]
                },
                "gauges": {"type": "geojson", "data": {"type": "FeatureCollection", "features": []}}
            },
            "layers": [
                {"id": "relief", "type": "hillshade", "source": "dem"},
                {
                    "id": "active-gauges",
                    "type": "circle",
                    "source": "gauges",
                    "filter": ["==", ["get", "status"], "active"],
                    "paint": {"circle-color": "#1E90FF"}
                }
            ]
        },
        "Thin Border": {"stroke": {"color": "#000000"}}
    });
    let text = serde_json::to_string(&input).unwrap();
    let reg = StyleRegistry::from_reader(text.as_bytes()).unwrap();
    assert!(reg.check().is_empty(), "{:?}", reg.check());

    for name in ["Terrain", "Thin Border"] {
        let mut layer = MockLayer::default();
        apply_layer_style(&reg, &mut layer, name).unwrap();
        assert_eq!(layer.calls.len(), 1);
        let received = serde_json::to_value(layer.calls[0].as_ref().unwrap()).unwrap();
        assert_eq!(received, input[name], "{} changed", name);
    }

    let terrain = reg.get("Terrain").unwrap().as_map().unwrap();
    let active = feature(json!({"status": "active"}));
    let retired = feature(json!({"status": "retired"}));
    assert!(terrain.layer("active-gauges").unwrap().matches(&active));
    assert!(!terrain.layer("active-gauges").unwrap().matches(&retired));
}
