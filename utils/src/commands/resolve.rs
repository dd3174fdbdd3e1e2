use clap::{Args, ValueHint};
use serde_json::{json, Value};

use layerstyles::Style;
use layerstyles::styles::FeatureLike;

use crate::commands::{read_features, Defaults, RunCmd};
use crate::error::{Error, Result};


#[derive(Args, Debug)]
pub struct Resolve {
    ///style name
    name: String,

    ///geojson Feature or FeatureCollection
    #[arg(value_hint=ValueHint::FilePath)]
    input: String,

    ///zoom level, for map styles
    #[arg(short, long, default_value_t = 10.0)]
    zoom: f64,

    ///source layer the features come from, required for map styles
    #[arg(short, long)]
    source_layer: Option<String>,
}

fn feature_label(idx: usize, feature: &geojson::Feature) -> String {
    match &feature.id {
        Some(geojson::feature::Id::String(s)) => s.clone(),
        Some(geojson::feature::Id::Number(n)) => n.to_string(),
        None => format!("#{}", idx),
    }
}

impl RunCmd for Resolve {
    fn run(&self, defaults: &Defaults) -> Result<()> {

        let style = match defaults.registry.get(&self.name) {
            Some(s) => s,
            None => { return Err(Error::InvalidInputError(format!("no style named {:?}", self.name))); }
        };

        let features = read_features(&self.input)?;

        for (i, feat) in features.iter().enumerate() {
            let resolved: Value = match style {
                Style::Feature(fs) => serde_json::to_value(fs)?,
                Style::Categorized(cs) => match cs.style_for(feat) {
                    Some(fs) => serde_json::to_value(fs)?,
                    None => Value::Null,
                },
                Style::Map(ms) => {
                    let source_layer = match &self.source_layer {
                        Some(s) => s,
                        None => { return Err(Error::InvalidInputError(String::from("map styles need --source-layer"))); }
                    };
                    let mut layers = Vec::new();
                    for l in ms.layers_for_feature(source_layer, feat, self.zoom) {
                        layers.push(json!({"id": l.id, "paint": l.paint_at(self.zoom)}));
                    }
                    Value::Array(layers)
                }
            };
            println!("{} [{}]: {}", feature_label(i, feat), feat.geometry_type().unwrap_or("none"), serde_json::to_string(&resolved)?);
        }
        Ok(())
    }
}
