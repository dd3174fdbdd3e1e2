mod check;
mod cli;
mod list;
mod palette;
mod resolve;
mod show;


pub use check::Check;
pub use list::List;
pub use palette::Palette;
pub use resolve::Resolve;
pub use show::Show;
pub use cli::{Commands,Cli};

use layerstyles::StyleRegistry;
use crate::error::{Error, Result};


pub struct Defaults {
    pub registry: StyleRegistry
}

impl Defaults {
    pub fn new() -> Result<Defaults> {
        Ok(Defaults{registry: StyleRegistry::default_styles()?})
    }

    /// Defaults with the styles from each file merged over the built in ones.
    pub fn with_style_files(&self, files: &[String]) -> Result<Defaults> {
        let mut registry = self.registry.clone();
        for f in files {
            registry.merge(StyleRegistry::from_file(f)?);
        }
        Ok(Defaults{registry})
    }
}

pub trait RunCmd {
    fn run(&self, defaults: &Defaults) -> Result<()>;
}


pub fn read_features(infn: &str) -> Result<Vec<geojson::Feature>> {
    let text = std::fs::read_to_string(infn)?;
    match text.parse::<geojson::GeoJson>()? {
        geojson::GeoJson::FeatureCollection(fc) => Ok(fc.features),
        geojson::GeoJson::Feature(f) => Ok(vec![f]),
        geojson::GeoJson::Geometry(_) => Err(Error::InvalidInputError(format!("{} holds a bare geometry, not features", infn))),
    }
}
