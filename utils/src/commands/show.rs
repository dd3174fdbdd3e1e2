use clap::Args;
use layerstyles::styles::{apply_layer_style_checked, StyledLayer};

use crate::commands::{Defaults, RunCmd};
use crate::error::Result;


#[derive(Args, Debug)]
pub struct Show {
    ///style name, as given by list
    name: String,

    ///single line output
    #[arg(short, long)]
    compact: bool,
}

impl RunCmd for Show {
    fn run(&self, defaults: &Defaults) -> Result<()> {
        let mut layer = StyledLayer::new(&self.name);
        apply_layer_style_checked(&defaults.registry, &mut layer, &self.name)?;

        let text = if self.compact {
            serde_json::to_string(&layer.style)?
        } else {
            serde_json::to_string_pretty(&layer.style)?
        };
        println!("{}", text);
        Ok(())
    }
}
