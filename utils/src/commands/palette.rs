use clap::{Args, ValueHint};

use layerstyles::{message, Style, StyleRegistry};
use layerstyles::styles::CategorizedStyle;

use crate::commands::{Defaults, RunCmd};
use crate::error::Result;


#[derive(Args, Debug)]
pub struct Palette {
    ///feature attribute the classes are keyed on
    property: String,

    ///csv with header value,fill_color,stroke_color,stroke_width,radius,points,angle
    #[arg(value_hint=ValueHint::FilePath)]
    input: String,

    ///name for the new style
    #[arg(short, long)]
    name: Option<String>,
}

impl RunCmd for Palette {
    fn run(&self, _defaults: &Defaults) -> Result<()> {
        let file = std::fs::File::open(&self.input)?;
        let cs = CategorizedStyle::from_csv_reader(&self.property, file)?;
        message!("{} classes from {}", cs.classes.len(), self.input);

        let name = self.name.clone().unwrap_or_else(|| self.property.clone());
        let mut registry = StyleRegistry::new();
        registry.insert(&name, Style::Categorized(cs));

        println!("{}", serde_json::to_string_pretty(&registry)?);
        Ok(())
    }
}
