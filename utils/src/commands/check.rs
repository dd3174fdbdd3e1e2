use clap::{Args, ValueHint};
use console::style;
use layerstyles::StyleRegistry;

use crate::commands::{Defaults, RunCmd};
use crate::error::{Error, Result};


#[derive(Args, Debug)]
pub struct Check {
    ///check only this catalogue, not the built in styles
    #[arg(short, long, value_hint=ValueHint::FilePath)]
    file: Option<String>,
}

impl RunCmd for Check {
    fn run(&self, defaults: &Defaults) -> Result<()> {
        let loaded;
        let registry = match &self.file {
            Some(f) => {
                loaded = StyleRegistry::from_file(f)?;
                &loaded
            }
            None => &defaults.registry,
        };

        let problems = registry.check();
        for (name, err) in &problems {
            println!("{} {}: {}", style("FAIL").red().bold(), name, err);
        }

        if problems.is_empty() {
            println!("{} {} styles", style("OK").green().bold(), registry.len());
            Ok(())
        } else {
            Err(Error::InvalidInputError(format!("{} of {} styles invalid", problems.len(), registry.len())))
        }
    }
}
