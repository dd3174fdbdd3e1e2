use clap::{Parser, Subcommand, ValueHint};

use crate::commands::{Check, Defaults, List, Palette, Resolve, RunCmd, Show};
use crate::error::Result;


#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    ///extra style catalogue (json object of name to style), merged over the built in styles
    #[arg(long, global = true, value_hint=ValueHint::FilePath)]
    pub styles: Vec<String>,

    ///print lookup and loading details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// lists the named styles
    List(List),
    /// prints one style as json
    Show(Show),
    /// validates every style
    Check(Check),
    /// finds the style each feature of a geojson file would be drawn with
    Resolve(Resolve),
    /// builds a categorized style from a csv palette
    Palette(Palette),
}

impl RunCmd for Cli {
    fn run(&self, defaults: &Defaults) -> Result<()> {

        let defaults = defaults.with_style_files(&self.styles)?;

        match &self.command {
            Commands::List(list) => list.run(&defaults),
            Commands::Show(show) => show.run(&defaults),
            Commands::Check(check) => check.run(&defaults),
            Commands::Resolve(resolve) => resolve.run(&defaults),
            Commands::Palette(palette) => palette.run(&defaults),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_global_styles() {
        let cli = Cli::try_parse_from(["layerstyles-utils", "show", "USDM", "--styles", "a.json", "--styles", "b.json", "-v"]).unwrap();
        assert_eq!(cli.styles, vec!["a.json", "b.json"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_show_unknown_style_fails() {
        let defaults = Defaults::new().unwrap();
        let cli = Cli::try_parse_from(["layerstyles-utils", "show", "No Such Style"]).unwrap();
        assert!(cli.run(&defaults).is_err());
    }

    #[test]
    fn test_check_default_styles() {
        let defaults = Defaults::new().unwrap();
        let cli = Cli::try_parse_from(["layerstyles-utils", "check"]).unwrap();
        assert!(cli.run(&defaults).is_ok());
    }
}
