use clap::Args;
use layerstyles::Style;

use crate::commands::{Defaults, RunCmd};
use crate::error::Result;


#[derive(Args, Debug)]
pub struct List {
    ///only list styles of this kind (map, categorized or feature)
    #[arg(short, long)]
    kind: Option<String>,
}

fn describe(style: &Style) -> String {
    match style {
        Style::Map(m) => format!("{} sources, {} layers", m.sources.len(), m.layers.len()),
        Style::Categorized(c) => format!("by {:?}, {} classes", c.property, c.classes.len()),
        Style::Feature(_) => String::new(),
    }
}

impl RunCmd for List {
    fn run(&self, defaults: &Defaults) -> Result<()> {
        let names = defaults.registry.names();
        let longest = names.iter().map(|n| n.len()).max().unwrap_or(0);

        for (name, style) in defaults.registry.iter() {
            if let Some(k) = &self.kind {
                if k != style.kind() {
                    continue;
                }
            }
            println!("{}{}  {:<11} {}", name, " ".repeat(longest - name.len()), style.kind(), describe(style));
        }
        Ok(())
    }
}
