pub mod logging;
pub mod defaultlogger;
pub mod utils;
pub mod styles;

pub use crate::styles::{apply_default_layer_style, apply_layer_style, Style, StyleRegistry, StyleTarget};
