mod apply;
mod color;
mod default_styles;
mod document;
mod expression;
mod feature;
mod filter;
mod function;
mod properties;
mod registry;
mod sprite;

pub use crate::styles::apply::{
    apply_default_layer_style, apply_layer_style, apply_layer_style_checked, StyleTarget, StyledLayer,
};
pub use crate::styles::color::Color;
pub use crate::styles::default_styles::DEFAULT_STYLES;
pub use crate::styles::document::{
    LayerType, MapStyle, Properties, Source, SourceType, StyleLayer, TileScheme, STYLE_VERSION,
};
pub use crate::styles::feature::{CategorizedStyle, FeatureStyle, Fill, Image, Stroke};
pub use crate::styles::filter::{CompareOp, Filter};
pub use crate::styles::function::{FunctionType, PropertyValue, ZoomFunction};
pub use crate::styles::properties::{value_key, FeatureLike};
pub use crate::styles::registry::{default_registry, Style, StyleRegistry};
pub use crate::styles::sprite::{png_dimensions, SpriteAtlas, SpriteEntry, SpriteSource};
