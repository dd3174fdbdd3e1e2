use crate::styles::color::Color;
use crate::styles::properties::{value_key, FeatureLike};
use crate::utils::{Error, Result};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Stroke {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

const DEFAULT_STROKE_WIDTH: f64 = 1.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Fill {
    pub color: String,
}

impl Stroke {
    pub fn new(color: &str, width: f64) -> Stroke {
        Stroke { color: String::from(color), width: Some(width) }
    }

    /// Width to draw with; 1 when none is given.
    pub fn line_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }
    pub fn rgba(&self) -> Result<Color> {
        Color::parse(&self.color)
    }
}

impl Fill {
    pub fn new(color: &str) -> Fill {
        Fill { color: String::from(color) }
    }
    pub fn rgba(&self) -> Result<Color> {
        Color::parse(&self.color)
    }
}

/// Point symbol drawn for a feature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Image {
    Circle {
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Fill>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    RegularShape {
        points: u32,
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        angle: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Fill>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
}

impl Image {
    pub fn radius(&self) -> f64 {
        match self {
            Image::Circle { radius, .. } => *radius,
            Image::RegularShape { radius, .. } => *radius,
        }
    }

    fn parts(&self) -> (Option<&Fill>, Option<&Stroke>) {
        match self {
            Image::Circle { fill, stroke, .. } => (fill.as_ref(), stroke.as_ref()),
            Image::RegularShape { fill, stroke, .. } => (fill.as_ref(), stroke.as_ref()),
        }
    }
}

/// Style for a single vector feature: outline, area fill and point symbol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct FeatureStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

fn check_width(w: f64, what: &str) -> Result<()> {
    if !(w >= 0.0) {
        return Err(Error::InvalidLayer(format!("{} width {} is negative", what, w)));
    }
    Ok(())
}

impl FeatureStyle {
    pub fn validate(&self) -> Result<()> {
        if let Some(s) = &self.stroke {
            s.rgba()?;
            check_width(s.line_width(), "stroke")?;
        }
        if let Some(f) = &self.fill {
            f.rgba()?;
        }
        if let Some(im) = &self.image {
            if !(im.radius() > 0.0) {
                return Err(Error::InvalidLayer(format!("image radius {} must be positive", im.radius())));
            }
            if let Image::RegularShape { points, .. } = im {
                if *points < 3 {
                    return Err(Error::InvalidLayer(format!("regular shape needs 3 or more points, not {}", points)));
                }
            }
            let (fill, stroke) = im.parts();
            if let Some(f) = fill {
                f.rgba()?;
            }
            if let Some(s) = stroke {
                s.rgba()?;
                check_width(s.line_width(), "image stroke")?;
            }
        }
        Ok(())
    }

    /// True when nothing drawn by this style would be visible.
    pub fn is_hidden(&self) -> bool {
        let invisible_fill = |f: Option<&Fill>| f.map_or(true, |f| f.rgba().map_or(false, |c| c.is_transparent()));
        let invisible_stroke = |s: Option<&Stroke>| {
            s.map_or(true, |s| s.line_width() == 0.0 || s.rgba().map_or(false, |c| c.is_transparent()))
        };
        let image_hidden = match &self.image {
            None => true,
            Some(im) => {
                let (f, s) = im.parts();
                invisible_fill(f) && invisible_stroke(s)
            }
        };
        invisible_fill(self.fill.as_ref()) && invisible_stroke(self.stroke.as_ref()) && image_hidden
    }
}

/// Picks a [`FeatureStyle`] from the value of one feature attribute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategorizedStyle {
    pub property: String,
    pub classes: BTreeMap<String, FeatureStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FeatureStyle>,
}

fn optional_cell<'a>(rec: &'a csv::StringRecord, idx: usize) -> Option<&'a str> {
    match rec.get(idx) {
        Some(s) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

fn number_cell<T: std::str::FromStr>(rec: &csv::StringRecord, idx: usize, name: &str, line: usize) -> Result<Option<T>> {
    match optional_cell(rec, idx) {
        None => Ok(None),
        Some(s) => match s.parse() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(Error::InvalidLayer(format!("palette at line {} {} {:?} not a number", line, name, s))),
        },
    }
}

const PALETTE_COLUMNS: usize = 7;

impl CategorizedStyle {
    pub fn new(property: &str) -> CategorizedStyle {
        CategorizedStyle {
            property: String::from(property),
            classes: BTreeMap::new(),
            default: None,
        }
    }

    pub fn style_for<F: FeatureLike + ?Sized>(&self, feature: &F) -> Option<&FeatureStyle> {
        let key = feature.property(&self.property).and_then(value_key);
        match key.as_ref().and_then(|k| self.classes.get(k)) {
            Some(s) => Some(s),
            None => self.default.as_ref(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.property.is_empty() {
            return Err(Error::InvalidLayer(String::from("categorized style without a property")));
        }
        for (k, s) in &self.classes {
            s.validate().map_err(|e| Error::InvalidLayer(format!("class {:?}: {}", k, e)))?;
        }
        if let Some(d) = &self.default {
            d.validate()?;
        }
        Ok(())
    }

    /// Reads a palette with header
    /// `value,fill_color,stroke_color,stroke_width,radius,points,angle`.
    /// Rows with a radius become point symbols.
    pub fn from_csv_reader<R: Read>(property: &str, reader: R) -> Result<CategorizedStyle> {
        let mut res = CategorizedStyle::new(property);

        for (line, row) in csv::Reader::from_reader(reader).records().enumerate() {
            let rec = row?;
            if rec.len() != PALETTE_COLUMNS {
                return Err(Error::InvalidLayer(format!(
                    "palette at line {} has {} columns, expected {}",
                    line,
                    rec.len(),
                    PALETTE_COLUMNS
                )));
            }
            let value = match optional_cell(&rec, 0) {
                Some(v) => String::from(v),
                None => {
                    return Err(Error::InvalidLayer(format!("palette at line {} has no value", line)));
                }
            };
            let fill = optional_cell(&rec, 1).map(Fill::new);
            let stroke_width: Option<f64> = number_cell(&rec, 3, "stroke_width", line)?;
            let stroke = optional_cell(&rec, 2).map(|c| Stroke { color: String::from(c), width: stroke_width });
            let radius: Option<f64> = number_cell(&rec, 4, "radius", line)?;
            let points: Option<u32> = number_cell(&rec, 5, "points", line)?;
            let angle: Option<f64> = number_cell(&rec, 6, "angle", line)?;

            let style = match radius {
                None => FeatureStyle { stroke, fill, image: None },
                Some(radius) => {
                    let image = match points {
                        None => Image::Circle { radius, fill, stroke },
                        Some(points) => Image::RegularShape {
                            points,
                            radius,
                            angle,
                            fill,
                            stroke,
                        },
                    };
                    FeatureStyle { stroke: None, fill: None, image: Some(image) }
                }
            };
            style.validate()?;
            res.classes.insert(value, style);
        }
        Ok(res)
    }
}
