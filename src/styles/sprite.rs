use crate::utils::{Error, Result};

use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,

    #[serde(rename = "pixelRatio")]
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdf: Option<bool>,
}

fn default_pixel_ratio() -> f64 {
    1.0
}

/// Icon sheet carried inline: a base64 png plus the position of each icon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpriteAtlas {
    pub image: String,
    pub index: BTreeMap<String, SpriteEntry>,
}

fn read_u32(data: &[u8], pos: usize) -> u32 {
    ((data[pos] as u32) << 24) | ((data[pos + 1] as u32) << 16) | ((data[pos + 2] as u32) << 8) | (data[pos + 3] as u32)
}

/// Width and height from the IHDR chunk, which must come first.
pub fn png_dimensions(data: &[u8]) -> Result<(u32, u32)> {
    if data.len() < 24 || data[0..8] != PNG_SIGNATURE {
        return Err(Error::InvalidSprite(String::from("not a png image")));
    }
    if &data[12..16] != b"IHDR" {
        return Err(Error::InvalidSprite(String::from("png missing IHDR chunk")));
    }
    Ok((read_u32(data, 16), read_u32(data, 20)))
}

impl SpriteAtlas {
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        let encoded = match self.image.strip_prefix(DATA_URL_PREFIX) {
            Some(e) => e,
            None => {
                if self.image.starts_with("data:") {
                    return Err(Error::InvalidSprite(format!(
                        "unsupported data url {:?}",
                        self.image.split(',').next().unwrap_or("")
                    )));
                }
                &self.image
            }
        };
        Ok(base64::engine::general_purpose::STANDARD.decode(encoded.trim())?)
    }

    pub fn dimensions(&self) -> Result<(u32, u32)> {
        png_dimensions(&self.image_bytes()?)
    }

    pub fn icon(&self, name: &str) -> Option<&SpriteEntry> {
        self.index.get(name)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.dimensions()?;
        for (name, e) in &self.index {
            if e.width == 0 || e.height == 0 {
                return Err(Error::InvalidSprite(format!("icon {} is empty", name)));
            }
            let right = e.x.checked_add(e.width);
            let bottom = e.y.checked_add(e.height);
            if right.map_or(true, |r| r > width) || bottom.map_or(true, |b| b > height) {
                return Err(Error::InvalidSprite(format!(
                    "icon {} [{}, {}, {}x{}] outside {}x{} image",
                    name, e.x, e.y, e.width, e.height, width, height
                )));
            }
            if e.pixel_ratio <= 0.0 {
                return Err(Error::InvalidSprite(format!("icon {} has pixelRatio {}", name, e.pixel_ratio)));
            }
        }
        Ok(())
    }
}

/// `sprite` in a map style: a url to fetch, or an embedded atlas.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpriteSource {
    Url(String),
    Embedded(SpriteAtlas),
}
