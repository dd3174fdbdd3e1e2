use crate::utils::{Error, Result};

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex pattern"))
}

fn rgba_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$")
            .expect("rgba pattern")
    })
}

fn invalid(s: &str) -> Error {
    Error::InvalidColor(format!("can't parse colour {:?}", s))
}

fn channel(s: &str, whole: &str) -> Result<u8> {
    match s.parse::<u16>() {
        Ok(v) if v <= 255 => Ok(v as u8),
        _ => Err(invalid(whole)),
    }
}

fn hex_channel(s: &str, whole: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| invalid(whole))
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    pub fn transparent() -> Color {
        Color::new(0, 0, 0, 0.0)
    }

    pub fn parse(s: &str) -> Result<Color> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::transparent());
        }

        if let Some(caps) = hex_pattern().captures(s) {
            let h = &caps[1];
            if h.len() == 3 {
                let mut vals = [0u8; 3];
                for (i, c) in h.chars().enumerate() {
                    let v = hex_channel(&c.to_string(), s)?;
                    vals[i] = v * 16 + v;
                }
                return Ok(Color::new(vals[0], vals[1], vals[2], 1.0));
            }
            let r = hex_channel(&h[0..2], s)?;
            let g = hex_channel(&h[2..4], s)?;
            let b = hex_channel(&h[4..6], s)?;
            let a = if h.len() == 8 {
                (hex_channel(&h[6..8], s)? as f64) / 255.0
            } else {
                1.0
            };
            return Ok(Color::new(r, g, b, a));
        }

        if let Some(caps) = rgba_pattern().captures(s) {
            let r = channel(&caps[1], s)?;
            let g = channel(&caps[2], s)?;
            let b = channel(&caps[3], s)?;
            let a = match caps.get(4) {
                None => 1.0,
                Some(m) => match m.as_str().parse::<f64>() {
                    Ok(a) if a >= 0.0 && a <= 1.0 => a,
                    _ => return Err(invalid(s)),
                },
            };
            return Ok(Color::new(r, g, b, a));
        }

        Err(invalid(s))
    }

    /// Channel-wise linear interpolation; `t` is clamped to [0, 1].
    pub fn interpolate(&self, other: &Color, t: f64) -> Color {
        let t = t.max(0.0).min(1.0);
        let mix = |a: u8, b: u8| -> u8 { ((a as f64) + ((b as f64) - (a as f64)) * t).round() as u8 };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> Result<Color> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#1E90FF").unwrap(), Color::new(30, 144, 255, 1.0));
        assert_eq!(Color::parse("#cc7000").unwrap(), Color::new(204, 112, 0, 1.0));
        assert_eq!(Color::parse("#fff").unwrap(), Color::new(255, 255, 255, 1.0));

        let c = Color::parse("#00000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(
            Color::parse("rgba(255, 255, 255, 0)").unwrap(),
            Color::new(255, 255, 255, 0.0)
        );
        assert_eq!(
            Color::parse("rgba(255, 116, 61, 0.5)").unwrap(),
            Color::new(255, 116, 61, 0.5)
        );
        assert_eq!(Color::parse("rgb(239,239,239)").unwrap(), Color::new(239, 239, 239, 1.0));
        assert!(Color::parse("transparent").unwrap().is_transparent());
    }

    #[test]
    fn test_parse_rejects() {
        for s in &["", "#12", "#GGGGGG", "rgba(256, 0, 0, 1)", "rgba(0, 0, 0, 1.5)", "blue", "rgb(1,2)"] {
            match Color::parse(s) {
                Err(Error::InvalidColor(_)) => {}
                other => panic!("{:?} parsed as {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_interpolate() {
        let a = Color::new(0, 0, 0, 0.0);
        let b = Color::new(200, 100, 50, 1.0);
        assert_eq!(a.interpolate(&b, 0.5), Color::new(100, 50, 25, 0.5));
        assert_eq!(a.interpolate(&b, 2.0), b);
        assert_eq!(a.interpolate(&b, -1.0), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::new(1, 2, 3, 0.5).to_string(), "rgba(1, 2, 3, 0.5)");
    }
}
