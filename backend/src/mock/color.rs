//! Color mock values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rng::{RngError, Seed, Stream};

/// Options shared by the color generators
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub seed: Option<Seed>,
}

/// Options for a palette of independently seeded colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub seed: Option<Seed>,
    /// Number of colors
    pub size: usize,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self { seed: None, size: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb`, lowercase
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

pub fn rgb_in(rng: &mut Stream) -> Result<Rgb, RngError> {
    Ok(Rgb {
        r: rng.int(0, 255)? as u8,
        g: rng.int(0, 255)? as u8,
        b: rng.int(0, 255)? as u8,
    })
}

pub fn hex_color_in(rng: &mut Stream) -> Result<String, RngError> {
    rgb_in(rng).map(|rgb| rgb.to_hex())
}

pub fn hsl_in(rng: &mut Stream) -> Result<Hsl, RngError> {
    Ok(Hsl {
        h: rng.int(0, 359)? as u16,
        s: rng.int(0, 100)? as u8,
        l: rng.int(0, 100)? as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        let mut rng = Stream::new(77);
        for _ in 0..50 {
            let hex = hex_color_in(&mut rng).unwrap();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_hex_matches_rgb_draw() {
        let mut a = Stream::new(77);
        let mut b = Stream::new(77);
        assert_eq!(hex_color_in(&mut a).unwrap(), rgb_in(&mut b).unwrap().to_hex());
    }

    #[test]
    fn test_hsl_bounds() {
        let mut rng = Stream::new(77);
        for _ in 0..200 {
            let hsl = hsl_in(&mut rng).unwrap();
            assert!(hsl.h < 360 && hsl.s <= 100 && hsl.l <= 100, "{}", hsl);
        }
    }
}
