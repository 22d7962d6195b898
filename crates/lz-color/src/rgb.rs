//! 8-bit RGB colors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Unknown color name: {0}")]
    UnknownName(String),

    #[error("Malformed color '{input}': {reason}")]
    Malformed { input: String, reason: &'static str },
}

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RgbRepr", into = "[u8; 3]")
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 200, 0);
    pub const PINK: Rgb = Rgb::new(255, 175, 175);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

    const NAMED: [(&'static str, Rgb); 13] = [
        ("black", Rgb::BLACK),
        ("blue", Rgb::BLUE),
        ("cyan", Rgb::CYAN),
        ("dark_gray", Rgb::DARK_GRAY),
        ("gray", Rgb::GRAY),
        ("green", Rgb::GREEN),
        ("light_gray", Rgb::LIGHT_GRAY),
        ("magenta", Rgb::MAGENTA),
        ("orange", Rgb::ORANGE),
        ("pink", Rgb::PINK),
        ("red", Rgb::RED),
        ("white", Rgb::WHITE),
        ("yellow", Rgb::YELLOW),
    ];

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look up a palette color by name (case-insensitive, `-` or `_`).
    pub fn named(name: &str) -> Option<Rgb> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, c)| *c)
    }

    /// Packed `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Accepts `red`, `#ff0000` or `255,0,0`.
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorError::Malformed {
                    input: s.to_string(),
                    reason: "expected six hex digits",
                });
            }
            let packed = u32::from_str_radix(hex, 16).map_err(|_| ColorError::Malformed {
                input: s.to_string(),
                reason: "invalid hex digit",
            })?;
            return Ok(Rgb::from_u32(packed));
        }

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            let [r, g, b] = parts.as_slice() else {
                return Err(ColorError::Malformed {
                    input: s.to_string(),
                    reason: "expected three components",
                });
            };
            let channel = |v: &str| {
                v.parse::<u8>().map_err(|_| ColorError::Malformed {
                    input: s.to_string(),
                    reason: "component out of range 0-255",
                })
            };
            return Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?));
        }

        Rgb::named(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Triple([u8; 3]),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<RgbRepr> for Rgb {
    type Error = ColorError;

    fn try_from(repr: RgbRepr) -> Result<Self, Self::Error> {
        match repr {
            RgbRepr::Triple(t) => Ok(t.into()),
            RgbRepr::Text(s) => s.parse(),
        }
    }
}
