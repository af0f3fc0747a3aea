//! Color value types
//!
//! Colors are plain immutable values: an opaque [`Rgb`] triple or an [`Rgba`]
//! quadruple with an 8-bit alpha. Palettes in theme files spell colors as
//! `#RRGGBB` strings, so [`Rgb`] parses from and serializes to that form.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Attach an alpha channel.
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const fn to_rgba(self) -> Rgba {
        self.with_alpha(255)
    }

    /// Per-channel linear interpolation. Exact at both endpoints:
    /// `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
        }
    }
}

/// An RGBA color with 8-bit channels (alpha 0 = transparent, 255 = opaque)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

fn hex_string(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex_string(self.r, self.g, self.b))
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid hex color '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#5BC8F5"), Some(Rgb::new(0x5B, 0xC8, 0xF5)));
        assert_eq!(Rgb::from_hex("FFD700"), Some(Rgb::new(255, 215, 0)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GGHHII"), None);
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        let top = Rgb::new(0x87, 0xCE, 0xEB);
        let bottom = Rgb::new(0xC8, 0xE6, 0xF5);
        assert_eq!(top.lerp(bottom, 0.0), top);
        assert_eq!(top.lerp(bottom, 1.0), bottom);
    }

    #[test]
    fn lerp_is_monotonic_per_channel() {
        let a = Rgb::new(10, 200, 0);
        let b = Rgb::new(240, 20, 255);
        let mut prev = a;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let cur = a.lerp(b, t);
            // r and b ascend, g descends
            assert!(cur.r >= prev.r);
            assert!(cur.g <= prev.g);
            assert!(cur.b >= prev.b);
            prev = cur;
        }
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let c = Rgb::new(0xFF, 0x9D, 0xD2);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FF9DD2\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
