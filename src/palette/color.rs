//! sRGB colour with HSB construction.

use serde::{Deserialize, Serialize};

/// An sRGB colour triple.
///
/// Plain data, so palettes can be stored in GUI configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert a hue/saturation/brightness triple to sRGB.
    ///
    /// `hue` wraps by its fractional part (1.25 behaves like 0.25);
    /// `saturation` and `brightness` are clamped to `[0, 1]`. Channels scale
    /// to bytes with round-half-up.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let brightness = brightness.clamp(0.0, 1.0);
        if saturation == 0.0 {
            let level = scale(brightness);
            return Self::from_rgb(level, level, level);
        }
        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::from_rgb(scale(r), scale(g), scale(b))
    }

    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS hex form, `#rrggbb`, as used in style strings.
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn scale(channel: f32) -> u8 {
    (channel * 255.0 + 0.5) as u8
}
