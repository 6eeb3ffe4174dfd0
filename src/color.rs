use crate::error::Error;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of leading identifier characters that select the hue.
const HUE_PREFIX_LEN: usize = 4;

// Fixed saturation/lightness keep every poster color in the same readable
// band; only the hue varies.
const SATURATION: f64 = 0.70;
const LIGHTNESS: f64 = 0.50;

/// Display color for a poster, rendered as `#RRGGBB` (uppercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.b
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Map an identifier to its display color.
///
/// The first four hex characters of `identifier` are parsed as an integer
/// and rotated onto the hue circle (`value mod 360`); saturation and
/// lightness are fixed. Identifiers sharing a four-character prefix share
/// a color, so a poster's label and color stay in sync no matter which
/// suffix the token carries.
///
/// # Errors
/// Returns [`Error::NonHexPrefix`] if `identifier` is shorter than four
/// bytes or its first four characters are not hex digits.
pub fn color_for(identifier: &str) -> Result<Color, Error> {
    let hue_seed = identifier
        .get(..HUE_PREFIX_LEN)
        .filter(|prefix| prefix.chars().all(|c| c.is_ascii_hexdigit()))
        .and_then(|prefix| u32::from_str_radix(prefix, 16).ok())
        .ok_or_else(|| Error::NonHexPrefix(identifier.to_string()))?;

    let (r, g, b) = hsl_to_rgb(f64::from(hue_seed % 360) / 360.0, SATURATION, LIGHTNESS);
    Ok(Color { r, g, b })
}

/// Standard HSL→RGB conversion on normalized inputs (each in `[0, 1]`).
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        // Achromatic: hue is meaningless, every channel is the lightness.
        let v = channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        channel(hue_to_rgb(p, q, h)),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise hue helper; `t` may arrive up to one period outside `[0, 1)`.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}
