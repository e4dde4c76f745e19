//! Color primitives: opaque RGB, RGB with alpha, and CSS-style tints.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in color string")]
    InvalidDigit,
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Linearly interpolate toward `to`, per channel.
    ///
    /// `ratio` must be in `[0, 1]`; 0 returns `self` exactly and 1 returns
    /// `to` exactly. The single internal call site uses a fixed ratio, so
    /// out-of-range values are a caller bug and only checked in debug builds.
    pub fn mix(self, to: Rgb, ratio: f64) -> Rgb {
        debug_assert!(
            (0.0..=1.0).contains(&ratio),
            "mix ratio {ratio} outside [0, 1]"
        );
        let channel = |from: u8, to: u8| {
            (f64::from(from) + (f64::from(to) - f64::from(from)) * ratio).round() as u8
        };
        Rgb {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional). A trailing
    /// alpha pair is accepted and dropped; only the RGB digits survive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        let rgb = digits.get(..6).ok_or(ParseColorError::InvalidDigit)?;
        let packed = u32::from_str_radix(rgb, 16).map_err(|_| ParseColorError::InvalidDigit)?;
        Ok(Self::from_u32(packed))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An RGB color with an 8-bit alpha suffix, as used for gradient glows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: u8,
}

impl Rgba {
    /// Build a color from a packed `0xRRGGBBAA` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            rgb: Rgb::from_u32(value >> 8),
            alpha: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02x}", self.rgb, self.alpha)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A translucent tint in CSS `rgba(r, g, b, a)` form, layered over the sky
/// gradient to suggest weather texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Tint {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Tint = Tint::new(0, 0, 0, 0.0);
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

impl Serialize for Tint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
