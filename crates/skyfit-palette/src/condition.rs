//! Raw weather condition labels and the flat color lookups keyed on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, Tint};

/// A raw weather condition label as reported by the weather API.
///
/// Unrecognized wire values deserialize to [`Condition::Unknown`] rather than
/// failing; every lookup in this crate treats unknown the same as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Squall,
    Snow,
    Fog,
    Haze,
    Mist,
    Sand,
    Dust,
    Smoke,
    Ash,
    Tornado,
    Unknown,
}

impl Condition {
    /// The canonical label, matching the API's spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Squall => "Squall",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
            Self::Haze => "Haze",
            Self::Mist => "Mist",
            Self::Sand => "Sand",
            Self::Dust => "Dust",
            Self::Smoke => "Smoke",
            Self::Ash => "Ash",
            Self::Tornado => "Tornado",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl Condition {
    /// Total: case-sensitive match on the canonical labels, anything else is
    /// [`Condition::Unknown`].
    fn from_label(s: &str) -> Self {
        match s {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Squall" => Self::Squall,
            "Snow" => Self::Snow,
            "Fog" => Self::Fog,
            "Haze" => Self::Haze,
            "Mist" => Self::Mist,
            "Sand" => Self::Sand,
            "Dust" => Self::Dust,
            "Smoke" => Self::Smoke,
            "Ash" => Self::Ash,
            "Tornado" => Self::Tornado,
            _ => Self::Unknown,
        }
    }
}

impl FromStr for Condition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Flat background color shown behind the gradient while it loads, keyed by
/// raw condition. This table groups conditions differently from the gradient
/// table and from [`overlay_tint`]; the asymmetry is visual tuning, not an
/// oversight.
pub fn fallback_color(condition: Option<Condition>) -> Rgb {
    use Condition::*;
    match condition {
        Some(Clear) => Rgb::from_u32(0x86c8f3),
        Some(Clouds) => Rgb::from_u32(0xb7cbe3),
        Some(Rain) | Some(Drizzle) => Rgb::from_u32(0x86acd0),
        Some(Thunderstorm) => Rgb::from_u32(0x22364f),
        Some(Snow) => Rgb::from_u32(0xd3edff),
        Some(Mist) | Some(Fog) | Some(Haze) => Rgb::from_u32(0xcbd7e6),
        Some(Dust) | Some(Sand) | Some(Ash) | Some(Smoke) => Rgb::from_u32(0xdeb887),
        Some(Tornado) | Some(Squall) => Rgb::from_u32(0x182233),
        _ => Rgb::from_u32(0x86c8f3),
    }
}

/// Translucent tint layered over the gradient to suggest weather texture.
/// Conditions without an entry (including Tornado and Squall) fall through to
/// fully transparent.
pub fn overlay_tint(condition: Option<Condition>) -> Tint {
    use Condition::*;
    match condition {
        Some(Clouds) => Tint::new(232, 238, 246, 0.08),
        Some(Rain) | Some(Drizzle) => Tint::new(70, 96, 126, 0.12),
        Some(Thunderstorm) => Tint::new(24, 34, 52, 0.24),
        Some(Snow) => Tint::new(246, 251, 255, 0.12),
        Some(Fog) | Some(Mist) | Some(Haze) => Tint::new(232, 238, 244, 0.12),
        Some(Dust) | Some(Sand) | Some(Ash) | Some(Smoke) => Tint::new(224, 186, 140, 0.12),
        _ => Tint::TRANSPARENT,
    }
}
