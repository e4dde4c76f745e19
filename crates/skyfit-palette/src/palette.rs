//! Sky gradient assembly: condition grouping, day segmentation, and the
//! 8 x 4 base stop table the gradients are derived from.

use serde::Serialize;

use crate::color::{Rgb, Rgba};
use crate::condition::Condition;

/// Interpolation ratio for the two derived stops. Biases `upper` and `lower`
/// slightly toward the mid stop, which smooths the five-band gradient.
const MID_BIAS: f64 = 0.45;

/// Coarse weather bucket driving gradient selection. Many raw conditions map
/// onto one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteGroup {
    Clear,
    Clouds,
    Rain,
    Storm,
    Snow,
    Fog,
    Dust,
    Extreme,
}

impl PaletteGroup {
    pub const ALL: [PaletteGroup; 8] = [
        Self::Clear,
        Self::Clouds,
        Self::Rain,
        Self::Storm,
        Self::Snow,
        Self::Fog,
        Self::Dust,
        Self::Extreme,
    ];

    /// Bucket a raw condition. Absent, unrecognized, and `Clear` all land in
    /// the clear group.
    pub fn for_condition(condition: Option<Condition>) -> Self {
        match condition {
            Some(Condition::Clouds) => Self::Clouds,
            Some(Condition::Rain) | Some(Condition::Drizzle) => Self::Rain,
            Some(Condition::Thunderstorm) => Self::Storm,
            Some(Condition::Snow) => Self::Snow,
            Some(Condition::Fog) | Some(Condition::Mist) | Some(Condition::Haze) => Self::Fog,
            Some(Condition::Dust)
            | Some(Condition::Sand)
            | Some(Condition::Ash)
            | Some(Condition::Smoke) => Self::Dust,
            Some(Condition::Tornado) | Some(Condition::Squall) => Self::Extreme,
            _ => Self::Clear,
        }
    }
}

/// Time-of-day bucket driving gradient selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySegment {
    Night,
    Dawn,
    Day,
    Dusk,
}

impl DaySegment {
    pub const ALL: [DaySegment; 4] = [Self::Night, Self::Dawn, Self::Day, Self::Dusk];

    /// Resolve a local hour-of-day to a segment. Bands are left-inclusive;
    /// anything outside [0, 23] falls through to night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Self::Night,
            6..=9 => Self::Dawn,
            10..=16 => Self::Day,
            17..=19 => Self::Dusk,
            _ => Self::Night,
        }
    }
}

/// The four authored stops for one (group, segment) cell of the base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStops {
    pub top: Rgb,
    pub mid: Rgb,
    pub bottom: Rgb,
    pub glow: Rgba,
}

/// A full six-stop sky gradient: the base stops plus two derived bands.
/// Transient; recomputed on every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyPalette {
    pub top: Rgb,
    pub upper: Rgb,
    pub mid: Rgb,
    pub lower: Rgb,
    pub bottom: Rgb,
    pub glow: Rgba,
}

const fn stops(top: u32, mid: u32, bottom: u32, glow: u32) -> BaseStops {
    BaseStops {
        top: Rgb::from_u32(top),
        mid: Rgb::from_u32(mid),
        bottom: Rgb::from_u32(bottom),
        glow: Rgba::from_u32(glow),
    }
}

/// Authored base palettes, indexed `[PaletteGroup][DaySegment]` in the
/// declaration order of the enums. Every cell is populated; the table is
/// never mutated after process start.
static BASE_STOPS: [[BaseStops; 4]; 8] = [
    // clear: night, dawn, day, dusk
    [
        stops(0x1f3354, 0x2b4d73, 0x3d6a8f, 0x9cc9eb66),
        stops(0xffd9a6, 0xcde6ff, 0x8fc7ff, 0xffeaa077),
        stops(0x7fc7ff, 0x52aef2, 0x2f8edc, 0xffe48f66),
        stops(0xffcfa0, 0xc2ddff, 0x7fb2f0, 0xffd69a66),
    ],
    // clouds
    [
        stops(0x2a384b, 0x354a5f, 0x446179, 0xb9c6d866),
        stops(0xd7d7d2, 0xc5ccd8, 0xa9bfd6, 0xe7ebf277),
        stops(0xc2d4e4, 0xaabfd6, 0x8ea9c6, 0xe3e9f266),
        stops(0xd3c9bf, 0xbcc1c8, 0x9fb2cc, 0xe1d9d166),
    ],
    // rain
    [
        stops(0x2a3e56, 0x3a5270, 0x4b6c86, 0x9abbd366),
        stops(0xc6d3e0, 0xb2c6da, 0x9bb5cd, 0xd7e2ee66),
        stops(0xb9d2e6, 0xa4c2dc, 0x8db2d1, 0xd2dfee66),
        stops(0xbac7d6, 0xa7b8cd, 0x94a9c4, 0xd2dbe866),
    ],
    // storm
    [
        stops(0x263349, 0x32445b, 0x3e5770, 0x7e96af66),
        stops(0x4a5a6e, 0x405365, 0x354654, 0x8a9cb166),
        stops(0x3e5268, 0x34485e, 0x2c3e52, 0x8496ab55),
        stops(0x41556a, 0x374a5f, 0x2f4256, 0x879bb166),
    ],
    // snow
    [
        stops(0x273a52, 0x344a66, 0x44607c, 0xd1e0f077),
        stops(0xe2ebf6, 0xcddbed, 0xb3c8e0, 0xefe2a4aa),
        stops(0xd9e9f6, 0xc1d6eb, 0xa7c1dc, 0xefdc98aa),
        stops(0xe3deef, 0xcfcbe6, 0xb4c0dd, 0xe5d09c88),
    ],
    // fog
    [
        stops(0x354356, 0x43546a, 0x556c84, 0xd9e5f166),
        stops(0xeef2f6, 0xe0e7f0, 0xcbd7e5, 0xf6f7f977),
        stops(0xe5edf6, 0xd7e1ef, 0xc2d2e4, 0xf1f4f866),
        stops(0xe0d7d0, 0xd1c8c9, 0xbcc8dc, 0xede3df66),
    ],
    // dust
    [
        stops(0x3f342d, 0x51443b, 0x67584c, 0xf0d29a66),
        stops(0xf8e5cc, 0xedd2af, 0xd9b089, 0xf8e7c277),
        stops(0xf3ddb5, 0xe6c79a, 0xd0aa82, 0xf4dfb266),
        stops(0xedd1b1, 0xdcb894, 0xc59a76, 0xf2d2a666),
    ],
    // extreme
    [
        stops(0x1c2738, 0x253445, 0x2f4053, 0x6f839a55),
        stops(0x293545, 0x232f3f, 0x1c2733, 0x6a7c9255),
        stops(0x24303f, 0x1f2a39, 0x182331, 0x65778d55),
        stops(0x263242, 0x202b3b, 0x182231, 0x6b7f9655),
    ],
];

/// The authored stops for one table cell.
pub fn base_stops(group: PaletteGroup, segment: DaySegment) -> BaseStops {
    BASE_STOPS[group as usize][segment as usize]
}

/// Build the six-stop gradient for a local hour and an optional raw
/// condition. Pure lookup plus two interpolations; never fails.
pub fn sky_palette(hour: u32, condition: Option<Condition>) -> SkyPalette {
    let group = PaletteGroup::for_condition(condition);
    let segment = DaySegment::from_hour(hour);
    let base = base_stops(group, segment);
    SkyPalette {
        top: base.top,
        upper: base.top.mix(base.mid, MID_BIAS),
        mid: base.mid,
        lower: base.mid.mix(base.bottom, MID_BIAS),
        bottom: base.bottom,
        glow: base.glow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_group_for_condition() {
        assert_eq!(
            PaletteGroup::for_condition(Some(Condition::Drizzle)),
            PaletteGroup::Rain
        );
        assert_eq!(
            PaletteGroup::for_condition(Some(Condition::Haze)),
            PaletteGroup::Fog
        );
        assert_eq!(
            PaletteGroup::for_condition(Some(Condition::Squall)),
            PaletteGroup::Extreme
        );
        assert_eq!(PaletteGroup::for_condition(None), PaletteGroup::Clear);
        assert_eq!(
            PaletteGroup::for_condition(Some(Condition::Clear)),
            PaletteGroup::Clear
        );
        assert_eq!(
            PaletteGroup::for_condition(Some(Condition::Unknown)),
            PaletteGroup::Clear
        );
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(DaySegment::from_hour(0), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(5), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(6), DaySegment::Dawn);
        assert_eq!(DaySegment::from_hour(9), DaySegment::Dawn);
        assert_eq!(DaySegment::from_hour(10), DaySegment::Day);
        assert_eq!(DaySegment::from_hour(16), DaySegment::Day);
        assert_eq!(DaySegment::from_hour(17), DaySegment::Dusk);
        assert_eq!(DaySegment::from_hour(19), DaySegment::Dusk);
        assert_eq!(DaySegment::from_hour(20), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(23), DaySegment::Night);
    }

    #[test]
    fn test_out_of_range_hour_is_night() {
        assert_eq!(DaySegment::from_hour(24), DaySegment::Night);
        assert_eq!(DaySegment::from_hour(u32::MAX), DaySegment::Night);
    }

    #[test]
    fn test_every_table_cell_is_populated() {
        // 8 groups x 4 segments, all present and internally distinct enough
        // to be a real gradient (top != bottom).
        for group in PaletteGroup::ALL {
            for segment in DaySegment::ALL {
                let base = base_stops(group, segment);
                assert_ne!(base.top, base.bottom, "{group:?}/{segment:?}");
            }
        }
    }

    #[test]
    fn test_palette_has_six_stops_for_all_inputs() {
        for hour in 0..24 {
            for condition in [
                None,
                Some(Condition::Clear),
                Some(Condition::Thunderstorm),
                Some(Condition::Ash),
            ] {
                let p = sky_palette(hour, condition);
                // Derived stops sit between their neighbors, so a gradient
                // always has distinct ends.
                assert_ne!(p.top, p.bottom);
            }
        }
    }

    #[test]
    fn test_storm_day_palette_end_to_end() {
        let p = sky_palette(14, Some(Condition::Thunderstorm));
        assert_eq!(p.top, Rgb::from_u32(0x3e5268));
        assert_eq!(p.mid, Rgb::from_u32(0x34485e));
        assert_eq!(p.bottom, Rgb::from_u32(0x2c3e52));
        assert_eq!(p.glow.to_string(), "#8496ab55");
        assert_eq!(p.upper, Rgb::from_u32(0x3e5268).mix(Rgb::from_u32(0x34485e), 0.45));
        assert_eq!(p.lower, Rgb::from_u32(0x34485e).mix(Rgb::from_u32(0x2c3e52), 0.45));
    }

    #[test]
    fn test_derived_stops_bias_toward_mid() {
        let p = sky_palette(12, Some(Condition::Clear));
        let base = base_stops(PaletteGroup::Clear, DaySegment::Day);
        assert_eq!(p.upper, base.top.mix(base.mid, 0.45));
        assert_eq!(p.lower, base.mid.mix(base.bottom, 0.45));
    }
}
