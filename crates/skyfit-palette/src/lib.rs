//! Sky palette engine for skyfit
//!
//! Maps (hour-of-day, weather condition) to a six-stop sky gradient plus a
//! flat fallback color and a translucent overlay tint. Pure functions over
//! static lookup tables; safe to call from any thread.

pub mod color;
pub mod condition;
pub mod palette;

pub use color::{Rgb, Rgba, Tint};
pub use condition::{fallback_color, overlay_tint, Condition};
pub use palette::{sky_palette, BaseStops, DaySegment, PaletteGroup, SkyPalette};
