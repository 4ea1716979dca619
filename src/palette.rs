//! The five named colors shared by the trail and the gems.
//!
//! Colors are declared as CSS hex literals to stay diffable against the
//! vector artwork they were lifted from.

use anyhow::{anyhow, Result};
use std::str::FromStr;
use tiny_skia::Color;

pub const BACKGROUND: &str = "#F5F7FB";
pub const PRIMARY_GREEN: &str = "#2D7A3E";
pub const ACCENT_ORANGE: &str = "#FF6B35";
pub const WARM_YELLOW: &str = "#F7B801";
pub const TRAIL: &str = PRIMARY_GREEN;

/// Parse a CSS hex literal into an opaque drawing color.
pub fn parse(hex: &str) -> Result<Color> {
    let srgb =
        css_color::Srgb::from_str(hex).map_err(|_| anyhow!("invalid color literal: {hex}"))?;

    Ok(Color::from_rgba8(
        (srgb.red * 255.) as u8,
        (srgb.green * 255.) as u8,
        (srgb.blue * 255.) as u8,
        255,
    ))
}
