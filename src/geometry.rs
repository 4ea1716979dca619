//! Base geometry for the icon, declared in a 32x32-unit coordinate space
//! matching the vector artwork's viewBox. Every target size is a uniform
//! scale of these constants.

use crate::palette;

/// Side length of the coordinate space the points below are declared in.
pub const BASE_SIZE: u32 = 32;

/// A filled circular marker overlaid on the trail.
pub struct Gem {
    pub x: f32,
    pub y: f32,
    pub color: &'static str,
}

/// The four gems, in draw order. Later gems occlude earlier ones.
pub const GEMS: [Gem; 4] = [
    Gem {
        x: 5.0,
        y: 23.0,
        color: palette::PRIMARY_GREEN,
    },
    Gem {
        x: 13.0,
        y: 15.0,
        color: palette::ACCENT_ORANGE,
    },
    Gem {
        x: 21.0,
        y: 21.0,
        color: palette::WARM_YELLOW,
    },
    Gem {
        x: 27.0,
        y: 11.0,
        color: palette::PRIMARY_GREEN,
    },
];

/// Polyline approximation of the trail, following the SVG control points.
pub const TRAIL_POINTS: [(f32, f32); 7] = [
    (5.0, 23.0),
    (9.0, 19.0),
    (13.0, 15.0),
    (17.0, 18.0),
    (21.0, 21.0),
    (24.0, 16.0),
    (27.0, 11.0),
];

/// Uniform scale from base coordinates to a target pixel size.
pub fn scale_factor(size: u32) -> f32 {
    size as f32 / BASE_SIZE as f32
}

/// Trail stroke width at the given scale, floored at 2 so the line stays
/// visible at small sizes.
pub fn stroke_width(scale: f32) -> u32 {
    ((1.5 * scale).round() as u32).max(2)
}

/// Gem radius at the given scale, floored at 4 so the markers stay visible
/// at small sizes.
pub fn gem_radius(scale: f32) -> u32 {
    ((3.0 * scale).round() as u32).max(4)
}
