//! Draws the icon at a requested pixel size.

use crate::{geometry, palette};
use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::{FillRule, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Render the icon at `size x size` pixels.
///
/// Fills the canvas with the background color, strokes the trail polyline
/// with round joins, then draws the gems in declaration order on top.
/// Pure given `size`: two calls with the same size produce identical pixels.
pub fn render(size: u32) -> Result<RgbaImage> {
    let scale = geometry::scale_factor(size);

    let mut pixmap =
        Pixmap::new(size, size).with_context(|| format!("can't allocate a {size}x{size} canvas"))?;
    pixmap.fill(palette::parse(palette::BACKGROUND)?);

    let mut paint = Paint::default();
    paint.anti_alias = true;

    // Trail first, so the gems sit on top of it.
    let trail = {
        let mut pb = PathBuilder::new();
        let (x, y) = geometry::TRAIL_POINTS[0];
        pb.move_to(x * scale, y * scale);
        for &(x, y) in &geometry::TRAIL_POINTS[1..] {
            pb.line_to(x * scale, y * scale);
        }
        pb.finish().context("trail path is degenerate")?
    };

    let stroke = Stroke {
        width: geometry::stroke_width(scale) as f32,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    paint.set_color(palette::parse(palette::TRAIL)?);
    pixmap.stroke_path(&trail, &paint, &stroke, Transform::identity(), None);

    let radius = geometry::gem_radius(scale) as f32;
    for gem in &geometry::GEMS {
        let circle = PathBuilder::from_circle(gem.x * scale, gem.y * scale, radius)
            .context("gem circle is degenerate")?;
        paint.set_color(palette::parse(gem.color)?);
        pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
    }

    // The background is opaque and everything is drawn fully opaque on top,
    // so the premultiplied buffer is already plain RGBA.
    RgbaImage::from_raw(size, size, pixmap.take())
        .context("pixel buffer does not match the requested dimensions")
}
