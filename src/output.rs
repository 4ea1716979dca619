//! Writes the rendered icons to their fixed locations under the repository
//! root: three PNGs in the icons directory and one multi-resolution favicon
//! at the frontend's public root.

use crate::render::render;
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// PNG outputs: pixel size and filename inside the icons directory.
pub const PNG_ICONS: [(u32, &str); 3] = [
    (192, "icon-192.png"),
    (512, "icon-512.png"),
    (180, "apple-touch-icon.png"),
];

/// Favicon frame sizes, primary frame first.
pub const FAVICON_SIZES: [u32; 2] = [64, 32];

/// Icons directory, relative to the repository root.
pub const ICONS_SUBDIR: &str = "frontend/public/icons";

/// Favicon path, relative to the repository root.
pub const FAVICON_FILE: &str = "frontend/public/favicon.ico";

/// Regenerate every output under `root`, overwriting prior files.
pub fn generate(root: &Path) -> Result<()> {
    write_raster_icons(&root.join(ICONS_SUBDIR))?;
    write_favicon(&root.join(FAVICON_FILE))?;

    println!("PWA icons regenerated in {ICONS_SUBDIR}");
    Ok(())
}

/// Render and save each PNG from the size table into `icons_dir`.
pub fn write_raster_icons(icons_dir: &Path) -> Result<()> {
    create_dir_all(icons_dir).context("can't create icons directory")?;

    for (size, filename) in PNG_ICONS {
        let icon = render(size)?;
        save_png(&icon, &icons_dir.join(filename))
            .with_context(|| format!("failed to write {filename}"))?;
        println!("  ✓ Generated {filename}");
    }

    Ok(())
}

/// Render the favicon frames and write them as a single ICO container.
pub fn write_favicon(favicon_path: &Path) -> Result<()> {
    let mut frames = Vec::new();
    for size in FAVICON_SIZES {
        let icon = render(size)?;
        frames.push(IcoFrame::as_png(icon.as_raw(), size, size, ColorType::Rgba8)?);
    }

    let mut out_file =
        BufWriter::new(File::create(favicon_path).context("failed to create favicon.ico")?);
    IcoEncoder::new(&mut out_file).encode_images(&frames)?;
    out_file.flush()?;

    println!("  ✓ Generated favicon.ico");
    Ok(())
}

// Encode as PNG with maximal lossless compression.
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path).context("failed to create PNG file")?);
    let encoder =
        PngEncoder::new_with_quality(&mut file, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    file.flush()?;
    Ok(())
}
