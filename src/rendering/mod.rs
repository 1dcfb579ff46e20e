//! Layout engine: places the verse, reference, slogan and footer on a
//! background canvas and produces a PNG.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::path::Path;

use image::RgbaImage;
use log::info;
use sha2::{Digest, Sha256};

use crate::{Error, Result};
use font::FontSet;
use layout::{CardLayout, CardText, LayoutConfig};

/// A finished card
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedImage {
    /// Hex SHA-256 of the PNG bytes.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Load the background image as an RGBA canvas.
pub fn load_background(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| Error::RenderError(format!("Failed to load background {}: {}", path.display(), e)))?;
    Ok(img.to_rgba8())
}

/// Draw `card` onto `canvas` (consumed) and encode the result.
pub fn render_card(
    mut canvas: RgbaImage,
    card: &CardText<'_>,
    fonts: &FontSet,
    cfg: &LayoutConfig,
) -> Result<(CardLayout, RenderedImage)> {
    let (width, height) = canvas.dimensions();
    let layout = layout::layout_card(card, fonts, width, height, cfg);
    raster::rasterize(&mut canvas, &layout.commands(), fonts);
    let png_data = raster::encode_png(&canvas)?;
    let rendered = RenderedImage { width, height, png_data };
    info!(
        "Rendered {}x{} card ({} bytes, sha256 {})",
        width,
        height,
        rendered.png_data.len(),
        rendered.sha256_hex()
    );
    Ok((layout, rendered))
}

/// Write the rendered PNG to `path`, replacing any previous file.
pub fn write_output(rendered: &RenderedImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &rendered.png_data)?;
    Ok(())
}
