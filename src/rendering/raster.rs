//! Rasterizer: composites paint commands onto the canvas and encodes PNG

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};

use crate::rendering::font::FontSet;
use crate::rendering::paint::PaintCommand;
use crate::{Error, Result};

/// Blend `rgba` at `coverage` over the destination pixel (source-over).
fn blend(dst: &mut Rgba<u8>, rgba: (u8, u8, u8, u8), coverage: f32) {
    let a = (rgba.3 as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let inv = 1.0 - a;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = a + da * inv;
    // Destination color only counts in proportion to its own alpha.
    let mix = |s: u8, d: u8| ((s as f32 * a + d as f32 * da * inv) / out_a).round() as u8;
    dst.0[0] = mix(rgba.0, dst.0[0]);
    dst.0[1] = mix(rgba.1, dst.0[1]);
    dst.0[2] = mix(rgba.2, dst.0[2]);
    dst.0[3] = (out_a * 255.0).round() as u8;
}

/// Draw `commands` in order onto `canvas`. Pixels outside the canvas are clipped.
pub fn rasterize(canvas: &mut RgbaImage, commands: &[PaintCommand], fonts: &FontSet) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for cmd in commands {
        match cmd {
            PaintCommand::Text { x, y, text, role, line_spacing, rgba } => {
                let face = fonts.face(*role);
                let step = face.line_height() + line_spacing;
                for (i, line) in text.split('\n').enumerate() {
                    let ly = y + i as i32 * step;
                    face.for_each_pixel(line, *x, ly, |px, py, v| {
                        if px < 0 || py < 0 || px >= w || py >= h {
                            return;
                        }
                        blend(canvas.get_pixel_mut(px as u32, py as u32), *rgba, v);
                    });
                }
            }
        }
    }
}

/// Encode the canvas as PNG. Same pixels always give the same bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgba8)
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;
    Ok(buf)
}
