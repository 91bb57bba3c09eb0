use crate::{RasterError, RasterResult};
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing;
use std::path::Path;

/// Load a TTF/OTF face from disk.
pub fn load_font<P: AsRef<Path>>(path: P) -> RasterResult<FontVec> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let font = FontVec::try_from_vec(bytes)
        .map_err(|e| RasterError::Font(format!("{}: {e}", path.display())))?;
    log::debug!("loaded font {}", path.display());
    Ok(font)
}

/// Draw a single line of text with its top-left corner at `(x, y)`,
/// anti-aliased against whatever is already on the canvas.
pub fn draw_text(
    img: &mut RgbaImage,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    px_size: f32,
    font: &FontVec,
    text: &str,
) {
    drawing::draw_text_mut(img, color, x, y, PxScale::from(px_size), font, text);
}

/// Measure a single line of text at the given pixel size.
pub fn text_width(px_size: f32, font: &FontVec, text: &str) -> u32 {
    drawing::text_size(PxScale::from(px_size), font, text).0
}
