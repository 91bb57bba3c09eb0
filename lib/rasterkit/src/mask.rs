use crate::{
    RasterError, RasterResult,
    shapes::{self, Box2D},
};
use image::{GrayImage, Luma, Pixel, Rgb, RgbImage, RgbaImage};

/// Build a grayscale rounded-rectangle clip mask (0 outside, 255 inside,
/// anti-aliased along the edge).
pub fn rounded_rect_mask(width: u32, height: u32, rect: Box2D, radius: f32) -> GrayImage {
    let radius = radius.clamp(0.0, rect.width().min(rect.height()) * 0.5);
    let mut mask = GrayImage::new(width, height);
    for (x, y, px) in mask.enumerate_pixels_mut() {
        let d = shapes::rounded_rect_sdf(x as f32 + 0.5, y as f32 + 0.5, &rect, radius);
        let coverage = (0.5 - d).clamp(0.0, 1.0);
        *px = Luma([(coverage * 255.0).round() as u8]);
    }
    mask
}

fn check_dimensions(a: (u32, u32), b: (u32, u32), what: &str) -> RasterResult<()> {
    if a == b {
        Ok(())
    } else {
        Err(RasterError::InvalidParameter(format!(
            "{what}: {}x{} vs {}x{}",
            a.0, a.1, b.0, b.1
        )))
    }
}

/// Composite `layer` over `base` with straight-alpha "over" blending.
pub fn alpha_over(base: &mut RgbaImage, layer: &RgbaImage) -> RasterResult<()> {
    check_dimensions(base.dimensions(), layer.dimensions(), "alpha_over layer size")?;
    for (dst, src) in base.pixels_mut().zip(layer.pixels()) {
        dst.blend(src);
    }
    Ok(())
}

/// Per-pixel `lerp(base, overlay, mask / 255)` across all four channels.
pub fn composite_masked(
    base: &RgbaImage,
    overlay: &RgbaImage,
    mask: &GrayImage,
) -> RasterResult<RgbaImage> {
    check_dimensions(base.dimensions(), overlay.dimensions(), "composite overlay size")?;
    check_dimensions(base.dimensions(), mask.dimensions(), "composite mask size")?;

    let mut out = base.clone();
    for ((dst, src), m) in out.pixels_mut().zip(overlay.pixels()).zip(mask.pixels()) {
        let t = f32::from(m[0]) / 255.0;
        for c in 0..4 {
            dst[c] = (f32::from(dst[c]) * (1.0 - t) + f32::from(src[c]) * t).round() as u8;
        }
    }
    Ok(out)
}

/// Scale a layer's alpha channel by a grayscale mask, clipping it to the
/// mask's silhouette.
pub fn apply_mask(img: &mut RgbaImage, mask: &GrayImage) -> RasterResult<()> {
    check_dimensions(img.dimensions(), mask.dimensions(), "apply_mask mask size")?;
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px[3] = ((u16::from(px[3]) * u16::from(m[0]) + 127) / 255) as u8;
    }
    Ok(())
}

/// Flatten an RGBA layer onto an opaque background color, using the layer's
/// alpha channel as the paste mask.
pub fn flatten_onto(img: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let mut out = RgbImage::from_pixel(img.width(), img.height(), background);
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        let t = f32::from(src[3]) / 255.0;
        for c in 0..3 {
            dst[c] = (f32::from(dst[c]) * (1.0 - t) + f32::from(src[c]) * t).round() as u8;
        }
    }
    out
}
