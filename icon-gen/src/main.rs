//! Renders the Pull Read app icon: a teal rounded square holding a white
//! document page with three text bars and an orange bookmark ribbon, written
//! out as a 1024x1024 PNG.

use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgba, RgbaImage};
use rasterkit::{
    Box2D,
    gradient::{self, FadeDirection},
    mask,
    shadow::DropShadowConfig,
    shapes,
};
use std::path::PathBuf;

const SIZE: u32 = 1024;

const TEAL_MID: Rgba<u8> = Rgba([20, 170, 155, 255]);
const PAGE_WHITE: Rgba<u8> = Rgba([252, 253, 253, 255]);
const BACK_PAGE_1: Rgba<u8> = Rgba([240, 248, 246, 220]);
const BACK_PAGE_2: Rgba<u8> = Rgba([225, 235, 232, 180]);
const RIBBON: Rgba<u8> = Rgba([235, 110, 75, 255]);
const RIBBON_LIGHT: Rgba<u8> = Rgba([245, 130, 95, 255]);
const RIBBON_DARK: Rgba<u8> = Rgba([200, 85, 55, 255]);

#[derive(Parser)]
#[command(about = "Generate the Pull Read app icon")]
struct Cli {
    /// Output PNG path
    #[arg(default_value = "icon-source.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let icon = render()?;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    icon.save(&cli.output)
        .with_context(|| format!("save icon to {}", cli.output.display()))?;

    log::info!("created {} ({SIZE}x{SIZE})", cli.output.display());
    Ok(())
}

fn render() -> Result<RgbaImage> {
    let size = SIZE as f32;
    let mut img = RgbaImage::new(SIZE, SIZE);

    // Teal rounded-square background, radius close to the macOS superellipse.
    let bg_margin = 12.0;
    let bg_radius = size * 0.22;
    let bg = Box2D::new(bg_margin, bg_margin, size - bg_margin, size - bg_margin);
    shapes::fill_rounded_rect(&mut img, bg, bg_radius, TEAL_MID);

    // Gradient overlay: lighter toward the top, shaded toward the bottom,
    // clipped to the rounded square.
    let mut overlay = RgbaImage::new(SIZE, SIZE);
    gradient::vertical_fade(
        &mut overlay,
        bg.left,
        bg.right,
        bg.top,
        200,
        FadeDirection::Down,
        [255, 255, 255],
        |i| (30 - i as i32 / 7).max(0) as u8,
    );
    gradient::vertical_fade(
        &mut overlay,
        bg.left,
        bg.right,
        size - bg_margin,
        150,
        FadeDirection::Up,
        [0, 0, 0],
        |i| (20 - i as i32 / 8).max(0) as u8,
    );
    let bg_mask = mask::rounded_rect_mask(SIZE, SIZE, bg, bg_radius);
    let mut lit = img.clone();
    mask::alpha_over(&mut lit, &overlay)?;
    img = mask::composite_masked(&img, &lit, &bg_mask)?;

    // Document page with a soft shadow and two stacked back pages.
    let page = Box2D::new(size * 0.20, size * 0.14, size * 0.78, size * 0.86);
    let page_radius = size * 0.03;

    let mut shadow_layer = RgbaImage::new(SIZE, SIZE);
    DropShadowConfig::new().draw(&mut shadow_layer, page, page_radius);
    mask::alpha_over(&mut img, &shadow_layer)?;

    // Painted write-through so the exposed strips keep their translucent
    // alpha in the final PNG instead of compounding over the teal.
    shapes::paint_rounded_rect(&mut img, page.translate(14.0, -14.0), page_radius, BACK_PAGE_2);
    shapes::paint_rounded_rect(&mut img, page.translate(7.0, -7.0), page_radius, BACK_PAGE_1);
    shapes::paint_rounded_rect(&mut img, page, page_radius, PAGE_WHITE);

    // The page darkens very slightly toward its bottom edge.
    let mut page_tint = RgbaImage::new(SIZE, SIZE);
    let page_height = page.height() as u32;
    gradient::vertical_fade(
        &mut page_tint,
        page.left,
        page.right,
        page.top,
        page_height,
        FadeDirection::Down,
        [200, 210, 208],
        move |i| (i * 15 / page_height).min(15) as u8,
    );
    let page_mask = mask::rounded_rect_mask(SIZE, SIZE, page, page_radius);
    let mut tinted = img.clone();
    mask::alpha_over(&mut tinted, &page_tint)?;
    img = mask::composite_masked(&img, &tinted, &page_mask)?;

    draw_text_bars(&mut img, size);
    draw_ribbon(&mut img, size, page.top);

    // Clip everything to the rounded-square silhouette.
    mask::apply_mask(&mut img, &bg_mask)?;
    Ok(img)
}

/// Three dark rounded bars standing in for lines of text, each narrower and
/// a touch lighter than the one above.
fn draw_text_bars(img: &mut RgbaImage, size: f32) {
    let line_left = size * 0.27;
    let line_height = size * 0.035;
    let line_start_y = size * 0.36;
    let line_spacing = size * 0.10;

    for (i, width_frac) in [0.38f32, 0.34, 0.30].into_iter().enumerate() {
        let y = line_start_y + i as f32 * line_spacing;
        let darkness = 60 + i as u8 * 8;
        shapes::fill_rounded_rect(
            img,
            Box2D::new(line_left, y, line_left + size * width_frac, y + line_height),
            line_height / 2.0,
            Rgba([darkness, darkness + 5, darkness + 10, 255]),
        );
    }
}

/// Coral bookmark ribbon hanging over the page's top edge, with a V-notch
/// at the bottom and shaded side strips for depth.
fn draw_ribbon(img: &mut RgbaImage, size: f32, page_top: f32) {
    let left = size * 0.62;
    let right = size * 0.70;
    let top = page_top - 5.0;
    let bottom = size * 0.32;
    let notch = size * 0.028;
    let mid = (left + right) / 2.0;

    shapes::fill_polygon(
        img,
        &[
            (left, top),
            (right, top),
            (right, bottom),
            (mid, bottom - notch),
            (left, bottom),
        ],
        RIBBON,
    );

    // Highlight on the left edge, shade on the right.
    shapes::fill_polygon(
        img,
        &[
            (left, top),
            (left + 8.0, top),
            (left + 8.0, bottom - 5.0),
            (left, bottom),
        ],
        RIBBON_LIGHT,
    );
    shapes::fill_polygon(
        img,
        &[
            (right - 6.0, top),
            (right, top),
            (right, bottom),
            (right - 6.0, bottom - 2.0),
        ],
        RIBBON_DARK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() -> Result<()> {
        let icon = render()?;
        assert_eq!(icon.dimensions(), (SIZE, SIZE));
        Ok(())
    }

    #[test]
    fn test_corners_clipped_by_mask() -> Result<()> {
        let icon = render()?;
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(SIZE - 1, 0)[3], 0);
        assert_eq!(icon.get_pixel(512, 512)[3], 255);
        Ok(())
    }

    #[test]
    fn test_background_is_teal() -> Result<()> {
        let icon = render()?;
        // Left of the page, vertically centered: teal with gradient applied.
        let px = icon.get_pixel(100, 512);
        assert!(px[1] > 140, "green was {}", px[1]);
        assert!(px[1] > px[0], "expected green over red, got {px:?}");
        Ok(())
    }

    #[test]
    fn test_page_is_near_white() -> Result<()> {
        let icon = render()?;
        // On the page, above the first text bar and clear of the ribbon.
        let px = icon.get_pixel(512, 250);
        assert!(px[0] > 240 && px[1] > 240 && px[2] > 240, "page pixel {px:?}");
        Ok(())
    }

    #[test]
    fn test_back_page_strips_stay_translucent() -> Result<()> {
        let icon = render()?;
        // Exposed strip of the outermost back page, right of the main page.
        assert_eq!(icon.get_pixel(809, 300)[3], 180);
        // The middle back page's strip.
        assert_eq!(icon.get_pixel(802, 300)[3], 220);
        // The main page itself is opaque.
        assert_eq!(icon.get_pixel(512, 250)[3], 255);
        Ok(())
    }

    #[test]
    fn test_text_bars_are_dark() -> Result<()> {
        let icon = render()?;
        // Inside the first bar: x 276..665, y 368..404.
        let px = icon.get_pixel(400, 385);
        assert!(px[0] < 90, "bar pixel {px:?}");
        Ok(())
    }

    #[test]
    fn test_ribbon_is_coral() -> Result<()> {
        let icon = render()?;
        // Mid-ribbon, between the highlight and shade strips.
        let px = icon.get_pixel(675, 200);
        assert!(px[0] > 200 && px[1] < 160, "ribbon pixel {px:?}");
        Ok(())
    }

    #[test]
    fn test_save_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("icon.png");
        render()?.save(&path)?;

        let reloaded = image::open(&path)?;
        assert_eq!(reloaded.width(), SIZE);
        Ok(())
    }
}
