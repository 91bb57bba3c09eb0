//! Renders the Pull Read Open Graph card (1200x630): brand icon and copy on
//! the left, a miniature app-window mock on the right, flattened to an RGB
//! PNG for social embeds.

use ab_glyph::FontVec;
use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgb, Rgba, RgbaImage};
use rasterkit::{
    Box2D,
    gradient::{self, FadeDirection},
    mask, shapes, text,
};
use std::path::{Path, PathBuf};

const W: u32 = 1200;
const H: u32 = 630;

// Brand palette from the site's shared.css.
const PAPER: Rgb<u8> = Rgb([250, 248, 244]);
const PAPER_RGBA: Rgba<u8> = Rgba([250, 248, 244, 255]);
const PAPER_WARM: Rgba<u8> = Rgba([243, 239, 232, 255]);
const INK: Rgba<u8> = Rgba([28, 25, 23, 255]);
const INK_SECONDARY: Rgba<u8> = Rgba([87, 83, 78, 255]);
const INK_MUTED: Rgba<u8> = Rgba([115, 109, 103, 255]);
const ACCENT: Rgba<u8> = Rgba([180, 85, 53, 255]);
const ACCENT_BG: Rgba<u8> = Rgba([254, 242, 238, 255]);
const BORDER: Rgba<u8> = Rgba([231, 225, 216, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Parser)]
#[command(about = "Generate the Pull Read Open Graph card")]
struct Cli {
    /// Output PNG path
    #[arg(default_value = "og-image.png")]
    output: PathBuf,

    /// Directory holding the brand TTF fonts
    #[arg(long, default_value = "fonts")]
    font_dir: PathBuf,
}

/// The four brand faces the card sets type with.
#[derive(Debug)]
struct Fonts {
    display_lg: FontVec,
    display_it: FontVec,
    body: FontVec,
    body_sm: FontVec,
}

impl Fonts {
    fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            display_lg: load_face(dir, "InstrumentSerif-Regular.ttf")?,
            display_it: load_face(dir, "InstrumentSerif-Italic.ttf")?,
            body: load_face(dir, "WorkSans-Regular.ttf")?,
            body_sm: load_face(dir, "WorkSans-Light.ttf")?,
        })
    }
}

fn load_face(dir: &Path, name: &str) -> Result<FontVec> {
    let path = dir.join(name);
    text::load_font(&path).with_context(|| format!("load font {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let fonts = Fonts::load(&cli.font_dir)?;
    let card = render(&fonts);

    // Social cards carry no alpha channel.
    let rgb = mask::flatten_onto(&card, PAPER);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    rgb.save(&cli.output)
        .with_context(|| format!("save card to {}", cli.output.display()))?;

    log::info!("created {} ({W}x{H})", cli.output.display());
    Ok(())
}

fn render(fonts: &Fonts) -> RgbaImage {
    let mut img = new_canvas();
    let h = H as f32;

    // Left column: brand icon, name, tagline, description, URL.
    let left_x = 80.0;
    let icon_y = 190.0;
    draw_brand_icon(&mut img, left_x + 36.0, icon_y, 72.0);

    let name_y = icon_y + 50.0;
    log::debug!(
        "app name sets {}px wide",
        text::text_width(72.0, &fonts.display_lg, "Pull Read")
    );
    text::draw_text(
        &mut img,
        INK,
        left_x as i32,
        name_y as i32,
        72.0,
        &fonts.display_lg,
        "Pull Read",
    );

    let tagline_y = name_y + 78.0;
    text::draw_text(
        &mut img,
        INK_SECONDARY,
        left_x as i32,
        tagline_y as i32,
        30.0,
        &fonts.display_it,
        "Own what you learn.",
    );

    let desc_y = tagline_y + 50.0;
    let description = [
        "Summarize, highlight, listen, and think",
        "\u{2014} all yours, all local.",
        "Saved as clean Markdown files.",
    ];
    for (i, line) in description.into_iter().enumerate() {
        text::draw_text(
            &mut img,
            INK_MUTED,
            left_x as i32,
            (desc_y + i as f32 * 30.0) as i32,
            22.0,
            &fonts.body,
            line,
        );
    }

    text::draw_text(
        &mut img,
        INK_MUTED,
        left_x as i32,
        (h - 50.0) as i32,
        18.0,
        &fonts.body_sm,
        "pullread.com",
    );

    // Right column: miniature app window.
    let mock_w = 440.0;
    let mock_h = 340.0;
    draw_app_window_mock(
        &mut img,
        W as f32 - mock_w - 80.0,
        (h - mock_h) / 2.0 - 10.0,
        mock_w,
        mock_h,
    );

    img
}

/// Paper-filled canvas with a warm accent fade above a solid accent bar at
/// the very bottom.
fn new_canvas() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(W, H, PAPER_RGBA);
    let (w, h) = (W as f32, H as f32);

    gradient::vertical_fade(
        &mut img,
        0.0,
        w,
        h - 120.0,
        120,
        FadeDirection::Down,
        [180, 85, 53],
        |i| (i / 5).min(25) as u8,
    );
    shapes::fill_rect(&mut img, Box2D::new(0.0, h - 4.0, w, h), ACCENT);
    img
}

/// The document-with-bookmark brand mark centered at `(cx, cy)`.
fn draw_brand_icon(img: &mut RgbaImage, cx: f32, cy: f32, size: f32) {
    let half = size / 2.0;
    shapes::fill_rounded_rect(
        img,
        Box2D::new(cx - half, cy - half, cx + half, cy + half),
        size / 6.0,
        ACCENT,
    );

    // White document, nudged slightly left and down of center.
    let doc_w = size * 0.45;
    let doc_h = size * 0.58;
    let doc_left = cx - doc_w / 2.0 - size * 0.04;
    let doc_top = cy - doc_h / 2.0 + size * 0.02;
    let doc = Box2D::new(doc_left, doc_top, doc_left + doc_w, doc_top + doc_h);
    shapes::fill_rounded_rect(img, doc, size / 16.0, WHITE);

    // Three accent text lines of decreasing width.
    let line_h = (size / 30.0).max(2.0);
    let line_gap = size * 0.075;
    let line_start_y = doc_top + doc_h * 0.35;
    let line_left = doc_left + doc_w * 0.15;
    for (i, width_frac) in [0.65f32, 0.55, 0.45].into_iter().enumerate() {
        let y = line_start_y + i as f32 * line_gap;
        shapes::fill_rounded_rect(
            img,
            Box2D::new(line_left, y, line_left + doc_w * width_frac, y + line_h),
            line_h / 2.0,
            ACCENT,
        );
    }

    // Bookmark ribbon protruding from the document's top right.
    let bk_w = size * 0.10;
    let bk_h = size * 0.22;
    let bk_left = doc.right - doc_w * 0.28;
    let bk_top = doc_top - size * 0.02;
    let bk_right = bk_left + bk_w;
    let bk_bottom = bk_top + bk_h;
    let notch = size * 0.03;
    shapes::fill_polygon(
        img,
        &[
            (bk_left, bk_top),
            (bk_right, bk_top),
            (bk_right, bk_bottom),
            ((bk_left + bk_right) / 2.0, bk_bottom - notch),
            (bk_left, bk_bottom),
        ],
        WHITE,
    );
}

/// A simplified app window: chrome dots, sidebar with shrinking nav bars,
/// title, tab chips, and greeked content lines.
fn draw_app_window_mock(img: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32) {
    let radius = 14.0;
    let win = Box2D::new(x, y, x + w, y + h);
    shapes::fill_rounded_rect(img, win, radius, WHITE);
    shapes::stroke_rounded_rect(img, win, radius, 1.0, BORDER);

    // Traffic-light dots.
    let dot_y = y + 16.0;
    let dots = [
        Rgba([236, 95, 93, 255]),
        Rgba([232, 191, 77, 255]),
        Rgba([97, 196, 110, 255]),
    ];
    for (i, color) in dots.into_iter().enumerate() {
        let dot_x = x + 18.0 + i as f32 * 18.0;
        shapes::fill_circle(img, (dot_x as i32, dot_y as i32), 4, color);
    }

    // Sidebar with divider and four shrinking nav bars.
    let sidebar_w = (w * 0.25).floor();
    let sidebar_right = x + sidebar_w;
    shapes::fill_rect(
        img,
        Box2D::new(x + 1.0, y + 30.0, sidebar_right, y + h - 1.0),
        PAPER_RGBA,
    );
    shapes::stroke_line(img, (sidebar_right, y + 30.0), (sidebar_right, y + h), BORDER);

    for i in 0..4 {
        let bar_y = y + 48.0 + i as f32 * 28.0;
        let bar_w = sidebar_w * (0.7 - i as f32 * 0.08);
        shapes::fill_rounded_rect(
            img,
            Box2D::new(x + 14.0, bar_y, x + 14.0 + bar_w, bar_y + 10.0),
            5.0,
            BORDER,
        );
    }

    // Content column: title bar, tab chips, greeked lines.
    let cx = sidebar_right + 20.0;
    let cy = y + 50.0;
    shapes::fill_rounded_rect(
        img,
        Box2D::new(cx, cy, cx + w * 0.55, cy + 16.0),
        8.0,
        Rgba([28, 25, 23, 40]),
    );

    let tab_y = cy + 34.0;
    shapes::fill_rounded_rect(img, Box2D::new(cx, tab_y, cx + 55.0, tab_y + 18.0), 4.0, ACCENT_BG);
    shapes::fill_rounded_rect(
        img,
        Box2D::new(cx + 60.0, tab_y, cx + 130.0, tab_y + 18.0),
        4.0,
        PAPER_WARM,
    );

    let content_y = tab_y + 36.0;
    for i in 0..6u32 {
        let line_y = content_y + i as f32 * 22.0;
        let trim = if i == 5 { 10.0 } else { 0.0 };
        let line_w = w * 0.6 - trim - (i % 3) as f32 * 15.0;
        // Row 3 reads as a highlighted passage.
        let color = if i == 3 {
            Rgba([235, 220, 90, 255])
        } else {
            Rgba([115, 109, 103, 60])
        };
        shapes::fill_rounded_rect(
            img,
            Box2D::new(cx, line_y, cx + line_w, line_y + 8.0),
            4.0,
            color,
        );
    }
}
