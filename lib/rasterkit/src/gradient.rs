use crate::shapes::{self, Box2D};
use image::{Rgba, RgbaImage};

/// Which way a [`vertical_fade`] walks from its starting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    Down,
    Up,
}

/// Simulate a vertical linear gradient by stacking one-pixel translucent
/// rows. Row `i` is drawn at `y_start + i` (or `y_start - i` going up) with
/// the alpha `alpha_of(i)` returns; zero-alpha rows are skipped.
pub fn vertical_fade<F>(
    img: &mut RgbaImage,
    x0: f32,
    x1: f32,
    y_start: f32,
    rows: u32,
    direction: FadeDirection,
    rgb: [u8; 3],
    alpha_of: F,
) where
    F: Fn(u32) -> u8,
{
    for i in 0..rows {
        let alpha = alpha_of(i);
        if alpha == 0 {
            continue;
        }
        let y = match direction {
            FadeDirection::Down => y_start + i as f32,
            FadeDirection::Up => y_start - i as f32,
        };
        shapes::fill_rect(
            img,
            Box2D::new(x0, y, x1, y + 1.0),
            Rgba([rgb[0], rgb[1], rgb[2], alpha]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_down_weakens_with_depth() {
        let mut img = RgbaImage::from_pixel(8, 64, Rgba([0, 0, 0, 255]));
        vertical_fade(&mut img, 0.0, 8.0, 0.0, 60, FadeDirection::Down, [255, 255, 255], |i| {
            (30 - i as i32 / 2).max(0) as u8
        });

        let top = img.get_pixel(4, 0)[0];
        let lower = img.get_pixel(4, 40)[0];
        assert!(top > lower, "top {top} should be brighter than lower {lower}");
        // Rows past the fade-out point stay untouched.
        assert_eq!(img.get_pixel(4, 62)[0], 0);
    }

    #[test]
    fn test_fade_up_walks_backwards() {
        let mut img = RgbaImage::from_pixel(8, 32, Rgba([255, 255, 255, 255]));
        vertical_fade(&mut img, 0.0, 8.0, 30.0, 20, FadeDirection::Up, [0, 0, 0], |i| {
            (20 - i as i32).max(0) as u8
        });

        assert!(img.get_pixel(4, 30)[0] < 255);
        assert_eq!(img.get_pixel(4, 5)[0], 255);
    }

    #[test]
    fn test_fade_clips_off_canvas_rows() {
        let mut img = RgbaImage::new(8, 8);
        vertical_fade(&mut img, 0.0, 8.0, 4.0, 50, FadeDirection::Down, [255, 0, 0], |_| 40);
        assert!(img.get_pixel(4, 6)[3] > 0);
    }
}
