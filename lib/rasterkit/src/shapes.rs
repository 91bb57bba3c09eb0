use image::{Pixel, Rgba, RgbaImage};
use imageproc::{
    drawing::{self, Blend},
    point::Point,
    rect::Rect,
};

/// Axis-aligned box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2D {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Box2D {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }
}

/// Signed distance from a point to a rounded rectangle's edge.
/// Negative inside, positive outside.
pub(crate) fn rounded_rect_sdf(x: f32, y: f32, rect: &Box2D, radius: f32) -> f32 {
    let cx = (rect.left + rect.right) * 0.5;
    let cy = (rect.top + rect.bottom) * 0.5;
    let hw = rect.width() * 0.5 - radius;
    let hh = rect.height() * 0.5 - radius;
    let qx = (x - cx).abs() - hw;
    let qy = (y - cy).abs() - hh;
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - radius
}

/// Clamp a requested corner radius so quadrants never overlap.
fn clamp_radius(rect: &Box2D, radius: f32) -> f32 {
    radius.clamp(0.0, rect.width().min(rect.height()) * 0.5)
}

/// Alpha-blend `color` into one pixel, scaled by `coverage` in `[0, 1]`.
pub(crate) fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let alpha = (f32::from(color[3]) * coverage).round() as u8;
    if alpha == 0 {
        return;
    }
    img.get_pixel_mut(x, y)
        .blend(&Rgba([color[0], color[1], color[2], alpha]));
}

/// The integer pixel range covered by `rect`, clipped to the canvas.
fn clipped_span(img: &RgbaImage, rect: &Box2D) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.left.floor().max(0.0) as u32;
    let y0 = rect.top.floor().max(0.0) as u32;
    let x1 = (rect.right.ceil().max(0.0) as i64).min(i64::from(img.width())) as u32;
    let y1 = (rect.bottom.ceil().max(0.0) as i64).min(i64::from(img.height())) as u32;
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Fill an anti-aliased rounded rectangle with straight-alpha blending.
///
/// Degenerate boxes are a no-op, and geometry hanging off the canvas is
/// clipped rather than panicking.
pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Box2D, radius: f32, color: Rgba<u8>) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let radius = clamp_radius(&rect, radius);
    let Some((x0, y0, x1, y1)) = clipped_span(img, &rect) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let d = rounded_rect_sdf(x as f32 + 0.5, y as f32 + 0.5, &rect, radius);
            let coverage = (0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage);
            }
        }
    }
}

/// Write an anti-aliased rounded rectangle with replacement semantics:
/// covered pixels take `color` outright, alpha channel included, and edge
/// pixels lerp all four channels toward it by coverage. Unlike
/// [`fill_rounded_rect`], overlapping paints never compound opacity; the
/// last paint wins, the way Pillow-style draw calls write into a layer.
pub fn paint_rounded_rect(img: &mut RgbaImage, rect: Box2D, radius: f32, color: Rgba<u8>) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let radius = clamp_radius(&rect, radius);
    let Some((x0, y0, x1, y1)) = clipped_span(img, &rect) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let d = rounded_rect_sdf(x as f32 + 0.5, y as f32 + 0.5, &rect, radius);
            let coverage = (0.5 - d).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let dst = img.get_pixel_mut(x, y);
            for c in 0..4 {
                dst[c] = (f32::from(dst[c]) * (1.0 - coverage)
                    + f32::from(color[c]) * coverage)
                    .round() as u8;
            }
        }
    }
}

/// Stroke a rounded rectangle outline of the given width, anti-aliased.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    rect: Box2D,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 || width <= 0.0 {
        return;
    }
    let radius = clamp_radius(&rect, radius);
    let pad = width * 0.5 + 1.0;
    let outer = Box2D::new(
        rect.left - pad,
        rect.top - pad,
        rect.right + pad,
        rect.bottom + pad,
    );
    let Some((x0, y0, x1, y1)) = clipped_span(img, &outer) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let d = rounded_rect_sdf(x as f32 + 0.5, y as f32 + 0.5, &rect, radius);
            let coverage = (0.5 + width * 0.5 - d.abs()).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, color, coverage);
            }
        }
    }
}

/// Fill an axis-aligned rectangle, rounded to whole pixels.
pub fn fill_rect(img: &mut RgbaImage, rect: Box2D, color: Rgba<u8>) {
    let w = rect.width().round();
    let h = rect.height().round();
    if w < 1.0 || h < 1.0 {
        return;
    }
    let x = rect.left.round() as i32;
    let y = rect.top.round() as i32;
    with_blend(img, |canvas| {
        drawing::draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(w as u32, h as u32), color);
    });
}

/// Fill a polygon given as `(x, y)` vertices. Fewer than three vertices is
/// a no-op; a closing vertex equal to the first is dropped.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    let mut poly: Vec<Point<i32>> = points
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    with_blend(img, |canvas| {
        drawing::draw_polygon_mut(canvas, &poly, color);
    });
}

/// Fill a circle centered at `center` with integer radius.
pub fn fill_circle(img: &mut RgbaImage, center: (i32, i32), radius: i32, color: Rgba<u8>) {
    if radius <= 0 {
        return;
    }
    with_blend(img, |canvas| {
        drawing::draw_filled_circle_mut(canvas, center, radius, color);
    });
}

/// Draw a one-pixel line segment.
pub fn stroke_line(img: &mut RgbaImage, start: (f32, f32), end: (f32, f32), color: Rgba<u8>) {
    with_blend(img, |canvas| {
        drawing::draw_line_segment_mut(canvas, start, end, color);
    });
}

/// Run an `imageproc` drawing call through its alpha-blending canvas.
fn with_blend<F>(img: &mut RgbaImage, draw: F)
where
    F: FnOnce(&mut Blend<RgbaImage>),
{
    let mut canvas = Blend(std::mem::replace(img, RgbaImage::new(0, 0)));
    draw(&mut canvas);
    *img = canvas.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> RgbaImage {
        RgbaImage::new(w, h)
    }

    #[test]
    fn test_fill_rounded_rect_center_and_corner() {
        let mut img = canvas(100, 100);
        fill_rounded_rect(
            &mut img,
            Box2D::new(10.0, 10.0, 90.0, 90.0),
            20.0,
            Rgba([200, 50, 50, 255]),
        );

        // Solid in the middle, untouched at the square corner the radius cuts off.
        assert_eq!(img.get_pixel(50, 50)[3], 255);
        assert_eq!(img.get_pixel(11, 11)[3], 0);
        // The corner arc midpoint is covered.
        assert!(img.get_pixel(18, 18)[3] > 0);
    }

    #[test]
    fn test_fill_rounded_rect_clips_to_canvas() {
        let mut img = canvas(32, 32);
        fill_rounded_rect(
            &mut img,
            Box2D::new(-50.0, -50.0, 500.0, 500.0),
            8.0,
            Rgba([255, 255, 255, 255]),
        );
        assert_eq!(img.get_pixel(0, 0)[3], 255);
        assert_eq!(img.get_pixel(31, 31)[3], 255);
    }

    #[test]
    fn test_fill_rounded_rect_degenerate_is_noop() {
        let mut img = canvas(16, 16);
        fill_rounded_rect(
            &mut img,
            Box2D::new(8.0, 8.0, 8.0, 20.0),
            4.0,
            Rgba([255, 0, 0, 255]),
        );
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_paint_rounded_rect_replaces_alpha() {
        let mut img = RgbaImage::from_pixel(40, 40, Rgba([0, 120, 110, 255]));
        paint_rounded_rect(
            &mut img,
            Box2D::new(5.0, 5.0, 35.0, 35.0),
            6.0,
            Rgba([225, 235, 232, 180]),
        );

        // Interior pixels take the translucent color outright instead of
        // compounding with the opaque base.
        assert_eq!(*img.get_pixel(20, 20), Rgba([225, 235, 232, 180]));
        assert_eq!(*img.get_pixel(2, 2), Rgba([0, 120, 110, 255]));
    }

    #[test]
    fn test_paint_rounded_rect_last_write_wins() {
        let mut img = canvas(40, 40);
        paint_rounded_rect(&mut img, Box2D::new(5.0, 5.0, 35.0, 35.0), 4.0, Rgba([0, 0, 0, 28]));
        paint_rounded_rect(&mut img, Box2D::new(8.0, 8.0, 32.0, 32.0), 4.0, Rgba([0, 0, 0, 26]));
        assert_eq!(img.get_pixel(20, 20)[3], 26);
    }

    #[test]
    fn test_translucent_fill_blends_over_base() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        fill_rect(&mut img, Box2D::new(0.0, 0.0, 10.0, 10.0), Rgba([255, 0, 0, 128]));

        let px = img.get_pixel(5, 5);
        assert_eq!(px[0], 255);
        assert!(px[1] > 120 && px[1] < 135, "green was {}", px[1]);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_fill_polygon_covers_interior_only() {
        let mut img = canvas(60, 60);
        let triangle = [(10.0, 50.0), (30.0, 10.0), (50.0, 50.0)];
        fill_polygon(&mut img, &triangle, Rgba([0, 200, 0, 255]));

        assert_eq!(img.get_pixel(30, 40)[1], 200);
        assert_eq!(img.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn test_fill_polygon_drops_closing_vertex() {
        let mut img = canvas(40, 40);
        let closed = [
            (5.0, 35.0),
            (20.0, 5.0),
            (35.0, 35.0),
            (5.0, 35.0),
        ];
        fill_polygon(&mut img, &closed, Rgba([0, 0, 255, 255]));
        assert_eq!(img.get_pixel(20, 25)[2], 255);
    }

    #[test]
    fn test_stroke_rounded_rect_leaves_interior() {
        let mut img = canvas(80, 80);
        let rect = Box2D::new(10.0, 10.0, 70.0, 70.0);
        stroke_rounded_rect(&mut img, rect, 10.0, 1.0, Rgba([0, 0, 0, 255]));

        assert!(img.get_pixel(40, 10)[3] > 0);
        assert_eq!(img.get_pixel(40, 40)[3], 0);
    }

    #[test]
    fn test_fill_circle_and_line() {
        let mut img = canvas(30, 30);
        fill_circle(&mut img, (15, 15), 5, Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(15, 15)[2], 30);

        stroke_line(&mut img, (0.0, 0.0), (29.0, 0.0), Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(10, 0)[0], 255);
    }
}
