use crate::shapes::{self, Box2D};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};

/// Soft drop shadow simulated by layered translucent rounded rects.
///
/// Layer `i` (counted from `layers` down to 1) is offset by
/// `floor(i * dx_per_layer)` right and `i * dy_per_layer + dy_offset` down,
/// with alpha `max(min_alpha, max_alpha - i * alpha_step)`. Layers are
/// painted write-through rather than blended, so a pixel's alpha is the
/// innermost covering rect's, never an accumulation; inner layers are drawn
/// last, putting the densest alpha closest to the occluder.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DropShadowConfig {
    #[derivative(Default(value = "15"))]
    layers: u32,
    rgb: [u8; 3],
    #[derivative(Default(value = "30"))]
    max_alpha: u8,
    #[derivative(Default(value = "2"))]
    alpha_step: u8,
    #[derivative(Default(value = "5"))]
    min_alpha: u8,
    #[derivative(Default(value = "0.5"))]
    dx_per_layer: f32,
    #[derivative(Default(value = "1.0"))]
    dy_per_layer: f32,
    #[derivative(Default(value = "2.0"))]
    dy_offset: f32,
}

impl DropShadowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cast this shadow for an occluder shaped like `rect` with the given
    /// corner radius.
    pub fn draw(&self, img: &mut RgbaImage, rect: Box2D, radius: f32) {
        for i in (1..=self.layers).rev() {
            let alpha = (i32::from(self.max_alpha) - i as i32 * i32::from(self.alpha_step))
                .max(i32::from(self.min_alpha)) as u8;
            let dx = (i as f32 * self.dx_per_layer).floor();
            let dy = i as f32 * self.dy_per_layer + self.dy_offset;
            shapes::paint_rounded_rect(
                img,
                rect.translate(dx, dy),
                radius,
                Rgba([self.rgb[0], self.rgb[1], self.rgb[2], alpha]),
            );
        }
    }
}
