//! 2D raster drawing toolbox for the brand asset generators
//!
//! Everything operates on plain `image` buffers: anti-aliased rounded
//! rectangles, polygon fills, grayscale clip masks, Pillow-style layer
//! compositing, banded vertical fades, layered drop shadows, and TTF text
//! rendering through `imageproc`.

pub mod gradient;
pub mod mask;
pub mod shadow;
pub mod shapes;
pub mod text;

pub use shapes::Box2D;

pub type RasterResult<T> = Result<T, RasterError>;

#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
