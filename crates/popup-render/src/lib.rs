//! Measurement and image utilities for the popup bar.
//!
//! Provides glyph-advance text measurement (regular and bold faces)
//! and icon loading with cropping and a transparent placeholder.

pub mod icon;
pub mod text;

// Re-exports for convenience
pub use icon::Icon;
pub use text::{FixedAdvanceMeasurer, FontWeight, GlyphMeasurer, TextMeasurer};

/// Side length of the square an icon is cropped to before display.
pub const ICON_CROP_SIZE: u32 = 15;

/// Errors that can occur while loading fonts or icons.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid font file {path}: {reason}")]
    InvalidFont { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
