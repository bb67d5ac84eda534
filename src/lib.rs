//! # solidcolor
//!
//! Generate single-color PNG, JPEG and BMP images.
//!
//! The pipeline is small: parse a [`Color`], pick a [`Resolution`] (explicit,
//! a preset, or detected from the screen), fill a [`PixelBuffer`], and hand
//! it to the encoder for the requested [`ImageFormat`].
//!
//! ## Transparency
//!
//! PNG and BMP keep alpha: a color with alpha below 255 produces a 4-channel
//! RGBA image (32-bit BGRA for BMP). Opaque colors, and every JPEG, are
//! written with 3 channels; JPEG silently drops alpha.
//!
//! ## Supported formats
//!
//! - **PNG** via the `image` crate encoder
//! - **JPEG** via the `image` crate encoder, quality `0..=100` (default 95)
//! - **BMP** uncompressed 24-bit or 32-bit, written by this crate
//!
//! ## Non-Goals
//!
//! - Gradients or more than one color
//! - Decoding images
//! - Color management beyond 8-bit sRGB
//!
//! ## Usage
//!
//! ```no_run
//! use solidcolor::{Color, GenerateRequest, Resolution};
//!
//! // Format from the extension
//! solidcolor::generate(Color::from_hex("#FF5733")?, Resolution::FULL_HD, "orange.png")?;
//!
//! // Explicit format and quality, size from the screen
//! let written = GenerateRequest::new(Color::from_hex("3498DB")?, "wallpaper")
//!     .with_format("jpg")
//!     .with_quality(90)
//!     .generate()?;
//! println!("{} {}", written.resolution, written.format.name);
//! # Ok::<(), solidcolor::SolidColorError>(())
//! ```

// The Windows screen backend is the only FFI call.
#![deny(unsafe_code)]

mod bmp;
mod buffer;
mod color;
mod encode;
mod error;
mod format;
mod generate;
mod jpeg;
mod limits;
mod pixel;
mod png;
mod resolution;
mod screen;

use std::path::PathBuf;

// Re-exports
#[cfg(feature = "rgb")]
pub use buffer::BufferPixel;
pub use buffer::PixelBuffer;
pub use color::Color;
pub use encode::{DEFAULT_JPEG_QUALITY, EncodeRequest};
pub use error::SolidColorError;
pub use format::{
    FormatDescriptor, ImageFormat, format_for_path, resolve_extension, resolve_format_name,
    supported_extensions,
};
pub use generate::{GenerateRequest, Generated, ResolutionSpec};
pub use limits::Limits;
pub use pixel::PixelLayout;
pub use resolution::Resolution;
pub use screen::{ScreenSource, SystemScreen};

/// Write `color` at `resolution` to `output`, choosing the format from the
/// output extension.
pub fn generate(
    color: Color,
    resolution: Resolution,
    output: impl Into<PathBuf>,
) -> Result<Generated, SolidColorError> {
    GenerateRequest::new(color, output)
        .with_resolution(resolution)
        .generate()
}
