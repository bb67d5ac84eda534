//! PNG output via the `image` crate encoder.

use std::io::Write;

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::buffer::PixelBuffer;
use crate::encode::EncodeRequest;
use crate::error::SolidColorError;

/// Encode an RGB or RGBA buffer as PNG.
///
/// A solid image compresses to almost nothing with any filter, so the
/// fastest settings are used.
pub(crate) fn encode(
    buffer: &PixelBuffer,
    _request: &EncodeRequest,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    let encoder = PngEncoder::new_with_quality(out, CompressionType::Fast, FilterType::Sub);
    encoder.write_image(
        buffer.pixels(),
        buffer.width(),
        buffer.height(),
        buffer.layout().color_type(),
    )?;
    Ok(())
}
