//! Uncompressed BMP encoder (internal).
//!
//! Opaque buffers are written as 24-bit BGR with a `BITMAPINFOHEADER`.
//! Buffers with alpha are written as 32-bit BGRA with a `BITMAPV4HEADER`
//! whose bitfield masks declare the alpha channel, so readers do not treat
//! the fourth byte as padding.

mod encode;

use std::io::Write;

use crate::buffer::PixelBuffer;
use crate::encode::EncodeRequest;
use crate::error::SolidColorError;

/// Encode to BMP.
pub(crate) fn encode(
    buffer: &PixelBuffer,
    _request: &EncodeRequest,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    encode::encode_bmp(
        buffer.pixels(),
        buffer.width(),
        buffer.height(),
        buffer.layout(),
        out,
    )
}
