//! JPEG output via the `image` crate encoder. JPEG has no alpha channel.

use std::borrow::Cow;
use std::io::Write;

use image::{ExtendedColorType, ImageEncoder};
use image::codecs::jpeg::JpegEncoder;

use crate::buffer::PixelBuffer;
use crate::encode::{DEFAULT_JPEG_QUALITY, EncodeRequest};
use crate::error::SolidColorError;
use crate::pixel::PixelLayout;

/// Encode a buffer as baseline JPEG. RGBA input has its alpha dropped.
pub(crate) fn encode(
    buffer: &PixelBuffer,
    request: &EncodeRequest,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    let rgb: Cow<'_, [u8]> = match buffer.layout() {
        PixelLayout::Rgb8 => Cow::Borrowed(buffer.pixels()),
        PixelLayout::Rgba8 => Cow::Owned(
            buffer
                .pixels()
                .chunks_exact(4)
                .flat_map(|px| &px[..3])
                .copied()
                .collect(),
        ),
    };
    let quality = request.quality().unwrap_or(DEFAULT_JPEG_QUALITY);
    let encoder = JpegEncoder::new_with_quality(out, quality);
    encoder.write_image(&rgb, buffer.width(), buffer.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ImageFormat;
    use crate::{Color, Resolution};

    #[test]
    fn rgba_input_is_flattened() {
        let buf = PixelBuffer::fill(
            Color::rgba(0, 255, 0, 10),
            Resolution::new(8, 8).unwrap(),
            PixelLayout::Rgba8,
        )
        .unwrap();
        let jpeg = EncodeRequest::new(ImageFormat::Jpeg).encode(&buf).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }
}
