use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::SolidColorError;
use crate::format::ImageFormat;

/// Signature shared by the per-format encoders in the codec table.
pub(crate) type EncodeFn =
    fn(&PixelBuffer, &EncodeRequest, &mut dyn Write) -> Result<(), SolidColorError>;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Builder for encoding a [`PixelBuffer`] to one output format.
///
/// ```no_run
/// use solidcolor::{Color, EncodeRequest, ImageFormat, PixelBuffer, PixelLayout, Resolution};
///
/// let pixels = PixelBuffer::fill(Color::new(0, 255, 0), Resolution::HD, PixelLayout::Rgb8)?;
/// EncodeRequest::new(ImageFormat::Jpeg)
///     .with_quality(80)
///     .write_file("green.jpg", &pixels)?;
/// # Ok::<(), solidcolor::SolidColorError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeRequest {
    format: ImageFormat,
    quality: Option<u8>,
}

impl EncodeRequest {
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            quality: None,
        }
    }

    /// Set JPEG quality. Values outside `0..=100` are clamped.
    ///
    /// Ignored by formats other than JPEG.
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = Some(clamp_quality(quality));
        self
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Effective JPEG quality: the requested value, or [`DEFAULT_JPEG_QUALITY`].
    ///
    /// `None` for formats without a quality setting.
    pub fn quality(&self) -> Option<u8> {
        match self.format {
            ImageFormat::Jpeg => Some(self.quality.unwrap_or(DEFAULT_JPEG_QUALITY)),
            _ => None,
        }
    }

    /// Encode `buffer` into `out`.
    pub fn encode_to(
        &self,
        out: &mut dyn Write,
        buffer: &PixelBuffer,
    ) -> Result<(), SolidColorError> {
        let codec = self.format.codec();
        codec
            .descriptor
            .check_size(buffer.width(), buffer.height(), buffer.layout())?;
        (codec.encode)(buffer, self, out)
    }

    /// Encode `buffer` into memory.
    pub fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, SolidColorError> {
        let mut out = Vec::new();
        self.encode_to(&mut out, buffer)?;
        Ok(out)
    }

    /// Create `path` and encode `buffer` into it.
    ///
    /// On failure the partially written file is removed and the error is
    /// wrapped in [`SolidColorError::EncodeFailed`].
    pub fn write_file(
        &self,
        path: impl AsRef<Path>,
        buffer: &PixelBuffer,
    ) -> Result<(), SolidColorError> {
        let path = path.as_ref();
        let name = self.format.name();
        log::debug!(
            "encoding {}x{} {:?} as {name} to {}",
            buffer.width(),
            buffer.height(),
            buffer.layout(),
            path.display()
        );

        let file = File::create(path)
            .map_err(|e| SolidColorError::encode_failed(path, name, e.into()))?;
        let mut writer = BufWriter::new(file);
        let result = self
            .encode_to(&mut writer, buffer)
            .and_then(|()| writer.flush().map_err(SolidColorError::from));
        drop(writer);

        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(path) {
                log::warn!("could not remove partial file {}: {cleanup}", path.display());
            }
            return Err(SolidColorError::encode_failed(path, name, e));
        }
        Ok(())
    }
}

fn clamp_quality(quality: i32) -> u8 {
    // Fits after the clamp.
    quality.clamp(0, 100) as u8
}
