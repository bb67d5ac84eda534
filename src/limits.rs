use crate::error::SolidColorError;
use crate::pixel::PixelLayout;
use crate::resolution::Resolution;

/// Caller-imposed caps checked before a pixel buffer is allocated.
///
/// All fields default to `None`, leaving only the format's own maximum.
/// Useful when the size comes from untrusted input or screen detection.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the filled buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a fill of `resolution` in `layout` against every cap.
    pub(crate) fn check(
        &self,
        resolution: Resolution,
        layout: PixelLayout,
    ) -> Result<(), SolidColorError> {
        let pixels = resolution.pixel_count();
        let bytes = pixels * layout.bytes_per_pixel() as u64;

        within("width", u64::from(resolution.width()), self.max_width.map(u64::from))?;
        within("height", u64::from(resolution.height()), self.max_height.map(u64::from))?;
        within("pixel count", pixels, self.max_pixels)?;
        within("buffer size in bytes", bytes, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), SolidColorError> {
    match limit {
        Some(max) if value > max => Err(SolidColorError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
