use std::path::PathBuf;

/// Errors from color/resolution parsing, format dispatch and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SolidColorError {
    #[error("invalid hex color format: {0}")]
    InvalidColorFormat(String),

    #[error("invalid resolution: {0}")]
    InvalidDimensions(String),

    #[error("unrecognized format: {0:?} (supported: .png, .jpg, .jpeg, .bmp)")]
    UnrecognizedFormat(String),

    #[error(
        "cannot determine output format for {}: specify a format or use a file extension",
        .0.display()
    )]
    MissingFormat(PathBuf),

    #[error("failed to detect screen resolution: {0}")]
    DetectionFailed(String),

    #[error("failed to write {format} image to {}: {source}", path.display())]
    EncodeFailed {
        path: PathBuf,
        format: &'static str,
        #[source]
        source: Box<SolidColorError>,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl SolidColorError {
    /// Wrap an encoder-side failure with the output path and format name.
    pub(crate) fn encode_failed(
        path: impl Into<PathBuf>,
        format: &'static str,
        source: SolidColorError,
    ) -> Self {
        SolidColorError::EncodeFailed {
            path: path.into(),
            format,
            source: Box::new(source),
        }
    }
}
