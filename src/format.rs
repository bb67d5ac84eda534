//! Output format registry.
//!
//! The format set is closed: [`ImageFormat`] names it, and a static table
//! pairs each variant with its [`FormatDescriptor`] and encode function.

use core::fmt;
use std::path::Path;

use crate::encode::{EncodeFn, EncodeRequest};
use crate::error::SolidColorError;
use crate::pixel::PixelLayout;

/// Supported output container formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

/// Static capabilities of one output format.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub format: ImageFormat,
    /// Display name, e.g. `"PNG"`.
    pub name: &'static str,
    /// Canonical extension including the dot, e.g. `".jpg"`.
    pub extension: &'static str,
    pub supports_transparency: bool,
    pub max_width: u32,
    pub max_height: u32,
    /// Largest pixel payload the container can describe, with rows rounded
    /// up to 4 bytes. `None` when only the dimensions are bounded.
    pub max_data_bytes: Option<u64>,
}

impl FormatDescriptor {
    /// Encoder handle for this format.
    pub fn encoder(&self) -> EncodeRequest {
        EncodeRequest::new(self.format)
    }

    /// Fails with [`SolidColorError::DimensionsTooLarge`] when a
    /// `width`x`height` image in `layout` cannot be stored in this format.
    /// Cheap; runs before any pixel buffer exists.
    pub(crate) fn check_size(
        &self,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<(), SolidColorError> {
        let too_large = SolidColorError::DimensionsTooLarge { width, height };
        if width > self.max_width || height > self.max_height {
            return Err(too_large);
        }
        if let Some(max) = self.max_data_bytes {
            let row = (u64::from(width) * layout.bytes_per_pixel() as u64 + 3) & !3;
            if row * u64::from(height) > max {
                return Err(too_large);
            }
        }
        Ok(())
    }
}

/// BMP stores the file size as `u32`; leave room for the V4 headers.
const BMP_MAX_DATA_BYTES: u64 = u32::MAX as u64 - 122;

pub(crate) struct Codec {
    pub(crate) descriptor: FormatDescriptor,
    pub(crate) encode: EncodeFn,
}

static CODECS: [Codec; 3] = [
    Codec {
        descriptor: FormatDescriptor {
            format: ImageFormat::Png,
            name: "PNG",
            extension: ".png",
            supports_transparency: true,
            max_width: 65535,
            max_height: 65535,
            max_data_bytes: None,
        },
        encode: crate::png::encode,
    },
    Codec {
        descriptor: FormatDescriptor {
            format: ImageFormat::Jpeg,
            name: "JPEG",
            extension: ".jpg",
            supports_transparency: false,
            max_width: 65535,
            max_height: 65535,
            max_data_bytes: None,
        },
        encode: crate::jpeg::encode,
    },
    Codec {
        descriptor: FormatDescriptor {
            format: ImageFormat::Bmp,
            name: "BMP",
            extension: ".bmp",
            supports_transparency: true,
            max_width: 65535,
            max_height: 65535,
            max_data_bytes: Some(BMP_MAX_DATA_BYTES),
        },
        encode: crate::bmp::encode,
    },
];

static EXTENSIONS: [(&str, ImageFormat); 8] = [
    ("png", ImageFormat::Png),
    (".png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    (".jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    (".jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
    (".bmp", ImageFormat::Bmp),
];

static SUPPORTED_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".bmp"];

impl ImageFormat {
    pub(crate) fn codec(self) -> &'static Codec {
        match self {
            ImageFormat::Png => &CODECS[0],
            ImageFormat::Jpeg => &CODECS[1],
            ImageFormat::Bmp => &CODECS[2],
        }
    }

    pub fn descriptor(self) -> &'static FormatDescriptor {
        &self.codec().descriptor
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a file extension, with or without the leading dot, ignoring case.
pub fn resolve_extension(ext: &str) -> Result<&'static FormatDescriptor, SolidColorError> {
    EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, format)| format.descriptor())
        .ok_or_else(|| SolidColorError::UnrecognizedFormat(ext.to_owned()))
}

/// Look up an explicitly requested format name (`png`, `jpg`, `jpeg`, `bmp`).
pub fn resolve_format_name(name: &str) -> Result<&'static FormatDescriptor, SolidColorError> {
    resolve_extension(name.trim())
}

/// Resolve the format from the extension of `path`.
pub fn format_for_path(path: &Path) -> Result<&'static FormatDescriptor, SolidColorError> {
    let ext = path
        .extension()
        .ok_or_else(|| SolidColorError::MissingFormat(path.to_path_buf()))?;
    resolve_extension(&ext.to_string_lossy())
}

/// Canonical extensions accepted for output paths.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}
