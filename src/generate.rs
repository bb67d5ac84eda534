//! The generate pipeline: resolve format and size, fill, encode.

use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::encode::EncodeRequest;
use crate::error::SolidColorError;
use crate::format::{self, FormatDescriptor};
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::resolution::Resolution;
use crate::screen::{ScreenSource, SystemScreen};

/// Where the output size comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionSpec {
    Fixed(Resolution),
    /// Ask the screen source; fall back to [`Resolution::FULL_HD`] with a
    /// warning when detection fails.
    #[default]
    Detect,
}

impl From<Resolution> for ResolutionSpec {
    fn from(resolution: Resolution) -> Self {
        ResolutionSpec::Fixed(resolution)
    }
}

/// What was written by [`GenerateRequest::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub resolution: Resolution,
    pub format: &'static FormatDescriptor,
    pub layout: PixelLayout,
}

/// Builder for generating one solid color image file.
///
/// ```no_run
/// use solidcolor::{Color, GenerateRequest, Resolution};
///
/// let written = GenerateRequest::new(Color::from_hex("#FF573380")?, "overlay.png")
///     .with_resolution(Resolution::QHD)
///     .generate()?;
/// println!("wrote {}", written.path.display());
/// # Ok::<(), solidcolor::SolidColorError>(())
/// ```
pub struct GenerateRequest<'a> {
    color: Color,
    output: PathBuf,
    resolution: ResolutionSpec,
    format: Option<String>,
    quality: Option<i32>,
    limits: Option<&'a Limits>,
    screen: &'a dyn ScreenSource,
}

impl<'a> GenerateRequest<'a> {
    /// Request for `color` written to `output`, with the format taken from
    /// the output extension and the size detected from the screen.
    pub fn new(color: Color, output: impl Into<PathBuf>) -> Self {
        Self {
            color,
            output: output.into(),
            resolution: ResolutionSpec::Detect,
            format: None,
            quality: None,
            limits: None,
            screen: &SystemScreen,
        }
    }

    pub fn with_resolution(mut self, resolution: impl Into<ResolutionSpec>) -> Self {
        self.resolution = resolution.into();
        self
    }

    /// Explicit format name (`png`, `jpg`, `jpeg`, `bmp`, optionally with a
    /// leading dot). Takes precedence over the output extension.
    pub fn with_format(mut self, name: impl Into<String>) -> Self {
        self.format = Some(name.into());
        self
    }

    /// JPEG quality, clamped to `0..=100`. Ignored for other formats.
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Screen source used by [`ResolutionSpec::Detect`].
    pub fn with_screen(mut self, screen: &'a dyn ScreenSource) -> Self {
        self.screen = screen;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Format this request will write, without touching the filesystem.
    pub fn resolve_format(&self) -> Result<&'static FormatDescriptor, SolidColorError> {
        match &self.format {
            Some(name) => format::resolve_format_name(name),
            None => format::format_for_path(&self.output),
        }
    }

    /// Size this request will write. Detection failure is not an error.
    pub fn resolve_resolution(&self) -> Resolution {
        match self.resolution {
            ResolutionSpec::Fixed(resolution) => resolution,
            ResolutionSpec::Detect => match Resolution::detect(self.screen) {
                Ok(resolution) => {
                    log::info!("detected screen resolution: {resolution}");
                    resolution
                }
                Err(e) => {
                    log::warn!("{e}; using Full HD ({})", Resolution::FULL_HD);
                    Resolution::FULL_HD
                }
            },
        }
    }

    /// Run the pipeline and write the file.
    pub fn generate(&self) -> Result<Generated, SolidColorError> {
        let descriptor = self.resolve_format()?;
        let resolution = self.resolve_resolution();

        let layout = PixelLayout::for_target(descriptor, &self.color);
        descriptor.check_size(resolution.width(), resolution.height(), layout)?;
        if let Some(limits) = self.limits {
            limits.check(resolution, layout)?;
        }

        if !self.color.is_opaque() && !layout.has_alpha() {
            log::debug!(
                "{} cannot store alpha; dropping alpha {} of {}",
                descriptor.name,
                self.color.alpha(),
                self.color
            );
        }

        let buffer = PixelBuffer::fill(self.color, resolution, layout)?;

        let mut encoder = EncodeRequest::new(descriptor.format);
        if let Some(quality) = self.quality {
            encoder = encoder.with_quality(quality);
        }
        encoder.write_file(&self.output, &buffer)?;

        log::debug!("wrote {}", self.output.display());
        Ok(Generated {
            path: self.output.clone(),
            resolution,
            format: descriptor,
            layout,
        })
    }
}
