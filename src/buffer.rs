#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::color::Color;
use crate::error::SolidColorError;
use crate::pixel::PixelLayout;
use crate::resolution::Resolution;

/// A packed, row-major pixel buffer with interleaved channels and no row padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl PixelBuffer {
    /// Fill a `resolution`-sized buffer with `color`.
    ///
    /// Every pixel receives the same `[R, G, B]` or `[R, G, B, A]` bytes
    /// depending on `layout`; alpha is dropped for [`PixelLayout::Rgb8`].
    /// The buffer is exactly `width * height * channels` bytes long.
    ///
    /// Fails with [`SolidColorError::DimensionsTooLarge`] only when that
    /// length does not fit in `usize` on this target.
    pub fn fill(
        color: Color,
        resolution: Resolution,
        layout: PixelLayout,
    ) -> Result<Self, SolidColorError> {
        let (width, height) = (resolution.width(), resolution.height());
        let count = usize::try_from(resolution.pixel_count())
            .ok()
            .filter(|count| {
                count
                    .checked_mul(layout.channels())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;

        let rgba = color.to_bytes();
        let pixels = rgba[..layout.channels()].repeat(count);

        Ok(Self {
            pixels,
            width,
            height,
            layout,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.layout.bytes_per_pixel()
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`SolidColorError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::BufferPixel>(&self) -> Result<&[P], SolidColorError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(SolidColorError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`SolidColorError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::BufferPixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, SolidColorError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Typed pixels that a [`PixelBuffer`] can be viewed as.
#[cfg(feature = "rgb")]
pub trait BufferPixel: Copy {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl BufferPixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl BufferPixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
