use crate::color::Color;
use crate::format::FormatDescriptor;

/// Pixel memory layout of a generated buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Layout for writing `color` to a format described by `descriptor`.
    ///
    /// Alpha is carried only when the format can store it and the color is
    /// not opaque; otherwise it is dropped and the buffer is RGB.
    pub fn for_target(descriptor: &FormatDescriptor, color: &Color) -> Self {
        if descriptor.supports_transparency && !color.is_opaque() {
            Self::Rgba8
        } else {
            Self::Rgb8
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels()
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba8)
    }

    /// Matching `image` crate color type.
    pub(crate) fn color_type(&self) -> image::ExtendedColorType {
        match self {
            Self::Rgb8 => image::ExtendedColorType::Rgb8,
            Self::Rgba8 => image::ExtendedColorType::Rgba8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ImageFormat;

    #[test]
    fn jpeg_never_gets_alpha() {
        let jpeg = ImageFormat::Jpeg.descriptor();
        assert_eq!(
            PixelLayout::for_target(jpeg, &Color::rgba(0, 255, 0, 10)),
            PixelLayout::Rgb8
        );
        assert_eq!(
            PixelLayout::for_target(jpeg, &Color::new(0, 255, 0)),
            PixelLayout::Rgb8
        );
    }

    #[test]
    fn alpha_formats_keep_translucency() {
        for format in [ImageFormat::Png, ImageFormat::Bmp] {
            let d = format.descriptor();
            assert_eq!(
                PixelLayout::for_target(d, &Color::rgba(0, 0, 255, 64)),
                PixelLayout::Rgba8
            );
            assert_eq!(
                PixelLayout::for_target(d, &Color::rgba(0, 0, 255, 0)),
                PixelLayout::Rgba8
            );
            assert_eq!(
                PixelLayout::for_target(d, &Color::new(0, 0, 255)),
                PixelLayout::Rgb8
            );
        }
    }

    #[test]
    fn channel_counts() {
        assert_eq!(PixelLayout::Rgb8.channels(), 3);
        assert_eq!(PixelLayout::Rgba8.channels(), 4);
        assert!(PixelLayout::Rgba8.has_alpha());
        assert!(!PixelLayout::Rgb8.has_alpha());
    }
}
