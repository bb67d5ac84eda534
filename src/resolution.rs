//! Validated image dimensions, presets and `WIDTHxHEIGHT` parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::SolidColorError;
use crate::screen::{ScreenSource, SystemScreen};

/// Image width and height, each in `MIN_DIMENSION..=MAX_DIMENSION`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub const MIN_DIMENSION: u32 = 1;
    pub const MAX_DIMENSION: u32 = 65535;

    /// 1280x720
    pub const HD: Resolution = Resolution::preset(1280, 720);
    /// 1920x1080
    pub const FULL_HD: Resolution = Resolution::preset(1920, 1080);
    /// 2560x1440
    pub const QHD: Resolution = Resolution::preset(2560, 1440);
    /// 3840x2160
    pub const UHD_4K: Resolution = Resolution::preset(3840, 2160);

    const fn preset(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fails with [`SolidColorError::InvalidDimensions`] unless both dimensions
    /// are within range. Out-of-range values are never clamped.
    pub fn new(width: u32, height: u32) -> Result<Self, SolidColorError> {
        if !Self::is_valid(width, height) {
            return Err(SolidColorError::InvalidDimensions(format!(
                "{width}x{height} is outside {}..={} in at least one dimension",
                Self::MIN_DIMENSION,
                Self::MAX_DIMENSION
            )));
        }
        Ok(Self { width, height })
    }

    pub fn is_valid(width: u32, height: u32) -> bool {
        let range = Self::MIN_DIMENSION..=Self::MAX_DIMENSION;
        range.contains(&width) && range.contains(&height)
    }

    /// Query a screen source. A failed query, or a reported size outside the
    /// valid range, is [`SolidColorError::DetectionFailed`].
    pub fn detect(source: &dyn ScreenSource) -> Result<Self, SolidColorError> {
        let (width, height) = source.detect().map_err(|e| match e {
            SolidColorError::DetectionFailed(_) => e,
            other => SolidColorError::DetectionFailed(other.to_string()),
        })?;
        Self::new(width, height).map_err(|_| {
            SolidColorError::DetectionFailed(format!(
                "screen reported unusable size {width}x{height}"
            ))
        })
    }

    /// Query the platform screen.
    pub fn detect_screen() -> Result<Self, SolidColorError> {
        Self::detect(&SystemScreen)
    }

    /// Query a screen source, silently falling back to [`Resolution::FULL_HD`].
    pub fn detect_or_full_hd(source: &dyn ScreenSource) -> Self {
        Self::detect(source).unwrap_or(Self::FULL_HD)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`, wide enough for 65535x65535.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width and height reduced by their greatest common divisor, e.g. `"16:9"`.
    pub fn aspect_ratio(&self) -> String {
        let divisor = gcd(self.width, self.height);
        format!("{}:{}", self.width / divisor, self.height / divisor)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = SolidColorError;

    /// Parse `WIDTHxHEIGHT` (`x` or `X`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (w, h) = trimmed
            .split_once(['x', 'X'])
            .ok_or_else(|| malformed(s))?;
        let width = w.trim().parse::<u32>().map_err(|_| malformed(s))?;
        let height = h.trim().parse::<u32>().map_err(|_| malformed(s))?;
        Self::new(width, height)
    }
}

fn malformed(s: &str) -> SolidColorError {
    SolidColorError::InvalidDimensions(format!(
        "{s:?} is not of the form WIDTHxHEIGHT (e.g. 1920x1080)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for (w, h) in [(1, 1), (1, 65535), (65535, 1), (65535, 65535), (800, 600)] {
            let r = Resolution::new(w, h).unwrap();
            assert_eq!(r.to_string(), format!("{w}x{h}"));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        for (w, h) in [(0, 100), (100, 70000), (0, 0), (65536, 1), (u32::MAX, 10)] {
            match Resolution::new(w, h) {
                Err(SolidColorError::InvalidDimensions(_)) => {}
                other => panic!("expected InvalidDimensions for {w}x{h}, got {other:?}"),
            }
        }
    }

    #[test]
    fn aspect_ratios() {
        assert_eq!(Resolution::new(1920, 1080).unwrap().aspect_ratio(), "16:9");
        assert_eq!(Resolution::new(800, 600).unwrap().aspect_ratio(), "4:3");
        assert_eq!(Resolution::new(100, 100).unwrap().aspect_ratio(), "1:1");
        assert_eq!(Resolution::new(7, 3).unwrap().aspect_ratio(), "7:3");
        assert_eq!(Resolution::UHD_4K.aspect_ratio(), "16:9");
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        let max = Resolution::new(65535, 65535).unwrap();
        assert_eq!(max.pixel_count(), 4_294_836_225);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            Resolution::HD,
            Resolution::FULL_HD,
            Resolution::QHD,
            Resolution::UHD_4K,
        ] {
            assert!(Resolution::is_valid(preset.width(), preset.height()));
        }
        assert_eq!(Resolution::QHD.to_string(), "2560x1440");
    }

    #[test]
    fn parses_width_x_height() {
        assert_eq!(
            "1920x1080".parse::<Resolution>().unwrap(),
            Resolution::FULL_HD
        );
        assert_eq!(" 800X600 ".parse::<Resolution>().unwrap().width(), 800);
        for bad in ["", "1920", "x1080", "1920x", "axb", "1920x1080x2", "-1x5", "0x10", "10x99999"] {
            match bad.parse::<Resolution>() {
                Err(SolidColorError::InvalidDimensions(_)) => {}
                other => panic!("expected InvalidDimensions for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn detection_uses_source_and_validates() {
        let ok = || -> Result<(u32, u32), SolidColorError> { Ok((2560, 1600)) };
        assert_eq!(Resolution::detect(&ok).unwrap().to_string(), "2560x1600");

        let zero = || -> Result<(u32, u32), SolidColorError> { Ok((0, 1080)) };
        assert!(matches!(
            Resolution::detect(&zero),
            Err(SolidColorError::DetectionFailed(_))
        ));
    }

    #[test]
    fn detect_or_full_hd_falls_back_silently() {
        let headless = || -> Result<(u32, u32), SolidColorError> {
            Err(SolidColorError::DetectionFailed("no display".into()))
        };
        assert_eq!(Resolution::detect_or_full_hd(&headless), Resolution::FULL_HD);
    }
}
