//! RGBA color value with hex parsing and formatting.

use core::fmt;
use core::str::FromStr;

use crate::error::SolidColorError;

/// An 8-bit-per-channel RGBA color.
///
/// Alpha defaults to 255 (opaque). The channel type bounds every component to
/// `0..=255`, so the numeric constructors cannot fail; [`Color::from_hex`]
/// validates its input completely before producing a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Color {
    /// Opaque color from red, green and blue.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Color with an explicit alpha channel.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, any case).
    ///
    /// Shorthand digits are doubled, so `"F0A"` is the same color as `"FF00AA"`.
    pub fn from_hex(text: &str) -> Result<Self, SolidColorError> {
        let digits = text.strip_prefix('#').unwrap_or(text);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SolidColorError::InvalidColorFormat(format!(
                "{text:?} contains non-hex character {bad:?}"
            )));
        }

        // All characters are ASCII from here on, so byte indexing is safe.
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => Ok(Self::new(
                nibble(bytes[0]) * 0x11,
                nibble(bytes[1]) * 0x11,
                nibble(bytes[2]) * 0x11,
            )),
            6 => Ok(Self::new(
                pair(bytes[0], bytes[1]),
                pair(bytes[2], bytes[3]),
                pair(bytes[4], bytes[5]),
            )),
            8 => Ok(Self::rgba(
                pair(bytes[0], bytes[1]),
                pair(bytes[2], bytes[3]),
                pair(bytes[4], bytes[5]),
                pair(bytes[6], bytes[7]),
            )),
            n => Err(SolidColorError::InvalidColorFormat(format!(
                "{text:?} has {n} hex digits, expected 3, 6 or 8 (optionally with #)"
            ))),
        }
    }

    /// Uppercase `#RRGGBB`, or `#RRGGBBAA` when `include_alpha` is set.
    pub fn to_hex(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue, self.alpha
            )
        } else {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_red(&mut self, red: u8) {
        self.red = red;
    }

    pub fn set_green(&mut self, green: u8) {
        self.green = green;
    }

    pub fn set_blue(&mut self, blue: u8) {
        self.blue = blue;
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Alpha is 255.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }

    /// Alpha is 0. Partially transparent colors are neither opaque nor transparent.
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }

    /// Channels in R, G, B, A order.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Drop alpha.
    #[cfg(feature = "rgb")]
    pub fn to_rgb8(&self) -> rgb::RGB8 {
        rgb::RGB8::new(self.red, self.green, self.blue)
    }
}

fn nibble(digit: u8) -> u8 {
    // Callers validate the digit first.
    char::from(digit).to_digit(16).map_or(0, |d| d as u8)
}

fn pair(hi: u8, lo: u8) -> u8 {
    (nibble(hi) << 4) | nibble(lo)
}

impl FromStr for Color {
    type Err = SolidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    /// Hex form, with alpha digits only when the color is not opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(!self.is_opaque()))
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGBA8 {
    fn from(c: Color) -> Self {
        rgb::RGBA8::new(c.red, c.green, c.blue, c.alpha)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Color {
    fn from(px: rgb::RGBA8) -> Self {
        Color::rgba(px.r, px.g, px.b, px.a)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(px: rgb::RGB8) -> Self {
        Color::new(px.r, px.g, px.b)
    }
}
