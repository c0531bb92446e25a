//! This file defines [`RGBColor`], the display-side color of this crate. Every NCS color that gets
//! painted on a screen is first approximated by one of these, and the `#RRGGBB` string that labels a
//! swatch comes from its [`Display`](std::fmt::Display) implementation.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

/// A color in the sRGB space, as used by basically every monitor and terminal. Components are stored
/// as floating points so that conversions can stay precise until the last moment: rounding to the
/// familiar 0-255 integers only happens in [`RGBColor::int_rgb_tup`] and when printing.
///
/// # Example
///
/// ```
/// # use ncs_palette::prelude::*;
/// let lavender = RGBColor{r: 0.43137, g: 0.4, b: 0.8};
/// assert_eq!(lavender.to_string(), "#6E66CC");
/// let parsed: RGBColor = "#6e66cc".parse().unwrap();
/// assert_eq!(parsed.int_rgb_tup(), (110, 102, 204));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component. Ranges from 0 to 1 for displayable colors.
    pub r: f64,
    /// The green component. Ranges from 0 to 1 for displayable colors.
    pub g: f64,
    /// The blue component. Ranges from 0 to 1 for displayable colors.
    pub b: f64,
}

impl RGBColor {
    /// Gets an 8-byte version of the color, clamping anything out of range and rounding to the
    /// nearest integer.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        let to_byte = |c: f64| (num::clamp(c, 0., 1.) * 255.).round() as u8;
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Relative brightness in the range 0-1, using the Rec. 709 weights on the (gamma-encoded)
    /// components. Good enough for picking a readable text color, nothing more.
    pub fn brightness(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
        }
    }
}

impl fmt::Display for RGBColor {
    /// Prints the color as an uppercase hex code, e.g. "#FFDB10".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.int_rgb_tup();
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// An error in parsing a hex code into an [`RGBColor`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string was not of the form `#RGB` or `#RRGGBB`.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "invalid hex code syntax"),
        }
    }
}

impl Error for RGBParseError {}

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    /// Parses `#RRGGBB` or the shorthand `#RGB`, in either case.
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        let caps = HEX_RE.captures(s).ok_or(RGBParseError::InvalidHexSyntax)?;
        let digits = &caps[1];
        // shorthand doubles every digit: #ABC is #AABBCC
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let byte = |i: usize| {
            u8::from_str_radix(&full[i..i + 2], 16).map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor::from((byte(0)?, byte(2)?, byte(4)?)))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_printing() {
        assert_eq!(RGBColor::from((255, 219, 16)).to_string(), "#FFDB10");
        assert_eq!(RGBColor::from((0, 0, 0)).to_string(), "#000000");
        // out-of-gamut values are clamped, not wrapped
        let wild = RGBColor{r: 1.3, g: -0.2, b: 0.5};
        assert_eq!(wild.to_string(), "#FF0080");
    }

    #[test]
    fn test_hex_parsing() {
        let full: RGBColor = "#467BE6".parse().unwrap();
        assert_eq!(full.int_rgb_tup(), (0x46, 0x7B, 0xE6));
        let short: RGBColor = "#fa0".parse().unwrap();
        assert_eq!(short.to_string(), "#FFAA00");
        assert_eq!("467BE6".parse::<RGBColor>(), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!("#467BE".parse::<RGBColor>(), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!("#GGGGGG".parse::<RGBColor>(), Err(RGBParseError::InvalidHexSyntax));
    }

    #[test]
    fn test_deserialize_components() {
        use serde::de::value::{Error as ValueError, MapDeserializer};
        use serde::Deserialize;
        let fields = vec![("r", 0.5), ("g", 0.25), ("b", 1.0)];
        let de: MapDeserializer<_, ValueError> = MapDeserializer::new(fields.into_iter());
        let color = RGBColor::deserialize(de).unwrap();
        assert_eq!(color, RGBColor{r: 0.5, g: 0.25, b: 1.0});
        assert_eq!(color.to_string(), "#8040FF");
    }

    #[test]
    fn test_brightness_ordering() {
        let white = RGBColor::from((255, 255, 255));
        let yellow = RGBColor::from((255, 255, 0));
        let blue = RGBColor::from((0, 0, 255));
        assert!(white.brightness() > yellow.brightness());
        assert!(yellow.brightness() > blue.brightness());
    }
}
