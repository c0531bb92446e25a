//! This file implements the Natural Color System, a perceptual color model built on how people
//! describe colors rather than on how screens or pigments produce them. An NCS color has three
//! attributes: a hue on the Y-R-B-G circle (see [`ncshue`](super::ncshue)), a chromaticness saying
//! how colorful it is, and a blackness saying how dark it is. The whiteness is whatever is left over,
//! so blackness and chromaticness can never add up to more than 100.
//!
//! NCS notation writes these as `BBCC-HUE`: "1050-R90B" is 10% black, 50% chromatic, with a hue 90%
//! of the way from red to blue. Following the convention of the NCS atlas, 99 is the largest value
//! either attribute can take, and it stands in for "all the room there is".
//!
//! NCS is defined by visual samples, not by a formula, so there is no exact conversion to RGB. The
//! conversion here is a smooth approximation good enough for putting swatches on a screen.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};

use super::ncshue::{hue_code, hue_position, quadrant, HUE_WHEEL};
use crate::color::RGBColor;

/// The raw units moved by one step of [`NCSColor::adjust`], on every axis.
pub const STEP_UNIT: i32 = 10;

/// The largest value blackness or chromaticness can hold. An attribute sitting at this value is
/// treated as 100 when it is adjusted and makes the other attribute yield completely.
pub const ATTRIBUTE_MAX: u8 = 99;

/// A color in the Natural Color System.
///
/// The fields are public for convenience, but the constructors and [`NCSColor::adjust`] only ever
/// produce colors where `blackness + chromaticness <= 100`, both are at most 99, and the hue is on
/// the wheel. Colors built by hand that break this are rejected by [`NCSColor::notation`].
///
/// # Example
///
/// ```
/// # use ncs_palette::prelude::*;
/// let blue: NCSColor = "1050-R90B".parse().unwrap();
/// assert_eq!((blue.blackness, blue.chromaticness, blue.hue), (10, 50, 190));
/// let darker = blue.adjust(1, 0, 0);
/// assert_eq!(darker.to_string(), "2050-R90B");
/// assert_eq!(darker.hex(), "#3F6DCC");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NCSColor {
    /// How dark the color is, from 0 to 99.
    pub blackness: u8,
    /// How colorful the color is, from 0 to 99.
    pub chromaticness: u8,
    /// The position on the 400-unit hue wheel, from 0 (Y) up to but not including 400.
    pub hue: u16,
}

/// An error in parsing NCS notation.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum NCSParseError {
    /// The string isn't shaped like `BBCC-HUE`: the dash is missing, the blackness or chromaticness
    /// isn't exactly two digits, or there is trailing junk.
    InvalidSyntax,
    /// The hue isn't one of the 40 hue codes this crate knows about.
    UnknownHue,
    /// The blackness and chromaticness add up to more than 100.
    OutOfRange,
}

impl fmt::Display for NCSParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            NCSParseError::InvalidSyntax => "expected NCS notation of the form BBCC-HUE",
            NCSParseError::UnknownHue => "unrecognized NCS hue code",
            NCSParseError::OutOfRange => "blackness and chromaticness add up to more than 100",
        };
        f.write_str(msg)
    }
}

impl Error for NCSParseError {}

/// A color that can't be written in NCS notation. [`NCSColor::adjust`] never produces one of these,
/// so seeing this error means some color was built or modified by hand without respecting the
/// model's limits.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum NCSFormatError {
    /// The hue is past the end of the wheel or between two hue codes.
    HueOffWheel(u16),
    /// Blackness or chromaticness is above 99, or the two add up to more than 100.
    OutOfGamut {
        /// The offending blackness.
        blackness: u8,
        /// The offending chromaticness.
        chromaticness: u8,
    },
}

impl fmt::Display for NCSFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NCSFormatError::HueOffWheel(hue) => write!(f, "hue {} has no NCS hue code", hue),
            NCSFormatError::OutOfGamut {
                blackness,
                chromaticness,
            } => write!(
                f,
                "blackness {} and chromaticness {} are outside the NCS color solid",
                blackness, chromaticness
            ),
        }
    }
}

impl Error for NCSFormatError {}

lazy_static! {
    static ref NOTATION_RE: Regex = Regex::new(r"^([0-9]{2})([0-9]{2})-([A-Z0-9]+)$").unwrap();
}

/// Applies one blackness or chromaticness step to `value`, given the live value of the attribute it
/// shares the color solid with. The two attributes follow the same rule with their roles swapped.
fn adjust_attribute(value: u8, other: u8, steps: i32) -> u8 {
    let start = if value == ATTRIBUTE_MAX {
        100
    } else {
        i64::from(value)
    };
    let moved = start + i64::from(steps) * i64::from(STEP_UNIT);
    let clamped = if moved >= 100 {
        ATTRIBUTE_MAX
    } else if moved < 0 {
        0
    } else {
        moved as u8
    };
    let room = 100u8.saturating_sub(other);
    if clamped > room {
        // a saturated competitor takes everything, rather than leaving a sliver of 1
        if other == ATTRIBUTE_MAX {
            0
        } else {
            room
        }
    } else {
        clamped
    }
}

impl NCSColor {
    /// Builds a color from its three attributes, checking that it can be written in NCS notation.
    pub fn new(blackness: u8, chromaticness: u8, hue: u16) -> Result<NCSColor, NCSFormatError> {
        let color = NCSColor {
            blackness,
            chromaticness,
            hue,
        };
        color.check()?;
        Ok(color)
    }

    /// The whiteness, which is whatever blackness and chromaticness leave over.
    pub fn whiteness(&self) -> u8 {
        100u8.saturating_sub(self.blackness.saturating_add(self.chromaticness))
    }

    fn check(&self) -> Result<(), NCSFormatError> {
        let in_gamut = self.blackness <= ATTRIBUTE_MAX
            && self.chromaticness <= ATTRIBUTE_MAX
            && u16::from(self.blackness) + u16::from(self.chromaticness) <= 100;
        if !in_gamut {
            return Err(NCSFormatError::OutOfGamut {
                blackness: self.blackness,
                chromaticness: self.chromaticness,
            });
        }
        if hue_code(self.hue).is_none() {
            return Err(NCSFormatError::HueOffWheel(self.hue));
        }
        Ok(())
    }

    /// Writes the color in canonical NCS notation, e.g. "1050-R90B". Fails only for colors that
    /// break the model's limits, which indicates a bug wherever the color came from.
    pub fn notation(&self) -> Result<String, NCSFormatError> {
        self.check()?;
        // check() has already confirmed the hue code exists
        let code = hue_code(self.hue).ok_or(NCSFormatError::HueOffWheel(self.hue))?;
        Ok(format!(
            "{:02}{:02}-{}",
            self.blackness, self.chromaticness, code
        ))
    }

    /// Moves the color a number of steps along each axis, where one step is 10 units. This never
    /// fails: blackness and chromaticness are clamped to the color solid, and the hue wraps around.
    ///
    /// The axes are applied in order (blackness, then chromaticness, then hue), and each one sees
    /// the result of the ones before it. An axis with 0 steps is left completely alone.
    ///
    /// Clamping follows the NCS atlas: an attribute at 99 counts as 100 before moving, anything that
    /// reaches 100 becomes 99, and if the result doesn't fit next to the other attribute it is cut
    /// down to fit, or to 0 if the other attribute is at 99.
    ///
    /// # Example
    ///
    /// ```
    /// # use ncs_palette::prelude::*;
    /// let vivid: NCSColor = "0099-Y".parse().unwrap();
    /// // there's no room for any black next to a saturated chromaticness
    /// assert_eq!(vivid.adjust(1, 0, 0), vivid);
    /// // going back down from 99 moves a full step from 100
    /// assert_eq!(vivid.adjust(0, -1, 0).chromaticness, 90);
    /// // 40 hue steps is a full turn
    /// assert_eq!(vivid.adjust(0, 0, 40), vivid);
    /// assert_eq!(vivid.adjust(0, 0, -1).to_string(), "0099-G90Y");
    /// ```
    pub fn adjust(&self, blackness: i32, chromaticness: i32, hue: i32) -> NCSColor {
        let mut color = *self;
        if blackness != 0 {
            color.blackness = adjust_attribute(color.blackness, color.chromaticness, blackness);
        }
        if chromaticness != 0 {
            color.chromaticness =
                adjust_attribute(color.chromaticness, color.blackness, chromaticness);
        }
        if hue != 0 {
            let wheel = i64::from(HUE_WHEEL);
            let moved = i64::from(color.hue) + i64::from(hue) * i64::from(STEP_UNIT);
            color.hue = moved.rem_euclid(wheel) as u16;
        }
        color
    }

    /// An RGB approximation of the color as a hex code, e.g. "#467BE6".
    pub fn hex(&self) -> String {
        RGBColor::from(*self).to_string()
    }
}

impl fmt::Display for NCSColor {
    /// Writes the canonical notation. Colors outside the model make formatting fail, so use
    /// [`NCSColor::notation`] when the color might have been built by hand.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.notation() {
            Ok(notation) => f.write_str(&notation),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl FromStr for NCSColor {
    type Err = NCSParseError;

    fn from_str(s: &str) -> Result<NCSColor, NCSParseError> {
        let caps = NOTATION_RE.captures(s).ok_or(NCSParseError::InvalidSyntax)?;
        // both fields are exactly two ASCII digits, so these can't fail
        let blackness: u8 = caps[1].parse().map_err(|_| NCSParseError::InvalidSyntax)?;
        let chromaticness: u8 = caps[2].parse().map_err(|_| NCSParseError::InvalidSyntax)?;
        let hue = hue_position(&caps[3]).ok_or(NCSParseError::UnknownHue)?;
        if u16::from(blackness) + u16::from(chromaticness) > 100 {
            return Err(NCSParseError::OutOfRange);
        }
        Ok(NCSColor {
            blackness,
            chromaticness,
            hue,
        })
    }
}

impl Serialize for NCSColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let notation = self.notation().map_err(ser::Error::custom)?;
        serializer.serialize_str(&notation)
    }
}

impl<'de> Deserialize<'de> for NCSColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<NCSColor, D::Error> {
        let notation = String::deserialize(deserializer)?;
        notation.parse().map_err(de::Error::custom)
    }
}

/// The fully chromatic RGB color at a hue position, before any blackness or whiteness is mixed in.
/// Each component follows a circular arc between the elementary hues, chosen so the wheel stays
/// continuous all the way around.
fn elementary_rgb(hue: u16) -> (f64, f64, f64) {
    let (q, p) = quadrant(hue);
    let p = f64::from(p);
    let arc = |radius_sq: f64, f: f64| (radius_sq - f * f).max(0.).sqrt();

    let r = match q {
        0 if p <= 60. => 1.,
        0 => (arc(14884., p - 60.) - 22.) / 100.,
        1 if p <= 80. => (arc(14884., p + 40.) - 22.) / 100.,
        1 | 2 => 0.,
        _ => (arc(33800., p - 170.) - 70.) / 100.,
    };

    let b = match q {
        0 if p <= 80. => 0.,
        0 => (104. - arc(11236., (p - 80.) + 20.5)) / 100.,
        1 if p <= 60. => (104. - arc(11236., (p + 20.) + 20.5)) / 100.,
        1 => (arc(10000., (p - 60.) - 60.) - 10.) / 100.,
        2 if p <= 80. => (arc(10000., (p + 40.) - 60.) - 10.) / 100.,
        2 => (122. - arc(19881., (p - 80.) - 131.)) / 100.,
        _ if p <= 40. => (122. - arc(19881., (p + 20.) - 131.)) / 100.,
        _ => 0.,
    };

    let g = match q {
        0 => (85. - 17. / 20. * p) / 100.,
        1 if p <= 60. => 0.,
        1 => (67.5 - arc(5776., (p - 60.) + 35.)) / 100.,
        2 if p <= 60. => (6.5 + arc(7044.5, p - 68.5)) / 100.,
        2 => 0.9,
        _ if p <= 60. => 0.9,
        _ => (90. - (p - 60.) / 8.) / 100.,
    };

    (r, g, b)
}

impl From<NCSColor> for RGBColor {
    /// Approximates an NCS color in sRGB. The elementary color for the hue is pulled toward gray as
    /// chromaticness drops, brightened until its largest component is 1, and then darkened by the
    /// blackness.
    fn from(ncs: NCSColor) -> RGBColor {
        let (r1, g1, b1) = elementary_rgb(ncs.hue);
        let gray = (r1 + g1 + b1) / 3.;
        let keep = (100. - f64::from(ncs.chromaticness)) / 100.;
        let desaturate = |c: f64| (gray - c) * keep + c;
        let (r2, g2, b2) = (desaturate(r1), desaturate(g1), desaturate(b1));
        let max = r2.max(g2).max(b2);
        let scale = (100. - f64::from(ncs.blackness)) / 100. / max;
        RGBColor {
            r: num::clamp(r2 * scale, 0., 1.),
            g: num::clamp(g2 * scale, 0., 1.),
            b: num::clamp(b2 * scale, 0., 1.),
        }
    }
}
