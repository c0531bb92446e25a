//! The NCS hue circle. NCS places its four elementary hues, yellow (Y), red (R), blue (B), and green
//! (G), evenly around a circle and describes every other hue as a percentage of the way from one
//! elementary hue to the next: "Y30R" is a yellow with 30% red in it. This crate represents a hue as
//! a position on a 400-unit wheel (100 units per quadrant, Y at 0) and supports the 40 hue codes that
//! fall on multiples of 10.

use std::collections::HashMap;

/// The number of units in one full turn of the hue wheel.
pub const HUE_WHEEL: u16 = 400;

/// The number of units between two neighboring hue codes.
pub const HUE_STEP: u16 = 10;

/// The four elementary hues, in wheel order.
const ELEMENTARY: [&str; 4] = ["Y", "R", "B", "G"];

lazy_static! {
    /// The 40 canonical hue codes, in wheel order: the code at index `i` is at position `i * 10`.
    pub static ref HUE_CODES: Vec<String> = {
        let mut codes = Vec::with_capacity((HUE_WHEEL / HUE_STEP) as usize);
        for (i, from) in ELEMENTARY.iter().enumerate() {
            let to = ELEMENTARY[(i + 1) % ELEMENTARY.len()];
            codes.push(from.to_string());
            for percent in (10..100).step_by(HUE_STEP as usize) {
                codes.push(format!("{}{}{}", from, percent, to));
            }
        }
        codes
    };

    static ref HUE_POSITIONS: HashMap<&'static str, u16> = HUE_CODES
        .iter()
        .enumerate()
        .map(|(i, code)| (code.as_str(), i as u16 * HUE_STEP))
        .collect();
}

/// Looks up the wheel position of a hue code, returning `None` for anything that isn't one of the 40
/// canonical codes. Lookup is case-sensitive, as NCS notation always uses capitals.
///
/// # Example
///
/// ```
/// # use ncs_palette::colors::ncshue::hue_position;
/// assert_eq!(hue_position("Y"), Some(0));
/// assert_eq!(hue_position("R90B"), Some(190));
/// assert_eq!(hue_position("G10Y"), Some(310));
/// assert_eq!(hue_position("R95B"), None);
/// ```
pub fn hue_position(code: &str) -> Option<u16> {
    HUE_POSITIONS.get(code).cloned()
}

/// The inverse of [`hue_position`]: the hue code at a given wheel position, or `None` if the position
/// is past the end of the wheel or between two codes.
pub fn hue_code(position: u16) -> Option<&'static str> {
    if position % HUE_STEP != 0 {
        return None;
    }
    HUE_CODES
        .get((position / HUE_STEP) as usize)
        .map(|code| code.as_str())
}

/// Splits a wheel position into the index of its elementary hue (0 for Y through 3 for G) and the
/// percentage of the way toward the next one.
pub(crate) fn quadrant(position: u16) -> (u16, u16) {
    let position = position % HUE_WHEEL;
    (position / 100, position % 100)
}
