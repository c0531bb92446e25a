//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes the [`NCSColor`] and its errors, and the
//! [`RGBColor`] it is displayed with. The explorer state and the terminal front-end are not included.

pub use crate::color::{RGBColor, RGBParseError};
pub use crate::colors::{NCSColor, NCSFormatError, NCSParseError};
