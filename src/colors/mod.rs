//! This module contains the Natural Color System: the hue circle in [`ncshue`] and the color type
//! itself in [`ncscolor`]. For convenience, the main types are imported into this module's namespace
//! directly.
pub mod ncscolor;
pub mod ncshue;

// for convenience, use this namespace for the color objects
pub use self::ncscolor::{NCSColor, NCSFormatError, NCSParseError};
