//! NCS Palette is a small library and terminal program for exploring the Natural Color System. NCS
//! describes colors the way people see them: how dark, how colorful, and which way around the hue
//! circle. Those three attributes make good directions to walk in, so this crate lets you start from
//! any NCS color and step through its neighbors one key press at a time, with a grid of swatches
//! showing where each step would lead.
//!
//! The interesting part lives in [`colors::NCSColor`]: parsing and writing NCS notation, and the
//! bounded adjustment that keeps every step inside the NCS color solid. The [`explorer`] module turns
//! key presses into steps, and [`terminal`] draws the result.

#![doc(html_root_url = "https://docs.rs/ncs-palette/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate termion;

#[cfg(test)]
extern crate float_cmp;

pub mod color;
pub mod colors;
pub mod explorer;
pub mod prelude;
pub mod terminal;
