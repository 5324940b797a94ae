//! Decoder for splice drum machine pattern files.
//!
//! A splice file holds the hardware version a pattern was saved with, its
//! tempo, and a list of instrument tracks with a 16-step grid each. Use
//! [`decode`] on a byte slice or [`decode_file`] on a path, then print the
//! resulting [`Pattern`] for its canonical text form.

#![forbid(unsafe_code)]

mod consts;
mod decoder;
mod errors;
mod pattern;

pub use consts::NUM_STEPS;
pub use decoder::{decode, decode_file};
pub use errors::{Error, FormatError};
pub use pattern::{Pattern, Step, Track};
