//! All kinds of errors in this crate.

use crate::cells::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Unable to read the input: {0}.
    IoUnavailable(String),
    /// Malformed rule directive: {0:?}.
    MalformedRuleDirective(String),
    /// Invalid run token {tag:?} on line {line}.
    InvalidRunToken {
        /// The 1-indexed line number.
        line: usize,
        /// The unrecognized tag character.
        tag: char,
    },
    /// Unable to write a living cell at {0:?}: outside the grid.
    OutOfBoundsWrite(Coord),
    /// Unsupported pattern format: {0}.
    UnsupportedFormat(String),
    /// Cell at {0:?} is outside the grid.
    OutOfBounds(Coord),
    /// Neighbor count {0} is out of the range 0..=8.
    NeighborCountOutOfRange(usize),
    /// Width / height should be positive.
    NonPositiveError,
    /// A grid of {width} x {height} cells is too large.
    GridTooLarge {
        /// Width.
        width: usize,
        /// Height.
        height: usize,
    },
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Probability {0} is not in the range [0, 1].
    InvalidDensity(f64),
    /// Percentage {0} is not in the range 0..=100.
    InvalidRate(u32),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoUnavailable(e.to_string())
    }
}
