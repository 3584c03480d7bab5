//! Reading and writing patterns in the
//! [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) format.
//!
//! The decoder reads a pattern line by line:
//!
//! * `#P x y` or `#R x y` sets the position of the top left corner of the
//!   pattern. Other lines starting with `#` are comments.
//! * `x = m, y = n, rule = B3/S23` is the header line. The size is ignored,
//!   since the grid is already there; the rule replaces the current one.
//! * All other lines are runs of cells: `b` for dead cells, `o` for living
//!   cells, `$` for the end of a row, each optionally preceded by a run count,
//!   and `!` for the end of the pattern.

mod token;
mod write;

use crate::{
    cells::{Coord, LifeState},
    error::Error,
    grid::Grid,
    rules::Life,
};
use log::{debug, info, warn};
use std::io;

pub use token::{Tag, Token, Tokenizer};
pub use write::write;

/// The result of a successful decode.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded {
    /// The rule in effect after the pattern is read.
    ///
    /// It is the rule passed to the decoder, unless the pattern has
    /// a valid rule in its header line.
    pub rule: Life,

    /// Errors that were recovered from during the decode,
    /// e.g. [`Error::MalformedRuleDirective`].
    pub warnings: Vec<Error>,
}

/// A streaming RLE decoder that writes the pattern into a grid.
pub struct Decoder<'a> {
    /// The grid to write into.
    grid: &'a mut Grid<LifeState>,

    /// The current rule.
    rule: Life,

    /// The position of the next cell to write.
    cursor: Coord,

    /// The x-coordinate that the cursor returns to at the end of a row.
    origin_x: isize,

    /// Number of lines read so far.
    line: usize,

    /// Whether `!` is reached.
    finished: bool,

    /// Recovered errors.
    warnings: Vec<Error>,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder writing into `grid`, starting with `rule`.
    pub fn new(grid: &'a mut Grid<LifeState>, rule: Life) -> Self {
        Decoder {
            grid,
            rule,
            cursor: (0, 0),
            origin_x: 0,
            line: 0,
            finished: false,
            warnings: Vec::new(),
        }
    }

    /// Whether the end of the pattern is reached.
    ///
    /// Further lines are ignored.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Reads one line.
    ///
    /// On an error, the cells written before it stay written.
    pub fn decode_line(&mut self, line: &str) -> Result<(), Error> {
        if self.finished {
            return Ok(());
        }
        self.line += 1;

        if let Some(header) = line.strip_prefix('#') {
            if let Some(offset) = header.strip_prefix(&['P', 'R'][..]) {
                self.set_offset(offset);
            }
            Ok(())
        } else if line.starts_with('x') {
            self.read_header(line);
            Ok(())
        } else {
            self.read_runs(line)
        }
    }

    /// Finishes the decode.
    pub fn finish(self) -> Decoded {
        Decoded {
            rule: self.rule,
            warnings: self.warnings,
        }
    }

    /// Reads `x y` from a `#P` or `#R` line.
    ///
    /// Negative offsets are invalid and reset to `(0, 0)`.
    fn set_offset(&mut self, src: &str) {
        let mut numbers = src.split_whitespace().map(str::parse::<isize>);
        let (x, y) = match (numbers.next(), numbers.next()) {
            (Some(Ok(x)), Some(Ok(y))) => (x, y),
            _ => {
                warn!("Line {}: ignoring unreadable offset {:?}", self.line, src);
                return;
            }
        };
        let (x, y) = if x < 0 || y < 0 {
            debug!("Line {}: negative offset ({}, {}) reset to (0, 0)", self.line, x, y);
            (0, 0)
        } else {
            (x, y)
        };
        self.cursor = (x, y);
        self.origin_x = x;
    }

    /// Reads the header line `x = m, y = n, rule = ...`.
    ///
    /// Only the rule is used. An unreadable rule keeps the current one.
    fn read_header(&mut self, line: &str) {
        let mut rule_string = None;
        for item in line.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            match item.split_once('=') {
                Some((key, value)) if key.trim() == "rule" => rule_string = Some(value.trim()),
                _ => debug!("Line {}: ignoring {:?}", self.line, item),
            }
        }

        if let Some(rule_string) = rule_string {
            match rule_string.parse::<Life>() {
                Ok(rule) => self.rule = rule,
                Err(_) => self.malformed(rule_string),
            }
        }
    }

    fn malformed(&mut self, directive: &str) {
        warn!(
            "Line {}: malformed rule directive {:?}, keeping {}",
            self.line, directive, self.rule
        );
        self.warnings
            .push(Error::MalformedRuleDirective(directive.to_owned()));
    }

    /// Reads a line of run tokens.
    fn read_runs(&mut self, line: &str) -> Result<(), Error> {
        for token in Tokenizer::new(line) {
            match token {
                Token::Terminator => {
                    self.finished = true;
                    break;
                }
                Token::Run { len, tag } => {
                    let len = isize::try_from(len).unwrap_or(isize::MAX);
                    let (x, y) = &mut self.cursor;
                    match tag {
                        Tag::Dead => *x = x.saturating_add(len),
                        Tag::NextRow => {
                            *y = y.saturating_add(len);
                            *x = self.origin_x;
                        }
                        Tag::Alive => {
                            for _ in 0..len {
                                self.grid
                                    .set((*x, *y), LifeState::Alive)
                                    .map_err(|_| Error::OutOfBoundsWrite((*x, *y)))?;
                                *x += 1;
                            }
                        }
                    }
                }
                Token::Invalid(tag) => {
                    return Err(Error::InvalidRunToken {
                        line: self.line,
                        tag,
                    })
                }
            }
        }
        Ok(())
    }
}

/// Reads a pattern from lines of text, e.g. [`BufRead::lines`](std::io::BufRead::lines).
///
/// The pattern is written into `grid`, and the rule in effect after the
/// decode is returned, starting from `rule`.
///
/// An I/O error from `lines` stops the decode with [`Error::IoUnavailable`].
/// On any error the grid may be partially written, and the load should be
/// considered failed.
pub fn read_lines<I, L>(
    lines: I,
    grid: &mut Grid<LifeState>,
    rule: Life,
) -> Result<Decoded, Error>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    let mut decoder = Decoder::new(grid, rule);
    for line in lines {
        decoder.decode_line(line?.as_ref())?;
        if decoder.is_finished() {
            break;
        }
    }
    let decoded = decoder.finish();
    info!(
        "Read an RLE pattern with rule {} ({} warnings)",
        decoded.rule,
        decoded.warnings.len()
    );
    Ok(decoded)
}

/// Reads a pattern from a string.
///
/// See [`read_lines`].
pub fn read(src: &str, grid: &mut Grid<LifeState>, rule: Life) -> Result<Decoded, Error> {
    read_lines(src.lines().map(Ok::<_, io::Error>), grid, rule)
}
