//! Reading patterns given as a list of living cells.
//!
//! The first line is a version comment such as `#Life 1.06`, and is skipped.
//! The rest is a list of coordinates `x y`, one living cell each.

use crate::{cells::LifeState, error::Error, grid::Grid};
use log::{info, warn};
use std::io;

/// Reads a list of living cells from lines of text.
///
/// Loading is additive: cells that are already alive stay alive.
///
/// Reading stops at the first token that is not an integer.
/// A coordinate outside the grid is an [`Error::OutOfBoundsWrite`].
pub fn read_lines<I, L>(lines: I, grid: &mut Grid<LifeState>) -> Result<usize, Error>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    let mut count = 0;
    let mut pending_x = None;

    let mut lines = lines.into_iter();
    // The version comment.
    if let Some(line) = lines.next() {
        line?;
    }

    'lines: for line in lines {
        let line = line?;
        for word in line.as_ref().split_whitespace() {
            let n = match word.parse::<isize>() {
                Ok(n) => n,
                Err(_) => {
                    warn!("Stopped reading cells at {:?}", word);
                    break 'lines;
                }
            };
            match pending_x.take() {
                None => pending_x = Some(n),
                Some(x) => {
                    grid.set((x, n), LifeState::Alive)
                        .map_err(|_| Error::OutOfBoundsWrite((x, n)))?;
                    count += 1;
                }
            }
        }
    }

    if let Some(x) = pending_x {
        warn!("Ignoring x-coordinate {} without a y-coordinate", x);
    }
    info!("Read {} living cells", count);
    Ok(count)
}

/// Reads a list of living cells from a string.
///
/// See [`read_lines`].
pub fn read(src: &str, grid: &mut Grid<LifeState>) -> Result<usize, Error> {
    read_lines(src.lines().map(Ok::<_, io::Error>), grid)
}
