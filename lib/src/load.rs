//! Loading a pattern in any supported format.

use crate::{
    cells::LifeState,
    error::Error,
    grid::Grid,
    lif,
    rle::{self, Decoded},
    rules::Life,
};
use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported pattern formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    /// [RLE](https://conwaylife.com/wiki/Run_Length_Encoded), see [`rle`].
    Rle,
    /// A list of living cells, see [`lif`].
    Lif,
}

impl Format {
    /// Chooses the format from the extension of a file name, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        path.extension()
            .and_then(OsStr::to_str)
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rle" => Ok(Format::Rle),
            "lif" => Ok(Format::Lif),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Rle => "rle",
            Format::Lif => "lif",
        };
        f.write_str(s)
    }
}

/// Loads a pattern from a reader into `grid`.
///
/// Returns the rule in effect after the load, starting from `rule`.
/// Only RLE patterns can change the rule.
pub fn load<R: BufRead>(
    reader: R,
    format: Format,
    grid: &mut Grid<LifeState>,
    rule: Life,
) -> Result<Decoded, Error> {
    match format {
        Format::Rle => rle::read_lines(reader.lines(), grid, rule),
        Format::Lif => {
            lif::read_lines(reader.lines(), grid)?;
            Ok(Decoded {
                rule,
                warnings: Vec::new(),
            })
        }
    }
}

/// Loads a pattern from a file into `grid`.
///
/// The format is chosen by [`Format::from_path`].
pub fn load_file<P: AsRef<Path>>(
    path: P,
    grid: &mut Grid<LifeState>,
    rule: Life,
) -> Result<Decoded, Error> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let file = File::open(path)
        .map_err(|e| Error::IoUnavailable(format!("{}: {}", path.display(), e)))?;
    load(BufReader::new(file), format, grid, rule)
}
