//! The grid.

use crate::{
    cells::{CellState, Coord, NEIGHBORHOOD},
    error::Error,
};
use std::fmt::{self, Display, Formatter};

/// A fixed-size rectangular grid of cells.
///
/// The width and height are fixed at construction. All accesses are
/// bounds-checked: reading or writing outside the grid is an error,
/// never silently clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<S> {
    /// Width.
    width: usize,
    /// Height.
    height: usize,
    /// The cells, row by row.
    cells: Box<[S]>,
}

impl<S: CellState> Grid<S> {
    /// Creates a new grid filled with the default state.
    ///
    /// The number of cells must fit in an `isize`, so that every cell
    /// has valid coordinates.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositiveError);
        }
        let size = width
            .checked_mul(height)
            .filter(|&size| isize::try_from(size).is_ok())
            .ok_or(Error::GridTooLarge { width, height })?;
        Ok(Grid {
            width,
            height,
            cells: vec![S::default(); size].into_boxed_slice(),
        })
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinates are inside the grid.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The position of a cell in row-major order, if it is inside the grid.
    #[inline]
    pub(crate) fn offset(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.1 as usize * self.width + coord.0 as usize)
        } else {
            None
        }
    }

    /// Gets the state of a cell.
    pub fn get(&self, coord: Coord) -> Result<S, Error> {
        self.offset(coord)
            .map(|i| self.cells[i])
            .ok_or(Error::OutOfBounds(coord))
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, coord: Coord, state: S) -> Result<(), Error> {
        let i = self.offset(coord).ok_or(Error::OutOfBounds(coord))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Counts the neighbors of a cell in each state.
    ///
    /// Neighbors outside the grid are not counted at all.
    pub(crate) fn neighbor_counts(&self, (x, y): Coord) -> Vec<usize> {
        let mut counts = vec![0; S::ALL.len()];
        for (dx, dy) in NEIGHBORHOOD.iter() {
            if let Some(i) = self.offset((x + dx, y + dy)) {
                counts[self.cells[i].index()] += 1;
            }
        }
        counts
    }

    /// Counts the neighbors of a cell that are in the given state.
    ///
    /// Neighbors outside the grid are never counted.
    pub(crate) fn count_neighbors(&self, (x, y): Coord, state: S) -> usize {
        NEIGHBORHOOD
            .iter()
            .filter_map(|(dx, dy)| self.offset((x + dx, y + dy)))
            .filter(|&i| self.cells[i] == state)
            .count()
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: S) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Number of cells in each state, in the order of [`CellState::ALL`].
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; S::ALL.len()];
        for s in self.cells.iter() {
            counts[s.index()] += 1;
        }
        counts
    }

    /// Iterates over the rows of the grid, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.cells.chunks(self.width)
    }

    /// Iterates over all cells in row-major order, with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, S)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (((i % width) as isize, (i / width) as isize), s))
    }

    /// Mutable access to all cells in row-major order.
    pub(crate) fn cells_mut(&mut self) -> &mut [S] {
        &mut self.cells
    }

    /// Resets every cell to the default state.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|s| *s = S::default());
    }

    /// Builds a grid from cells listed in row-major order.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<S>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Displays the whole grid in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format,
    /// one line per row, using [`CellState::symbol`].
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            str.extend(row.iter().map(|s| s.symbol()));
            str.push('\n');
        }
        str
    }
}

impl<S: CellState> Display for Grid<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plaintext())
    }
}
