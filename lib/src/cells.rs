//! Cells in the cellular automaton.

use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are 0-indexed,
/// with `(0, 0)` at the top left corner of the grid.
///
/// They are signed, so that a position left of or above the grid
/// can be reported instead of wrapped.
pub type Coord = (isize, isize);

/// The relative positions of the eight neighbors of a cell.
///
/// ```text
/// 012
/// 7.3
/// 654
/// ```
pub(crate) const NEIGHBORHOOD: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A state that a cell of a [`Grid`](crate::Grid) can hold.
///
/// The default state is the background: a new grid is filled with it,
/// and positions outside the grid are treated as if they held it.
pub trait CellState: Copy + Debug + Default + Eq + 'static {
    /// All the states, in the order of their indices.
    const ALL: &'static [Self];

    /// The index of the state in [`ALL`](Self::ALL).
    fn index(self) -> usize;

    /// The character used for this state in a plaintext dump.
    fn symbol(self) -> char;

    /// A human-readable name of the state.
    fn name(self) -> &'static str;
}

/// Possible states of a cell in a Life-like rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifeState {
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

impl CellState for LifeState {
    const ALL: &'static [Self] = &[LifeState::Dead, LifeState::Alive];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> char {
        match self {
            LifeState::Dead => '.',
            LifeState::Alive => 'o',
        }
    }

    fn name(self) -> &'static str {
        match self {
            LifeState::Dead => "dead",
            LifeState::Alive => "alive",
        }
    }
}

/// Possible states of a cell in the grass and sheep [`Ecosystem`](crate::rules::Ecosystem).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EcoState {
    /// Nothing grows here.
    #[default]
    Empty,
    /// Grass, the food of the sheep.
    Grass,
    /// A sheep.
    Sheep,
}

impl CellState for EcoState {
    const ALL: &'static [Self] = &[EcoState::Empty, EcoState::Grass, EcoState::Sheep];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> char {
        match self {
            EcoState::Empty => '.',
            EcoState::Grass => 'w',
            EcoState::Sheep => '#',
        }
    }

    fn name(self) -> &'static str {
        match self {
            EcoState::Empty => "none",
            EcoState::Grass => "grass",
            EcoState::Sheep => "sheep",
        }
    }
}
