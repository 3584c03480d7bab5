//! A grass and sheep ecosystem.
//!
//! Each cell is empty, grass or a sheep:
//!
//! * A sheep dies if none of its eight neighbors is grass. Otherwise it
//!   survives and gives birth to a lamb on a random neighboring position,
//!   unless a sheep is already there.
//! * An empty cell grows grass if enough of its neighbors are grass,
//!   and otherwise still has a small chance to grow grass.
//! * Grass stays grass, unless a lamb is born on it.

use crate::{
    cells::{CellState, Coord, EcoState, NEIGHBORHOOD},
    error::Error,
    grid::Grid,
    rules::Rule,
};
use rand::{seq::SliceRandom, Rng};
use std::fmt::{self, Display, Formatter};

/// The grass and sheep ecosystem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ecosystem {
    /// An empty cell with at least this many grass neighbors grows grass.
    grass_threshold: usize,
    /// The probability that an empty cell grows grass anyway.
    sprout_chance: f64,
}

impl Ecosystem {
    /// Constructs a new ecosystem.
    pub fn new(grass_threshold: usize, sprout_chance: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&sprout_chance) {
            return Err(Error::InvalidDensity(sprout_chance));
        }
        Ok(Ecosystem {
            grass_threshold,
            sprout_chance,
        })
    }

    /// An empty cell with at least this many grass neighbors grows grass.
    pub fn grass_threshold(&self) -> usize {
        self.grass_threshold
    }

    /// The probability that an empty cell grows grass without enough grass around.
    pub fn sprout_chance(&self) -> f64 {
        self.sprout_chance
    }

    /// Chooses where the lamb of the sheep at `coord` is born,
    /// uniformly among the neighboring positions inside the grid.
    fn birthplace<G: Rng + ?Sized>(
        grid: &Grid<EcoState>,
        (x, y): Coord,
        rng: &mut G,
    ) -> Option<Coord> {
        let places = NEIGHBORHOOD
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&coord| grid.contains(coord))
            .collect::<Vec<_>>();
        places.choose(rng).copied()
    }
}

impl Default for Ecosystem {
    fn default() -> Self {
        Ecosystem {
            grass_threshold: 2,
            sprout_chance: 0.001,
        }
    }
}

impl Display for Ecosystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grass and sheep (grass threshold {}, sprout chance {})",
            self.grass_threshold, self.sprout_chance
        )
    }
}

impl Rule for Ecosystem {
    type State = EcoState;

    /// Cells are evaluated in row-major order. A lamb overwrites whatever
    /// was computed for its birthplace, and a cell where a lamb is already
    /// born is not evaluated again.
    fn advance<G: Rng + ?Sized>(&self, grid: &Grid<EcoState>, rng: &mut G) -> Grid<EcoState> {
        // `None` means not yet computed.
        let mut next: Vec<Option<EcoState>> = vec![None; grid.width() * grid.height()];

        for (i, (coord, state)) in grid.iter().enumerate() {
            if next[i].is_some() {
                continue;
            }

            let grass = grid.neighbor_counts(coord)[EcoState::Grass.index()];
            let state = match state {
                EcoState::Grass => EcoState::Grass,
                EcoState::Sheep if grass == 0 => EcoState::Empty,
                EcoState::Sheep => {
                    if let Some(place) = Self::birthplace(grid, coord, rng) {
                        if grid.get(place) != Ok(EcoState::Sheep) {
                            if let Some(j) = grid.offset(place) {
                                next[j] = Some(EcoState::Sheep);
                            }
                        }
                    }
                    EcoState::Sheep
                }
                EcoState::Empty if grass >= self.grass_threshold => EcoState::Grass,
                EcoState::Empty if rng.gen_bool(self.sprout_chance) => EcoState::Grass,
                EcoState::Empty => EcoState::Empty,
            };
            next[i] = Some(state);
        }

        let cells = next.into_iter().map(Option::unwrap_or_default).collect();
        Grid::from_cells(grid.width(), grid.height(), cells)
    }
}
