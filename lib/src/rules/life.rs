//! Totalistic Life-like rules.

use crate::{
    cells::LifeState,
    error::Error,
    grid::Grid,
    rules::Rule,
};
use ca_rules::ParseLife;
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The largest possible number of living neighbors.
const MAX_NEIGHBORS: usize = 8;

/// Totalistic Life-like rules.
///
/// A rule table made of two sets of neighbor counts:
/// a dead cell with `n` living neighbors becomes alive iff `n` is in `born`;
/// a living cell with `n` living neighbors stays alive iff `n` is in `survive`.
///
/// The default is Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `born[n]`: whether a dead cell with `n` living neighbors is born.
    born: [bool; MAX_NEIGHBORS + 1],
    /// `survive[n]`: whether a living cell with `n` living neighbors survives.
    survive: [bool; MAX_NEIGHBORS + 1],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: &[u8], s: &[u8]) -> Result<Self, Error> {
        let mut born = [false; MAX_NEIGHBORS + 1];
        let mut survive = [false; MAX_NEIGHBORS + 1];
        for (table, counts) in [(&mut born, b), (&mut survive, s)] {
            for &n in counts {
                *table
                    .get_mut(n as usize)
                    .ok_or(Error::NeighborCountOutOfRange(n as usize))? = true;
            }
        }
        Ok(Life { born, survive })
    }

    /// Whether a dead cell with `n` living neighbors becomes alive.
    pub fn is_born(&self, n: usize) -> Result<bool, Error> {
        self.born
            .get(n)
            .copied()
            .ok_or(Error::NeighborCountOutOfRange(n))
    }

    /// Whether a living cell with `n` living neighbors stays alive.
    pub fn is_survivor(&self, n: usize) -> Result<bool, Error> {
        self.survive
            .get(n)
            .copied()
            .ok_or(Error::NeighborCountOutOfRange(n))
    }

    /// The state of a cell in the next generation.
    ///
    /// `alives` never exceeds 8 in the 8-neighbor model.
    #[inline]
    fn next_state(&self, state: LifeState, alives: usize) -> LifeState {
        let table = match state {
            LifeState::Alive => &self.survive,
            LifeState::Dead => &self.born,
        };
        if table[alives] {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Computes the next generation of a grid under this rule.
    ///
    /// Every cell of the returned grid depends only on `grid`.
    pub fn next_generation(&self, grid: &Grid<LifeState>) -> Grid<LifeState> {
        let cells = grid
            .iter()
            .map(|(coord, state)| {
                let alives = grid.count_neighbors(coord, LifeState::Alive);
                self.next_state(state, alives)
            })
            .collect();
        Grid::from_cells(grid.width(), grid.height(), cells)
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::from_bs(vec![3], vec![2, 3])
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut born = [false; MAX_NEIGHBORS + 1];
        let mut survive = [false; MAX_NEIGHBORS + 1];
        for n in b.into_iter().filter(|&n| (n as usize) <= MAX_NEIGHBORS) {
            born[n as usize] = true;
        }
        for n in s.into_iter().filter(|&n| (n as usize) <= MAX_NEIGHBORS) {
            survive[n as usize] = true;
        }
        Life { born, survive }
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Life::parse_rule(input.trim()).map_err(Error::ParseRuleError)
    }
}

/// Displays the rule in B/S notation, e.g. `B3/S23`.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for (n, _) in self.born.iter().enumerate().filter(|(_, &b)| b) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for (n, _) in self.survive.iter().enumerate().filter(|(_, &s)| s) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl Rule for Life {
    type State = LifeState;

    fn advance<G: Rng + ?Sized>(&self, grid: &Grid<LifeState>, _rng: &mut G) -> Grid<LifeState> {
        self.next_generation(grid)
    }
}
