//! The world.

use crate::{
    cells::{CellState, LifeState},
    grid::Grid,
    rules::{Life, Rule},
};
use rand::{rngs::StdRng, SeedableRng};

/// The world: a grid evolving under a rule.
pub struct World<R: Rule> {
    /// The rule of the cellular automaton.
    pub(crate) rule: R,

    /// The current generation.
    pub(crate) grid: Grid<R::State>,

    /// Number of generations computed so far.
    pub(crate) generation: u64,

    /// The random number generator for non-deterministic rules.
    rng: StdRng,
}

impl<R: Rule> World<R> {
    /// Creates a new world from the initial grid and the rule,
    /// with a random number generator seeded from the system.
    pub fn new(grid: Grid<R::State>, rule: R) -> Self {
        World::with_rng(grid, rule, StdRng::from_entropy())
    }

    /// Creates a new world with the given random number generator.
    pub fn with_rng(grid: Grid<R::State>, rule: R, rng: StdRng) -> Self {
        World {
            rule,
            grid,
            generation: 0,
            rng,
        }
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid<R::State> {
        &self.grid
    }

    /// The rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation.
    ///
    /// The next generation is computed in full before it replaces
    /// the current one.
    pub fn step(&mut self) {
        let next = self.rule.advance(&self.grid, &mut self.rng);
        self.grid = next;
        self.generation += 1;
    }

    /// Advances `n` generations.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Number of cells in each state, with the names of the states.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        <R::State as CellState>::ALL
            .iter()
            .map(|s| s.name())
            .zip(self.grid.counts())
            .collect()
    }
}

/// Computes the next generation of a Life-like grid.
///
/// Every cell of the returned grid depends only on `grid`.
pub fn advance(grid: &Grid<LifeState>, rule: &Life) -> Grid<LifeState> {
    rule.next_generation(grid)
}
