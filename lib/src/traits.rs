//! A trait for `World`.
use crate::{rules::Rule, world::World};
use std::fmt::Display;

/// A trait for `World`.
///
/// So that we can switch between different rule types using trait objects.
pub trait Simulation {
    /// Advances one generation.
    fn step(&mut self);

    /// Number of generations computed so far.
    fn generation(&self) -> u64;

    /// Width of the grid.
    fn width(&self) -> usize;

    /// Height of the grid.
    fn height(&self) -> usize;

    /// Number of cells in each state, with the names of the states.
    fn counts(&self) -> Vec<(&'static str, usize)>;

    /// A description of the rule.
    fn rule_string(&self) -> String;

    /// Displays the current generation in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** and **Empty** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * **Grass** is represented by `w`;
    /// * **Sheep** are represented by `#`.
    fn plaintext(&self) -> String;

    /// A line such as `generation = 3, dead:alive = 95:5`.
    fn summary(&self) -> String {
        let (names, counts): (Vec<_>, Vec<_>) = self.counts().into_iter().unzip();
        let counts = counts.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        format!(
            "generation = {}, {} = {}",
            self.generation(),
            names.join(":"),
            counts.join(":")
        )
    }
}

/// The `Simulation` trait is implemented for every `World`.
impl<R: Rule + Display> Simulation for World<R> {
    fn step(&mut self) {
        self.step()
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn counts(&self) -> Vec<(&'static str, usize)> {
        self.counts()
    }

    fn rule_string(&self) -> String {
        self.rule.to_string()
    }

    fn plaintext(&self) -> String {
        self.grid.plaintext()
    }
}
