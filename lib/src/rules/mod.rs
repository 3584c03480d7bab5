//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod ecosystem;
mod life;

use crate::{cells::CellState, grid::Grid};
pub use ecosystem::Ecosystem;
pub use life::Life;
use rand::Rng;

/// A cellular automaton rule on a bounded grid.
///
/// Please use the following structs instead of implementing by yourself:
/// - [`Life`]
/// - [`Ecosystem`]
pub trait Rule {
    /// The states that a cell can hold under this rule.
    type State: CellState;

    /// Computes the next generation of the whole grid.
    ///
    /// The returned grid is brand new. The state of every cell in it
    /// depends only on `grid`, never on a cell that is already updated.
    ///
    /// Deterministic rules ignore `rng`.
    fn advance<G: Rng + ?Sized>(
        &self,
        grid: &Grid<Self::State>,
        rng: &mut G,
    ) -> Grid<Self::State>;
}
