//! __Rlifesim__ simulates cellular automata on a bounded grid.
//!
//! The initial state is read from a pattern in the
//! [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) format
//! (which may also change the rule), from a list of living cells,
//! or chosen randomly.
//!
//! Two kinds of automata are supported: [Life-like](rules::Life) rules,
//! and a grass and sheep [ecosystem](rules::Ecosystem).
//!
//! # Example
//!
//! ```rust
//! use rlifesim_lib::{rle, rules::Life, Grid, LifeState, World};
//!
//! // A glider.
//! let mut grid = Grid::new(8, 8).unwrap();
//! let decoded = rle::read("x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n", &mut grid, Life::default())
//!     .unwrap();
//!
//! let mut world = World::new(grid, decoded.rule);
//! world.run(4);
//!
//! assert_eq!(world.grid().count(LifeState::Alive), 5);
//! assert_eq!(world.grid().get((2, 3)), Ok(LifeState::Alive));
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod lif;
pub mod load;
pub mod rle;
pub mod rules;
pub mod seed;
mod traits;
mod world;

pub use cells::{CellState, Coord, EcoState, LifeState};
pub use config::{Automaton, Config};
pub use error::Error;
pub use grid::Grid;
pub use traits::Simulation;
pub use world::{advance, World};
