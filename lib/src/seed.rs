//! Random initial states.

use crate::{
    cells::{EcoState, LifeState},
    error::Error,
    grid::Grid,
};
use rand::Rng;

/// The default probability for a cell to be alive in [`random_life`].
pub const DEFAULT_DENSITY: f64 = 0.1;

/// Fills the grid randomly, each cell being alive with probability `density`
/// independently.
pub fn random_life<G: Rng + ?Sized>(
    grid: &mut Grid<LifeState>,
    density: f64,
    rng: &mut G,
) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }
    for cell in grid.cells_mut() {
        *cell = if rng.gen_bool(density) {
            LifeState::Alive
        } else {
            LifeState::Dead
        };
    }
    Ok(())
}

/// Fills the grid randomly with grass and sheep.
///
/// Each cell is grass with a chance of `grass_rate` percent, a sheep with a
/// chance of `sheep_rate` percent, and empty otherwise. If the rates add up
/// to more than 100, the grass rate takes precedence.
pub fn random_ecosystem<G: Rng + ?Sized>(
    grid: &mut Grid<EcoState>,
    grass_rate: u32,
    sheep_rate: u32,
    rng: &mut G,
) {
    for cell in grid.cells_mut() {
        let roll = rng.gen_range(0..100);
        *cell = if roll < grass_rate {
            EcoState::Grass
        } else if roll < grass_rate.saturating_add(sheep_rate) {
            EcoState::Sheep
        } else {
            EcoState::Empty
        };
    }
}
