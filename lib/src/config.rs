//! World configuration.

use crate::{
    cells::{EcoState, LifeState},
    error::Error,
    grid::Grid,
    load,
    rules::{Ecosystem, Life},
    seed,
    traits::Simulation,
    world::World,
};
use educe::Educe;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which cellular automaton to run.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Automaton {
    /// A Life-like rule given by [`rule_string`](Config::rule_string).
    #[educe(Default)]
    Life,

    /// The grass and sheep [`Ecosystem`].
    Ecosystem,
}

impl FromStr for Automaton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "life" | "l" => Ok(Automaton::Life),
            "ecosystem" | "sheep" | "e" => Ok(Automaton::Ecosystem),
            _ => Err(String::from("invalid automaton")),
        }
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Automaton::Life => "life",
            Automaton::Ecosystem => "ecosystem",
        };
        f.write_str(s)
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 70)]
    pub width: usize,

    /// Height.
    #[educe(Default = 40)]
    pub height: usize,

    /// Which cellular automaton to run.
    pub automaton: Automaton,

    /// The rule string of a Life-like automaton.
    ///
    /// A pattern file with a rule in its header overrides it.
    #[educe(Default(expression = "String::from(\"B3/S23\")"))]
    pub rule_string: String,

    /// The pattern file to start from, in RLE or Lif format.
    ///
    /// `None` means a random initial state.
    pub pattern: Option<PathBuf>,

    /// The probability for a cell to be alive in a random initial state
    /// of a Life-like automaton.
    #[educe(Default = 0.1)]
    pub density: f64,

    /// The percentage of grass in the initial state of the ecosystem.
    #[educe(Default = 80)]
    pub grass_rate: u32,

    /// The percentage of sheep in the initial state of the ecosystem.
    #[educe(Default = 10)]
    pub sheep_rate: u32,

    /// The seed of the random number generator.
    ///
    /// `None` means a seed from the system.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets which cellular automaton to run.
    pub fn set_automaton(mut self, automaton: Automaton) -> Self {
        self.automaton = automaton;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string(mut self, rule_string: String) -> Self {
        self.rule_string = rule_string;
        self
    }

    /// Sets the pattern file.
    pub fn set_pattern<T: Into<Option<PathBuf>>>(mut self, pattern: T) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the density of a random initial state.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the percentages of grass and sheep in the initial ecosystem.
    pub fn set_rates(mut self, grass_rate: u32, sheep_rate: u32) -> Self {
        self.grass_rate = grass_rate;
        self.sheep_rate = sheep_rate;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Checks the density and the rates, which a deserialized
    /// configuration may carry out of range.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        for rate in [self.grass_rate, self.sheep_rate] {
            if rate > 100 {
                return Err(Error::InvalidRate(rate));
            }
        }
        Ok(())
    }

    /// A random number generator, seeded by [`seed`](#structfield.seed) if any.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Creates a world of a Life-like automaton.
    ///
    /// The initial state is read from the pattern file if there is one,
    /// and is random otherwise.
    pub fn life_world(&self) -> Result<World<Life>, Error> {
        self.validate()?;
        let mut rule = self.rule_string.parse::<Life>()?;
        let mut grid = Grid::<LifeState>::new(self.width, self.height)?;
        let mut rng = self.rng();

        if let Some(path) = &self.pattern {
            rule = load::load_file(path, &mut grid, rule)?.rule;
            info!("Loaded {} with rule {}", path.display(), rule);
        } else {
            seed::random_life(&mut grid, self.density, &mut rng)?;
        }

        Ok(World::with_rng(grid, rule, rng))
    }

    /// Creates a world of the grass and sheep ecosystem with a random
    /// initial state.
    pub fn ecosystem_world(&self) -> Result<World<Ecosystem>, Error> {
        self.validate()?;
        let mut grid = Grid::<EcoState>::new(self.width, self.height)?;
        let mut rng = self.rng();
        seed::random_ecosystem(&mut grid, self.grass_rate, self.sheep_rate, &mut rng);
        Ok(World::with_rng(grid, Ecosystem::default(), rng))
    }

    /// Creates a new world from the configuration.
    /// Returns an error if the rule string or the pattern is invalid.
    pub fn world(&self) -> Result<Box<dyn Simulation>, Error> {
        let world: Box<dyn Simulation> = match self.automaton {
            Automaton::Life => Box::new(self.life_world()?),
            Automaton::Ecosystem => Box::new(self.ecosystem_world()?),
        };
        Ok(world)
    }
}
