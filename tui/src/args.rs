//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Error};
use rlifesim_lib::{rules::Life, Automaton, Config};
use std::{fs, path::Path, path::PathBuf, time::Duration};

fn positive(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(0) => Err(String::from("must be a positive integer")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn probability(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        Ok(_) => Err(String::from("must be between 0 and 1")),
        Err(e) => Err(e.to_string()),
    }
}

fn rule_string(s: &str) -> Result<String, String> {
    s.parse::<Life>()
        .map(|_| s.to_owned())
        .map_err(|e| e.to_string())
}

/// Reads a configuration file in TOML, JSON or YAML, chosen by its extension.
fn read_config(path: &Path) -> Result<Config, Error> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let config = match ext.as_deref() {
        Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        _ => Err(String::from("expected a .toml, .json or .yaml file")),
    };
    config.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid config file {}: {}\n", path.display(), e),
        )
    })
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) delay: Duration,
    pub(crate) generations: Option<u64>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut command = command!()
            .long_about(
                "Simulates cellular automata on a bounded grid\n\
                 \n\
                 The initial state is read from a pattern file in RLE (.rle) or \n\
                 Life 1.06 (.lif) format, or chosen randomly.\n\
                 Cells outside the grid are always dead.\n\
                 \n\
                 Two automata are supported:\n\
                 * `life`: a Life-like rule, Conway's Game of Life by default;\n\
                 * `ecosystem`: grass and sheep. Sheep starve without grass, \
                 and give birth to lambs next to them.\n\
                 \n\
                 Options given on the command line override those in the config file.\n",
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Pattern file to start from, in RLE or Lif format")
                    .long_help(
                        "Pattern file to start from, in RLE or Lif format\n\
                         The format is chosen by the extension. Without a pattern, \
                         the initial state is random.\n",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .index(1),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a TOML, JSON or YAML file")
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the grid [default: 70]")
                    .short('x')
                    .long("width")
                    .value_parser(positive),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Height of the grid [default: 40]")
                    .short('y')
                    .long("height")
                    .value_parser(positive),
            )
            .arg(
                Arg::new("AUTOMATON")
                    .help("Which cellular automaton to run [default: life]")
                    .short('a')
                    .long("automaton")
                    .value_parser(["life", "ecosystem", "sheep", "l", "e"]),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of a Life-like automaton [default: B3/S23]")
                    .long_help(
                        "Rule of a Life-like automaton [default: B3/S23]\n\
                         A rule in the header of an RLE pattern overrides it.\n",
                    )
                    .short('r')
                    .long("rule")
                    .value_parser(rule_string),
            )
            .arg(
                Arg::new("DENSITY")
                    .help("Density of living cells in a random initial state [default: 0.1]")
                    .short('d')
                    .long("density")
                    .value_parser(probability),
            )
            .arg(
                Arg::new("GRASS")
                    .help("Percentage of grass in the initial ecosystem [default: 80]")
                    .long("grass")
                    .value_parser(value_parser!(u32).range(0..=100)),
            )
            .arg(
                Arg::new("SHEEP")
                    .help("Percentage of sheep in the initial ecosystem [default: 10]")
                    .long("sheep")
                    .value_parser(value_parser!(u32).range(0..=100)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random number generator")
                    .short('s')
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("DELAY")
                    .help("Milliseconds between two generations")
                    .long("delay")
                    .default_value("200")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Stops after this many generations")
                    .long_help(
                        "Stops after this many generations\n\
                         Without it, the simulation runs until it is quit.\n",
                    )
                    .short('g')
                    .long("generations")
                    .value_parser(value_parser!(u64)),
            );

        #[cfg(feature = "tui")]
        {
            command = command.arg(
                Arg::new("NOTUI")
                    .help("Prints the generations as plain text, without entering the TUI")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            );
        }

        let matches = command.try_get_matches()?;

        let config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        let config = Self::override_config(config, &matches);
        config
            .validate()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        let total_rate = config.grass_rate.saturating_add(config.sheep_rate);
        if total_rate > 100 {
            log::warn!(
                "Grass and sheep rates add up to {}%, there will be no empty cell",
                total_rate
            );
        }

        let delay = matches.get_one::<u64>("DELAY").copied().unwrap_or(200);
        let delay = Duration::from_millis(delay);
        let generations = matches.get_one::<u64>("GENERATIONS").copied();

        Ok(Args {
            config,
            delay,
            generations,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }

    /// Applies the options given on the command line.
    fn override_config(mut config: Config, matches: &ArgMatches) -> Config {
        if let Some(pattern) = matches.get_one::<PathBuf>("PATTERN") {
            config = config.set_pattern(pattern.clone());
        }
        if let Some(&width) = matches.get_one::<usize>("WIDTH") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<usize>("HEIGHT") {
            config.height = height;
        }
        if let Some(automaton) = matches
            .get_one::<String>("AUTOMATON")
            .and_then(|s| s.parse::<Automaton>().ok())
        {
            config = config.set_automaton(automaton);
        }
        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config = config.set_rule_string(rule_string.clone());
        }
        if let Some(&density) = matches.get_one::<f64>("DENSITY") {
            config = config.set_density(density);
        }
        if let Some(&grass_rate) = matches.get_one::<u32>("GRASS") {
            config.grass_rate = grass_rate;
        }
        if let Some(&sheep_rate) = matches.get_one::<u32>("SHEEP") {
            config.sheep_rate = sheep_rate;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config = config.set_seed(seed);
        }
        config
    }
}
