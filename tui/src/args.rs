//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Error};
use lifeboard_lib::{Config, Position, RuleSet, TopologyKind};
use log::Level;
use std::path::PathBuf;

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(String::from("density must be between 0 and 1"))
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    /// The world to build, unless a file is loaded.
    pub(crate) config: Config,
    /// A config or save file to load instead.
    pub(crate) load: Option<PathBuf>,
    /// Where to save the world at the end.
    pub(crate) save: Option<PathBuf>,
    /// Number of generations to run.
    pub(crate) generations: u64,
    /// Prints only the final board.
    pub(crate) quiet: bool,
    verbosity: u8,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut command = command!()
            .long_about(
                "Runs the Game of Life on a rectangle, a torus or the surface of a box.\n\
                 \n\
                 A cuboid board is unfolded into a cross: the top face above the front face, \
                 the bottom face below it, and the left, front, right and back faces in one \
                 row. Positions are given in this unfolded grid.\n\
                 \n\
                 The board is printed in plaintext:\n\
                 * Living cells are represented by `o`;\n\
                 * Dead cells are represented by `.`;\n\
                 * Cells where no life is possible are represented by spaces.\n",
            )
            .arg(
                Arg::new("X")
                    .help("Width of the board")
                    .index(1)
                    .default_value("10")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("Y")
                    .help("Height of the board")
                    .index(2)
                    .default_value("10")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("DEPTH")
                    .help("Depth of a cuboid board")
                    .short('d')
                    .long("depth")
                    .default_value("10")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("BOARD")
                    .help("Topology of the board")
                    .long_help(
                        "Topology of the board\n\
                         One of `toroidal`, `rectangular` and `cuboid`.\n",
                    )
                    .short('b')
                    .long("board")
                    .default_value("toroidal")
                    .value_parser(|s: &str| s.parse::<TopologyKind>()),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton")
                    .long_help(
                        "Rule of the cellular automaton\n\
                         Either `survive/birth` such as `23/3`, or `B3/S23`.\n",
                    )
                    .short('r')
                    .long("rule")
                    .default_value("23/3")
                    .value_parser(|s: &str| RuleSet::parse_notation(s)),
            )
            .arg(
                Arg::new("ALIVE")
                    .help("Initially living cells, as pairs of coordinates: x y x y ...")
                    .short('a')
                    .long("alive")
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("SOUP")
                    .help("Fills the board randomly with the given density")
                    .long("soup")
                    .value_parser(parse_density),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random soup")
                    .long("seed")
                    .requires("SOUP")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run")
                    .short('g')
                    .long("generations")
                    .default_value("1")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("WORKERS")
                    .help("Number of worker threads")
                    .long_help(
                        "Number of worker threads\n\
                         If not given, one thread per CPU core is used.\n",
                    )
                    .short('w')
                    .long("workers")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("LOAD")
                    .help("Loads a config or save file")
                    .long_help(
                        "Loads a config or save file\n\
                         The format is decided by the extension: `.json`, `.yaml`, `.yml` \
                         or `.toml`. A save file also restores the generation.\n",
                    )
                    .short('l')
                    .long("load")
                    .conflicts_with_all(["X", "Y", "DEPTH", "BOARD", "RULE", "ALIVE", "SOUP"])
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("SAVE")
                    .help("Saves the world at the end")
                    .short('s')
                    .long("save")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("QUIET")
                    .help("Prints only the final board")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Prints more logs; may be repeated")
                    .short('v')
                    .action(ArgAction::Count),
            );

        let matches = command.try_get_matches_from_mut(std::env::args_os())?;

        let coords: Vec<u32> = matches
            .get_many::<u32>("ALIVE")
            .map(|values| values.copied().collect())
            .unwrap_or_default();
        if coords.len() % 2 != 0 {
            return Err(command.error(
                ErrorKind::WrongNumberOfValues,
                "living cells must be given as pairs of coordinates",
            ));
        }
        let alive = coords
            .chunks(2)
            .map(|pair| Position::new(pair[0], pair[1]));

        let width = *matches.get_one::<u32>("X").unwrap();
        let height = *matches.get_one::<u32>("Y").unwrap();
        let depth = *matches.get_one::<u32>("DEPTH").unwrap();
        let kind = *matches.get_one::<TopologyKind>("BOARD").unwrap();
        let rule = matches.get_one::<RuleSet>("RULE").unwrap();
        let workers = matches.get_one::<u32>("WORKERS").map(|&n| n as usize);

        let mut config = Config::new(kind, width, height)
            .set_depth(depth)
            .set_rule_string(rule.description())
            .set_alive(alive)
            .set_workers(workers);
        if let Some(&density) = matches.get_one::<f64>("SOUP") {
            config = config.set_soup(density, matches.get_one::<u64>("SEED").copied());
        }

        Ok(Args {
            config,
            load: matches.get_one::<PathBuf>("LOAD").cloned(),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            generations: *matches.get_one::<u64>("GENERATIONS").unwrap(),
            quiet: matches.get_flag("QUIET"),
            verbosity: matches.get_count("VERBOSE"),
        })
    }

    /// The log level chosen by `-v`.
    pub(crate) fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }
}
