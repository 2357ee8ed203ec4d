//! World configuration.

use crate::{
    board::Board,
    cells::Position,
    engine::Engine,
    error::{Error, Result},
    rules::RuleSet,
    topology::{Topology, TopologyKind},
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A random initial fill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Soup {
    /// Probability for each habitable cell to be alive.
    pub density: f64,

    /// Seed of the random number generator.
    ///
    /// `None` means a random seed.
    pub seed: Option<u64>,
}

impl Soup {
    /// Sets each habitable cell of the board alive with probability `density`.
    fn fill(&self, board: &mut Board) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let alive: Vec<Position> = board
            .habitable_positions()
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(self.density))
            .collect();
        debug!("soup with density {}: {} living cells", self.density, alive.len());
        board.apply_changes(&alive, &[])
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, PartialEq, Educe)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// The kind of topology.
    pub kind: TopologyKind,

    /// Width of the board, or of the front face of a cuboid.
    #[educe(Default = 16)]
    pub width: u32,

    /// Height of the board, or of the front face of a cuboid.
    #[educe(Default = 16)]
    pub height: u32,

    /// Depth of a cuboid. Ignored by other topologies.
    #[educe(Default = 16)]
    pub depth: u32,

    /// The rule string, either `23/3` or `B3/S23`.
    #[educe(Default = "23/3")]
    pub rule_string: String,

    /// Number of worker threads.
    ///
    /// `None` means rayon's global thread pool.
    pub workers: Option<usize>,

    /// A random initial fill, applied after [`alive`](#structfield.alive).
    pub soup: Option<Soup>,

    /// Initially living cells, as positions in the storage grid.
    pub alive: Vec<Position>,
}

impl Config {
    /// Sets up a new configuration with given topology and size.
    pub fn new(kind: TopologyKind, width: u32, height: u32) -> Self {
        Config {
            kind,
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the depth of a cuboid.
    pub fn set_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the initially living cells.
    pub fn set_alive<I, P>(mut self, alive: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        self.alive = alive.into_iter().map(Into::into).collect();
        self
    }

    /// Fills the board randomly with the given density.
    pub fn set_soup<T: Into<Option<u64>>>(mut self, density: f64, seed: T) -> Self {
        self.soup = Some(Soup {
            density,
            seed: seed.into(),
        });
        self
    }

    /// Sets the number of worker threads.
    pub fn set_workers<T: Into<Option<usize>>>(mut self, workers: T) -> Self {
        self.workers = workers.into();
        self
    }

    /// The topology described by this configuration.
    pub fn topology(&self) -> Result<Topology> {
        Topology::new(self.kind, self.width, self.height, self.depth)
    }

    /// Parses the rule string.
    pub fn rule(&self) -> Result<RuleSet> {
        RuleSet::parse_notation(&self.rule_string)
    }

    /// Creates a new board from the configuration.
    pub fn board(&self) -> Result<Board> {
        let mut board = Board::new(self.topology()?, self.alive.iter().copied())?;
        if let Some(soup) = &self.soup {
            soup.fill(&mut board)?;
        }
        Ok(board)
    }

    /// Creates a new engine from the configuration.
    pub fn engine(&self) -> Result<Engine> {
        let rule = self.rule()?;
        let board = self.board()?;
        debug!("new engine: {}, rule {}", board.topology(), rule);
        match self.workers {
            Some(workers) => Engine::with_workers(board, rule, workers),
            None => Ok(Engine::new(board, rule)),
        }
    }
}
