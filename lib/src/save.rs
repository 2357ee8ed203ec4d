//! Saves the world.

use crate::{config::Config, engine::Engine, error::Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A representation of a running engine which can be easily serialized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Save {
    /// The generation counter.
    pub generation: u64,

    /// World configuration.
    ///
    /// The living cells and the rule are the current ones.
    pub config: Config,
}

impl Save {
    /// Restores the engine from the `Save`.
    pub fn engine(&self) -> Result<Engine> {
        Ok(self.config.engine()?.set_generation(self.generation))
    }
}

impl Engine {
    /// Saves the engine as a [`Save`].
    pub fn save(&self) -> Save {
        let board = self.board();
        let (width, height, depth) = board.topology().dimensions();
        let config = Config::new(board.topology().kind(), width, height)
            .set_depth(depth)
            .set_rule_string(self.rule().description())
            .set_alive(board.alive_positions())
            .set_workers(self.workers());
        Save {
            generation: self.generation(),
            config,
        }
    }
}
