//! __Lifeboard__ runs Conway's Game of Life and other `survive/birth`
//! rules on rectangles, tori and the surfaces of boxes.
//!
//! # Example
//!
//! ```rust
//! use lifeboard_lib::{CancelToken, Config, LifeState, Position, TopologyKind};
//!
//! // A blinker on a 5×5 rectangle.
//! let blinker = [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
//! let config = Config::new(TopologyKind::Rectangular, 5, 5).set_alive(blinker);
//! let engine = config.engine().unwrap();
//!
//! let changes = engine.advance(&CancelToken::new()).unwrap();
//! assert_eq!(changes.generation, 1);
//! assert_eq!(engine.get(Position::new(2, 1)).unwrap(), LifeState::Alive);
//! assert_eq!(engine.get(Position::new(1, 2)).unwrap(), LifeState::Dead);
//! ```

mod board;
mod cells;
mod config;
mod engine;
mod error;
pub mod rules;
mod save;
pub mod topology;

pub use board::Board;
pub use cells::{LifeState, Position};
pub use config::{Config, Soup};
pub use engine::{CancelToken, Changes, Engine, Observer, Status};
pub use error::{Error, Result};
pub use rules::RuleSet;
pub use save::Save;
pub use topology::{NeighborCache, Topology, TopologyKind};
