//! Board topologies.
//!
//! A topology decides the size of the storage grid, which cells of it can
//! host life, and which cells are neighbors of each other.

mod cache;
mod cuboid;
mod rectangular;
mod toroidal;

use crate::{
    cells::Position,
    error::{Error, Result},
};
use auto_enums::auto_enum;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub use cache::NeighborCache;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offsets of the 8 neighbors, in the order N, NE, E, SE, S, SW, W, NW.
///
/// `y` grows downwards.
pub(crate) const DIRECTIONS: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Kinds of topologies, without dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TopologyKind {
    /// A bounded rectangle.
    Rectangular,
    /// A rectangle whose opposite edges are glued together.
    #[default]
    Toroidal,
    /// The surface of a box.
    Cuboid,
}

impl FromStr for TopologyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangular" | "rect" | "r" => Ok(TopologyKind::Rectangular),
            "toroidal" | "toroid" | "torus" | "t" => Ok(TopologyKind::Toroidal),
            "cuboid" | "c" => Ok(TopologyKind::Cuboid),
            _ => Err(String::from("invalid topology")),
        }
    }
}

impl Display for TopologyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopologyKind::Rectangular => "rectangular",
            TopologyKind::Toroidal => "toroidal",
            TopologyKind::Cuboid => "cuboid",
        };
        f.write_str(s)
    }
}

/// A topology together with its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// A bounded rectangle. Cells on the border have fewer neighbors.
    Rectangular {
        /// Width of the board.
        width: u32,
        /// Height of the board.
        height: u32,
    },
    /// A rectangle where both axes wrap around.
    ///
    /// Every cell has exactly 8 neighbors, counted with multiplicity.
    Toroidal {
        /// Width of the board.
        width: u32,
        /// Height of the board.
        height: u32,
    },
    /// The surface of a `width × height × depth` box.
    ///
    /// The six faces are unfolded into a cross:
    ///
    /// ```text
    ///         +-----+
    ///         | top |
    /// +------+-------+-------+------+
    /// | left | front | right | back |
    /// +------+-------+-------+------+
    ///         |bottom|
    ///         +-----+
    /// ```
    ///
    /// The storage grid is `(2 * width + 2 * depth) × (2 * depth + height)`.
    /// Cells outside the cross can never host life.
    Cuboid {
        /// Width of the front face.
        width: u32,
        /// Height of the front face.
        height: u32,
        /// Depth of the box.
        depth: u32,
    },
}

impl Topology {
    /// Builds a topology of the given kind.
    ///
    /// `depth` is ignored unless the kind is [`Cuboid`](TopologyKind::Cuboid).
    pub fn new(kind: TopologyKind, width: u32, height: u32, depth: u32) -> Result<Self> {
        let topology = match kind {
            TopologyKind::Rectangular => Topology::Rectangular { width, height },
            TopologyKind::Toroidal => Topology::Toroidal { width, height },
            TopologyKind::Cuboid => Topology::Cuboid {
                width,
                height,
                depth,
            },
        };
        topology.validate()?;
        Ok(topology)
    }

    /// Checks that every dimension is at least 1, and that the storage grid
    /// of a cuboid fits in `u32` coordinates.
    pub fn validate(&self) -> Result<()> {
        let (width, height, depth) = match *self {
            Topology::Rectangular { width, height } | Topology::Toroidal { width, height } => {
                (width, height, 1)
            }
            Topology::Cuboid {
                width,
                height,
                depth,
            } => (width, height, depth),
        };
        if width == 0 {
            Err(Error::InvalidDimension("width"))
        } else if height == 0 {
            Err(Error::InvalidDimension("height"))
        } else if depth == 0 {
            Err(Error::InvalidDimension("depth"))
        } else if let Topology::Cuboid { .. } = self {
            cuboid::check_size(width, height, depth).map_err(Error::InvalidDimension)
        } else {
            Ok(())
        }
    }

    /// The kind of the topology.
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Rectangular { .. } => TopologyKind::Rectangular,
            Topology::Toroidal { .. } => TopologyKind::Toroidal,
            Topology::Cuboid { .. } => TopologyKind::Cuboid,
        }
    }

    /// Width, height and depth. Planar topologies have depth 1.
    pub fn dimensions(&self) -> (u32, u32, u32) {
        match *self {
            Topology::Rectangular { width, height } | Topology::Toroidal { width, height } => {
                (width, height, 1)
            }
            Topology::Cuboid {
                width,
                height,
                depth,
            } => (width, height, depth),
        }
    }

    /// Width and height of the storage grid.
    pub fn storage_size(&self) -> (u32, u32) {
        match *self {
            Topology::Rectangular { width, height } | Topology::Toroidal { width, height } => {
                (width, height)
            }
            Topology::Cuboid {
                width,
                height,
                depth,
            } => cuboid::storage_size(width, height, depth),
        }
    }

    /// Whether a position inside the storage grid can host life.
    pub fn is_habitable(&self, position: Position) -> bool {
        let (storage_width, storage_height) = self.storage_size();
        if position.x >= storage_width || position.y >= storage_height {
            return false;
        }
        match *self {
            Topology::Rectangular { .. } | Topology::Toroidal { .. } => true,
            Topology::Cuboid {
                width,
                height,
                depth,
            } => cuboid::is_habitable(width, height, depth, position),
        }
    }

    /// Habitable positions, row by row.
    #[auto_enum(Iterator)]
    pub fn habitable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (storage_width, storage_height) = self.storage_size();
        let all = (0..storage_height)
            .flat_map(move |y| (0..storage_width).map(move |x| Position::new(x, y)));
        match self {
            Topology::Rectangular { .. } | Topology::Toroidal { .. } => all,
            Topology::Cuboid { .. } => all.filter(move |&position| self.is_habitable(position)),
        }
    }

    /// Builds the neighbor cache of this topology.
    pub fn neighbor_cache(&self) -> NeighborCache {
        NeighborCache::build(self)
    }
}

impl Display for Topology {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Topology::Rectangular { width, height } | Topology::Toroidal { width, height } => {
                write!(f, "{} {}×{}", self.kind(), width, height)
            }
            Topology::Cuboid {
                width,
                height,
                depth,
            } => write!(f, "cuboid {}×{}×{}", width, height, depth),
        }
    }
}
