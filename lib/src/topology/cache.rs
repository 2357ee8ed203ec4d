//! Precomputed neighbor lists.

use super::{cuboid::Seams, rectangular, toroidal, Topology};
use crate::cells::Position;
use log::trace;

/// The neighbors of every cell of a board, computed once.
///
/// Stored in a compressed layout: `offsets[i]..offsets[i + 1]` is the range
/// in `neighbors` for the cell with storage index `i = y * width + x`.
/// Uninhabitable cells have empty ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCache {
    width: u32,
    offsets: Vec<usize>,
    neighbors: Vec<Position>,
}

impl NeighborCache {
    /// Builds the cache for a topology.
    pub(crate) fn build(topology: &Topology) -> Self {
        match *topology {
            Topology::Rectangular { width, height } => {
                Self::from_fn(topology, |position, out| {
                    rectangular::push_neighbors(width, height, position, out)
                })
            }
            Topology::Toroidal { width, height } => Self::from_fn(topology, |position, out| {
                toroidal::push_neighbors(width, height, position, out)
            }),
            Topology::Cuboid {
                width,
                height,
                depth,
            } => {
                let seams = Seams::new(width, height, depth);
                Self::from_fn(topology, |position, out| seams.push_neighbors(position, out))
            }
        }
    }

    fn from_fn<F>(topology: &Topology, mut push_neighbors: F) -> Self
    where
        F: FnMut(Position, &mut Vec<Position>),
    {
        let (width, height) = topology.storage_size();
        let size = width as usize * height as usize;
        let mut offsets = Vec::with_capacity(size + 1);
        let mut neighbors = Vec::with_capacity(size * 8);
        offsets.push(0);
        for y in 0..height {
            for x in 0..width {
                let position = Position::new(x, y);
                if topology.is_habitable(position) {
                    push_neighbors(position, &mut neighbors);
                }
                offsets.push(neighbors.len());
            }
        }
        trace!(
            "built neighbor cache for {}: {} entries",
            topology,
            neighbors.len()
        );
        NeighborCache {
            width,
            offsets,
            neighbors,
        }
    }

    /// The neighbors of a position inside the storage grid.
    ///
    /// Returns an empty slice for uninhabitable cells and for positions
    /// outside the grid.
    pub fn get(&self, position: Position) -> &[Position] {
        if position.x >= self.width {
            return &[];
        }
        let index = position.y as usize * self.width as usize + position.x as usize;
        match (self.offsets.get(index), self.offsets.get(index + 1)) {
            (Some(&start), Some(&end)) => &self.neighbors[start..end],
            _ => &[],
        }
    }
}
