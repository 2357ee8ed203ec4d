//! The board.

use crate::{
    cells::{LifeState, Position},
    error::{Error, Result},
    topology::{NeighborCache, Topology},
};
use std::collections::HashSet;

/// A grid of cells, together with its topology and neighbor cache.
///
/// Cells which are [`NoLifePossible`](LifeState::NoLifePossible) when the
/// board is created stay so forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The topology and its dimensions.
    topology: Topology,

    /// Width of the storage grid.
    width: u32,

    /// Height of the storage grid.
    height: u32,

    /// States of all cells, indexed by `y * width + x`.
    cells: Vec<LifeState>,

    /// Habitable positions, row by row.
    habitable: Vec<Position>,

    /// Neighbors of every cell.
    cache: NeighborCache,
}

impl Board {
    /// Creates a new board.
    ///
    /// Positions in `alive` which are outside the board or cannot host life
    /// are ignored.
    pub fn new<I>(topology: Topology, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        topology.validate()?;
        let (width, height) = topology.storage_size();
        let habitable: Vec<Position> = topology.habitable_positions().collect();
        let mut cells = vec![LifeState::NoLifePossible; width as usize * height as usize];
        for &position in &habitable {
            cells[index(width, position)] = LifeState::Dead;
        }
        let mut board = Board {
            topology,
            width,
            height,
            cells,
            habitable,
            cache: topology.neighbor_cache(),
        };
        for position in alive {
            if let Some(cell) = board.cell_mut(position) {
                if cell.is_habitable() {
                    *cell = LifeState::Alive;
                }
            }
        }
        Ok(board)
    }

    /// The topology of the board.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Width of the storage grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the storage grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn check(&self, position: Position) -> Result<usize> {
        if self.contains(position) {
            Ok(index(self.width, position))
        } else {
            Err(Error::PositionOutOfRange(position))
        }
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut LifeState> {
        let index = self.check(position).ok()?;
        self.cells.get_mut(index)
    }

    /// The state of a cell.
    pub fn get(&self, position: Position) -> Result<LifeState> {
        let index = self.check(position)?;
        Ok(self.cells[index])
    }

    /// The states of many cells, in the same order.
    pub fn get_many<I>(&self, positions: I) -> Result<Vec<LifeState>>
    where
        I: IntoIterator<Item = Position>,
    {
        positions.into_iter().map(|position| self.get(position)).collect()
    }

    /// Sets cells alive or dead.
    ///
    /// Everything is checked before anything is written, so on error the
    /// board is unchanged.
    pub fn apply_changes(&mut self, alive: &[Position], dead: &[Position]) -> Result<()> {
        for &position in alive.iter().chain(dead) {
            self.check(position)?;
        }
        for &position in alive.iter().chain(dead) {
            if !self.cells[index(self.width, position)].is_habitable() {
                return Err(Error::UninhabitableCell(position));
            }
        }
        if !alive.is_empty() && !dead.is_empty() {
            let alive_set: HashSet<Position> = alive.iter().copied().collect();
            if let Some(&position) = dead.iter().find(|position| alive_set.contains(position)) {
                return Err(Error::ConflictingChange(position));
            }
        }
        for &position in alive {
            self.cells[index(self.width, position)] = LifeState::Alive;
        }
        for &position in dead {
            self.cells[index(self.width, position)] = LifeState::Dead;
        }
        Ok(())
    }

    /// Flips a habitable cell and returns the new state.
    ///
    /// [`NoLifePossible`](LifeState::NoLifePossible) cells are left as they are.
    pub(crate) fn flip(&mut self, position: Position) -> Result<LifeState> {
        let index = self.check(position)?;
        let cell = &mut self.cells[index];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Positions of the neighbors of a cell.
    ///
    /// Empty for uninhabitable cells.
    pub fn neighbor_positions(&self, position: Position) -> Result<&[Position]> {
        self.check(position)?;
        Ok(self.cache.get(position))
    }

    /// States of the neighbors of a cell.
    pub fn neighbors(&self, position: Position) -> Result<Vec<LifeState>> {
        Ok(self
            .neighbor_positions(position)?
            .iter()
            .map(|&neighbor| self.cells[index(self.width, neighbor)])
            .collect())
    }

    /// Number of living neighbors, counted with multiplicity.
    pub(crate) fn alive_neighbor_count(&self, position: Position) -> usize {
        self.cache
            .get(position)
            .iter()
            .filter(|&&neighbor| self.cells[index(self.width, neighbor)].is_alive())
            .count()
    }

    /// Number of cells that can host life.
    pub fn habitable_count(&self) -> usize {
        self.habitable.len()
    }

    /// Cells that can host life, row by row.
    pub fn habitable_positions(&self) -> &[Position] {
        &self.habitable
    }

    /// Living cells, row by row.
    pub fn alive_positions(&self) -> Vec<Position> {
        self.habitable
            .iter()
            .copied()
            .filter(|&position| self.cells[index(self.width, position)].is_alive())
            .collect()
    }

    /// Number of living cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Displays the board in plaintext.
    ///
    /// Living cells are `o`, dead cells are `.`, and cells that cannot host
    /// life are spaces. Every row ends with a newline.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            for state in row {
                let c = match state {
                    LifeState::Alive => 'o',
                    LifeState::Dead => '.',
                    LifeState::NoLifePossible => ' ',
                };
                str.push(c);
            }
            str.push('\n');
        }
        str
    }
}

#[inline]
fn index(width: u32, position: Position) -> usize {
    position.y as usize * width as usize + position.x as usize
}
