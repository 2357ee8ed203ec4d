//! The simulation engine.
//!
//! One generation is computed in two phases. First every habitable cell is
//! classified in parallel against a frozen board. Then all births and deaths
//! are written in one batch. The board sits behind a reader-writer lock:
//! a step holds the upgradable read lock from start to end, so steps and
//! toggles never overlap, while plain readers keep seeing the old board
//! until the batch is written.

use crate::{
    board::Board,
    cells::{LifeState, Position},
    error::{Error, Result},
    rules::RuleSet,
};
use log::{debug, warn};
use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard};
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// No step is running.
    Idle,
    /// A step is running.
    Stepping,
}

/// Cells changed by a step or a toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Changes {
    /// The generation after the change.
    pub generation: u64,
    /// Every changed position exactly once, row by row.
    pub positions: Vec<Position>,
}

/// A flag to cancel a running step.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A callback invoked after every effective change.
pub type Observer = Arc<dyn Fn(&Changes) + Send + Sync>;

/// Runs the Game of Life on a [`Board`].
pub struct Engine {
    /// The board.
    board: RwLock<Board>,

    /// The active rule. A step clones the `Arc` when it starts.
    rule: RwLock<Arc<RuleSet>>,

    /// Number of steps done so far.
    generation: AtomicU64,

    /// Whether a step is running.
    stepping: AtomicBool,

    /// A dedicated thread pool. `None` means rayon's global pool.
    pool: Option<ThreadPool>,

    /// Number of threads requested for the dedicated pool.
    workers: Option<usize>,

    /// Notified after every step and every effective toggle.
    observer: RwLock<Option<Observer>>,
}

impl Engine {
    /// Creates an engine which runs on rayon's global thread pool.
    pub fn new(board: Board, rule: RuleSet) -> Self {
        Engine {
            board: RwLock::new(board),
            rule: RwLock::new(Arc::new(rule)),
            generation: AtomicU64::new(0),
            stepping: AtomicBool::new(false),
            pool: None,
            workers: None,
            observer: RwLock::new(None),
        }
    }

    /// Creates an engine with its own pool of `workers` threads.
    pub fn with_workers(board: Board, rule: RuleSet, workers: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("lifeboard-worker-{}", i))
            .build()
            .map_err(|e| Error::WorkerPool(e.to_string()))?;
        Ok(Engine {
            pool: Some(pool),
            workers: Some(workers),
            ..Engine::new(board, rule)
        })
    }

    /// Starts counting from `generation` instead of 0.
    pub(crate) fn set_generation(self, generation: u64) -> Self {
        self.generation.store(generation, Ordering::SeqCst);
        self
    }

    /// Number of threads of the dedicated pool, if any.
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Number of steps done so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a step is running.
    pub fn status(&self) -> Status {
        if self.stepping.load(Ordering::SeqCst) {
            Status::Stepping
        } else {
            Status::Idle
        }
    }

    /// The active rule.
    pub fn rule(&self) -> Arc<RuleSet> {
        Arc::clone(&self.rule.read())
    }

    /// Replaces the rule if the description is valid.
    ///
    /// An invalid description leaves the rule unchanged. A running step
    /// keeps using the rule it started with.
    pub fn change_rule(&self, description: &str) {
        match RuleSet::parse(description) {
            Ok(rule) => {
                debug!("rule changed to {}", rule);
                *self.rule.write() = Arc::new(rule);
            }
            Err(e) => warn!("rule not changed: {}", e),
        }
    }

    /// Sets the callback notified after every change.
    ///
    /// The callback runs after all locks are released, so it may call back
    /// into the engine, including `set_observer` itself. A replaced callback
    /// takes effect from the next notification.
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(&Changes) + Send + Sync + 'static,
    {
        *self.observer.write() = Some(Arc::new(observer));
    }

    /// Read access to the board.
    ///
    /// Holding the guard blocks the write phase of a step on other threads.
    /// Calling [`advance`](Self::advance) or [`toggle`](Self::toggle) on the
    /// same thread while the guard is alive deadlocks, since their write lock
    /// waits for the guard. Drop the guard first:
    ///
    /// ```rust
    /// use lifeboard_lib::{CancelToken, Config};
    ///
    /// let engine = Config::default().engine().unwrap();
    /// let board = engine.board();
    /// let alive = board.alive_count();
    /// drop(board);
    /// engine.advance(&CancelToken::new()).unwrap();
    /// assert_eq!(engine.board().alive_count(), alive);
    /// ```
    pub fn board(&self) -> RwLockReadGuard<'_, Board> {
        self.board.read()
    }

    /// The state of a cell.
    pub fn get(&self, position: Position) -> Result<LifeState> {
        self.board.read().get(position)
    }

    /// The states of many cells, all read from the same generation.
    pub fn get_many<I>(&self, positions: I) -> Result<Vec<LifeState>>
    where
        I: IntoIterator<Item = Position>,
    {
        self.board.read().get_many(positions)
    }

    /// Computes the next generation.
    ///
    /// If `cancel` is triggered before the new states are written, fails
    /// with [`Error::OperationCancelled`] and leaves the board and the
    /// generation counter untouched.
    pub fn advance(&self, cancel: &CancelToken) -> Result<Changes> {
        if cancel.is_cancelled() {
            return Err(Error::OperationCancelled);
        }
        let board = self.board.upgradable_read();
        let stepping = SteppingGuard::new(&self.stepping);
        let rule = self.rule();

        let (births, deaths) = self.classify(&board, &rule, cancel)?;

        let mut board = RwLockUpgradableReadGuard::upgrade(board);
        board.apply_changes(&births, &deaths)?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(board);
        drop(stepping);

        debug!(
            "generation {}: {} births, {} deaths",
            generation,
            births.len(),
            deaths.len()
        );
        let mut positions = births;
        positions.extend(deaths);
        positions.sort_unstable();
        let changes = Changes {
            generation,
            positions,
        };
        self.notify(&changes);
        Ok(changes)
    }

    /// Computes `steps` generations, one after another.
    ///
    /// Stops at the first error. Returns the changes of every step.
    pub fn advance_by(&self, steps: u64, cancel: &CancelToken) -> Result<Vec<Changes>> {
        (0..steps).map(|_| self.advance(cancel)).collect()
    }

    /// Flips a cell between alive and dead.
    ///
    /// A cell that cannot host life is left alone; the returned changes are
    /// then empty and the observer is not notified.
    pub fn toggle(&self, position: Position) -> Result<Changes> {
        let board = self.board.upgradable_read();
        let generation = self.generation();
        if !board.get(position)?.is_habitable() {
            return Ok(Changes {
                generation,
                positions: Vec::new(),
            });
        }
        let mut board = RwLockUpgradableReadGuard::upgrade(board);
        board.flip(position)?;
        drop(board);

        let changes = Changes {
            generation,
            positions: vec![position],
        };
        self.notify(&changes);
        Ok(changes)
    }

    /// Finds the births and deaths of the next generation.
    fn classify(
        &self,
        board: &Board,
        rule: &RuleSet,
        cancel: &CancelToken,
    ) -> Result<(Vec<Position>, Vec<Position>)> {
        let run = || {
            let cells = board.habitable_positions();
            let chunk_size = cells.len().div_ceil(rayon::current_num_threads()).max(1);
            cells
                .par_chunks(chunk_size)
                .map(|chunk| classify_chunk(board, rule, chunk, cancel))
                .collect::<Result<Vec<_>>>()
        };
        let parts = match &self.pool {
            Some(pool) => pool.install(run)?,
            None => run()?,
        };
        let mut births = Vec::new();
        let mut deaths = Vec::new();
        for (b, d) in parts {
            births.extend(b);
            deaths.extend(d);
        }
        Ok((births, deaths))
    }

    fn notify(&self, changes: &Changes) {
        let observer = self.observer.read().clone();
        if let Some(observer) = observer {
            observer(changes);
        }
    }
}

/// Classifies a slice of habitable cells.
fn classify_chunk(
    board: &Board,
    rule: &RuleSet,
    chunk: &[Position],
    cancel: &CancelToken,
) -> Result<(Vec<Position>, Vec<Position>)> {
    let mut births = Vec::new();
    let mut deaths = Vec::new();
    for &position in chunk {
        if cancel.is_cancelled() {
            return Err(Error::OperationCancelled);
        }
        let count = board.alive_neighbor_count(position);
        match board.get(position)? {
            LifeState::Alive if !rule.survives(count) => deaths.push(position),
            LifeState::Dead if rule.born(count) => births.push(position),
            _ => (),
        }
    }
    Ok((births, deaths))
}

/// Marks the engine as stepping while alive.
struct SteppingGuard<'a>(&'a AtomicBool);

impl<'a> SteppingGuard<'a> {
    fn new(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        SteppingGuard(flag)
    }
}

impl Drop for SteppingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
