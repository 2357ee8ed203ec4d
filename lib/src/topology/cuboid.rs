//! The surface of a box, unfolded into a cross.
//!
//! Neighbors across a fold are resolved with a seam table. The table works
//! on a virtual grid which is the storage grid enlarged by one ring of
//! cells, so a virtual coordinate is the real one plus `(1, 1)`. Each seam
//! maps a virtual cell just outside a face to the real cell that touches the
//! face once the box is folded.

use super::DIRECTIONS;
use crate::cells::Position;
use std::collections::HashMap;

/// A coordinate in the virtual grid.
type Virtual = (u32, u32);

/// Size of the storage grid.
///
/// Saturates for boxes too large to store; those never pass
/// [`check_size`].
pub(super) fn storage_size(width: u32, height: u32, depth: u32) -> (u32, u32) {
    (
        width.saturating_add(depth).saturating_mul(2),
        depth.saturating_mul(2).saturating_add(height),
    )
}

/// Checks that the storage grid and the virtual ring around it fit in
/// `u32` coordinates.
///
/// Returns the name of the first direction that does not fit.
pub(super) fn check_size(width: u32, height: u32, depth: u32) -> Result<(), &'static str> {
    width
        .checked_add(depth)
        .and_then(|n| n.checked_mul(2))
        .and_then(|n| n.checked_add(2))
        .ok_or("width")?;
    depth
        .checked_mul(2)
        .and_then(|n| n.checked_add(height))
        .and_then(|n| n.checked_add(2))
        .ok_or("height")?;
    Ok(())
}

/// Whether a position lies on the cross.
pub(super) fn is_habitable(width: u32, height: u32, depth: u32, position: Position) -> bool {
    (depth..depth.saturating_add(width)).contains(&position.x)
        || (depth..depth.saturating_add(height)).contains(&position.y)
}

/// The 14 seams of the unfolded box.
///
/// The names say which face borders which: the first face is the one whose
/// outside is looked up, the second is where the lookup lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    TopToLeft,
    TopToRight,
    BottomToLeft,
    BottomToRight,
    LeftToTop,
    RightToTop,
    LeftToBottom,
    RightToBottom,
    BackToTop,
    BackToBottom,
    TopToBack,
    BottomToBack,
    LeftToBack,
    BackToLeft,
}

impl Edge {
    const ALL: [Edge; 14] = [
        Edge::TopToLeft,
        Edge::TopToRight,
        Edge::BottomToLeft,
        Edge::BottomToRight,
        Edge::LeftToTop,
        Edge::RightToTop,
        Edge::LeftToBottom,
        Edge::RightToBottom,
        Edge::BackToTop,
        Edge::BackToBottom,
        Edge::TopToBack,
        Edge::BottomToBack,
        Edge::LeftToBack,
        Edge::BackToLeft,
    ];

    /// Number of cells along the seam.
    fn len(self, width: u32, height: u32, depth: u32) -> u32 {
        match self {
            Edge::BackToTop | Edge::BackToBottom | Edge::TopToBack | Edge::BottomToBack => width,
            Edge::LeftToBack | Edge::BackToLeft => height,
            _ => depth,
        }
    }

    /// The `i`-th link of the seam, as `(outside, target)`.
    fn link(self, i: u32, width: u32, height: u32, depth: u32) -> (Virtual, Virtual) {
        let (w, h, d) = (width, height, depth);
        match self {
            Edge::TopToLeft => ((d, i + 1), (i + 1, d + 1)),
            Edge::TopToRight => ((d + w + 1, i + 1), (2 * d + w - i, d + 1)),
            Edge::BottomToLeft => ((d, d + h + i + 1), (d - i, d + h)),
            Edge::BottomToRight => ((d + w + 1, d + h + i + 1), (d + w + 1 + i, d + h)),
            Edge::LeftToTop => ((i + 1, d), (d + 1, i + 1)),
            Edge::RightToTop => ((d + w + i + 1, d), (d + w, d - i)),
            Edge::LeftToBottom => ((i + 1, d + h + 1), (d + 1, 2 * d + h - i)),
            Edge::RightToBottom => ((d + w + 1 + i, d + h + 1), (d + w, d + h + 1 + i)),
            Edge::BackToTop => ((2 * d + w + i + 1, d), (d + w - i, 1)),
            Edge::BackToBottom => ((2 * d + w + i + 1, d + h + 1), (d + w - i, 2 * d + h)),
            Edge::TopToBack => ((d + i + 1, 0), (2 * d + 2 * w - i, d + 1)),
            Edge::BottomToBack => ((d + i + 1, 2 * d + h + 1), (2 * d + 2 * w - i, d + h)),
            Edge::LeftToBack => ((0, d + i + 1), (2 * d + 2 * w, d + i + 1)),
            Edge::BackToLeft => ((2 * d + 2 * w + 1, d + i + 1), (1, d + i + 1)),
        }
    }
}

/// The seam table of a box.
///
/// One-to-many: a virtual cell next to a corner of the cross lies on two
/// seams at once.
#[derive(Clone, Debug)]
pub(super) struct Seams {
    storage_width: u32,
    storage_height: u32,
    links: HashMap<Virtual, Vec<Virtual>>,
}

impl Seams {
    pub(super) fn new(width: u32, height: u32, depth: u32) -> Self {
        let (storage_width, storage_height) = storage_size(width, height, depth);
        let mut links: HashMap<Virtual, Vec<Virtual>> = HashMap::new();
        for edge in Edge::ALL {
            for i in 0..edge.len(width, height, depth) {
                let (outside, target) = edge.link(i, width, height, depth);
                links.entry(outside).or_default().push(target);
            }
        }
        Seams {
            storage_width,
            storage_height,
            links,
        }
    }

    /// Pushes the distinct neighbors of a habitable position, in the order
    /// they are first seen.
    pub(super) fn push_neighbors(&self, position: Position, out: &mut Vec<Position>) {
        let start = out.len();
        let cell = (position.x + 1, position.y + 1);
        for (dx, dy) in DIRECTIONS {
            let x = i64::from(cell.0) + dx;
            let y = i64::from(cell.1) + dy;
            // Virtual coordinates of a real cell's neighbors are never negative.
            let next = (x as u32, y as u32);
            if let Some(targets) = self.links.get(&next) {
                for &target in targets.iter().filter(|&&target| target != cell) {
                    push_unique(out, start, to_real(target));
                }
            } else if (1..=self.storage_width).contains(&next.0)
                && (1..=self.storage_height).contains(&next.1)
            {
                push_unique(out, start, to_real(next));
            }
        }
    }
}

fn to_real((x, y): Virtual) -> Position {
    Position::new(x - 1, y - 1)
}

fn push_unique(out: &mut Vec<Position>, start: usize, position: Position) {
    if !out[start..].contains(&position) {
        out.push(position);
    }
}
