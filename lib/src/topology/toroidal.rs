//! Tori: both axes wrap around.

use super::DIRECTIONS;
use crate::cells::Position;

/// Pushes all 8 neighbors, wrapping both coordinates.
///
/// Duplicates are kept. On an axis of length 1 a cell is its own neighbor.
pub(super) fn push_neighbors(width: u32, height: u32, position: Position, out: &mut Vec<Position>) {
    let (width, height) = (i64::from(width), i64::from(height));
    for (dx, dy) in DIRECTIONS {
        let x = (i64::from(position.x) + dx).rem_euclid(width);
        let y = (i64::from(position.y) + dy).rem_euclid(height);
        out.push(Position::new(x as u32, y as u32));
    }
}
