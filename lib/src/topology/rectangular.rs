//! Bounded rectangles.

use super::DIRECTIONS;
use crate::cells::Position;

/// Pushes the neighbors inside the rectangle, clipping at the borders.
pub(super) fn push_neighbors(width: u32, height: u32, position: Position, out: &mut Vec<Position>) {
    for (dx, dy) in DIRECTIONS {
        let x = i64::from(position.x) + dx;
        let y = i64::from(position.y) + dy;
        if (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y) {
            out.push(Position::new(x as u32, y as u32));
        }
    }
}
