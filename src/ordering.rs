//! Center-first move ordering
//!
//! Centrally-located moves participate in more candidate win-lines, so
//! searching them first tightens the alpha-beta bounds earlier and produces
//! more cutoffs. The ordering is a pure, deterministic transform: it never
//! consults heuristic scores, and equidistant cells keep their row-major
//! order.

use crate::board::{Board, Coord};

/// Manhattan distance from a cell to the board center, in doubled
/// coordinates so even-sized boards (whose center falls between cells)
/// stay integer-exact.
pub fn center_distance(coord: Coord, size: usize) -> usize {
    let center = size - 1; // doubled center coordinate on both axes
    (2 * coord.row).abs_diff(center) + (2 * coord.col).abs_diff(center)
}

/// Legal moves sorted center-first with a stable row-major tie-break
pub fn center_ordered(board: &Board) -> Vec<Coord> {
    let size = board.size();
    let mut moves: Vec<Coord> = board.legal_moves().collect();
    moves.sort_by_key(|&mv| center_distance(mv, size));
    moves
}
