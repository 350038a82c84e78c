//! Hop move generation and constraint-based ordering
//!
//! A number may hop from its predecessor by three cells in a straight line
//! or two cells diagonally. Candidate ordering follows the Warnsdorff
//! heuristic of trying the most constrained destination first, which keeps
//! the tree of live branches shallow on solvable boards.

use crate::solver::board::Board;

/// The eight hop offsets in generation order
///
/// The order is load-bearing: ordering sorts stably by freedom alone, so
/// equally constrained candidates are explored in this sequence.
pub const MOVE_OFFSETS: [[i32; 2]; 8] = [
    [3, 0],
    [-3, 0],
    [0, 3],
    [0, -3],
    [2, 2],
    [-2, -2],
    [2, -2],
    [-2, 2],
];

/// All eight hop destinations from a position, unfiltered
pub fn candidate_moves(position: [i32; 2]) -> [[i32; 2]; 8] {
    MOVE_OFFSETS.map(|offset| [position[0] + offset[0], position[1] + offset[1]])
}

/// Hop destinations from a position that land on open cells
pub fn open_moves(board: &Board, position: [i32; 2]) -> Vec<[i32; 2]> {
    candidate_moves(position)
        .into_iter()
        .filter(|&destination| board.is_open(destination))
        .collect()
}

/// Count the open onward hops available from a position
///
/// A destination with degree 0 is a potential terminus: placing there is
/// only useful for the final number.
pub fn open_degree(board: &Board, position: [i32; 2]) -> usize {
    candidate_moves(position)
        .iter()
        .filter(|&&destination| board.is_open(destination))
        .count()
}

/// Order candidate destinations most constrained first
///
/// Sorts ascending by each candidate's own open degree against the current
/// board. The sort is stable with no secondary key, so ties keep the
/// generation order of [`MOVE_OFFSETS`].
pub fn order_moves(board: &Board, moves: &mut [[i32; 2]]) {
    moves.sort_by_key(|&destination| open_degree(board, destination));
}
