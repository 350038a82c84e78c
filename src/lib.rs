//! Backtracking solver for the hop puzzle
//!
//! Fill an N×N grid with the numbers 1..N² such that each number lands a
//! hop away from its predecessor: three cells in a straight line or two
//! cells diagonally. The solver seeds a chosen start cell with 1 and
//! searches depth-first, trying the most constrained destination first
//! and keeping the best partial placement for reporting when a start
//! admits no complete solution.

#![forbid(unsafe_code)]

/// Input/output operations, host presentation, and error handling
pub mod io;
/// Core search functionality: board, moves, engine, and observation
pub mod solver;

pub use io::error::{Result, SolverError};
