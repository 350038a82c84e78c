//! Core search functionality
//!
//! This module contains everything the search itself needs:
//! - Board state and cell occupancy
//! - Hop move generation and constraint-based ordering
//! - The recursive backtracking engine
//! - Progress observation and cooperative cancellation

/// Board state and cell occupancy
pub mod board;
/// Hop move generation and constraint-based ordering
pub mod moves;
/// Progress events and the observer interface
pub mod observer;
/// Terminal search outcomes and accumulated statistics
pub mod outcome;
/// Recursive backtracking engine and the solve entry point
pub mod search;

pub use board::Board;
pub use observer::{NullObserver, SearchEvent, SearchObserver, SearchSignal, StepKind};
pub use outcome::{BestSoFar, Outcome, SearchStats};
pub use search::Solver;
