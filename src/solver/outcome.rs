//! Terminal search outcomes and accumulated statistics

use std::time::Duration;

use crate::solver::board::Board;

/// Longest placement sequence seen at any point during a search
///
/// Updated on every new high-water mark, so it survives the backtracking
/// that later unwinds the placements it records.
#[derive(Debug, Clone)]
pub struct BestSoFar {
    /// Highest number placed
    pub number: u32,
    /// Board snapshot taken when that number was placed
    pub board: Board,
}

/// Counters accumulated over one solve call
#[derive(Debug, Clone, Copy)]
pub struct SearchStats {
    /// Branches abandoned because no onward hop existed
    pub dead_ends: u64,
    /// Wall-clock duration of the search
    pub elapsed: Duration,
}

/// Terminal result of one solve call
///
/// Every variant carries the statistics and enough board state to report
/// something useful; a failed search still shows its best attempt.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Every cell was filled
    Solved {
        /// The completed board
        board: Board,
        /// Search counters
        stats: SearchStats,
    },
    /// The whole search tree was explored without filling the board
    Exhausted {
        /// Longest placement sequence reached
        best: BestSoFar,
        /// Search counters
        stats: SearchStats,
    },
    /// An observer answered [`crate::solver::SearchSignal::Stop`] mid-search
    Cancelled {
        /// Longest placement sequence reached
        best: BestSoFar,
        /// Live board frozen at the point the search stopped
        halted: Board,
        /// Search counters
        stats: SearchStats,
    },
}

impl Outcome {
    /// Search counters, whatever the verdict
    pub const fn stats(&self) -> SearchStats {
        match self {
            Self::Solved { stats, .. }
            | Self::Exhausted { stats, .. }
            | Self::Cancelled { stats, .. } => *stats,
        }
    }

    /// The most informative board: the solution, or the best attempt
    pub const fn board(&self) -> &Board {
        match self {
            Self::Solved { board, .. } => board,
            Self::Exhausted { best, .. } | Self::Cancelled { best, .. } => &best.board,
        }
    }

    /// Highest number placed at any point, N² for a solved board
    pub const fn highest_number(&self) -> u32 {
        match self {
            Self::Solved { board, .. } => board.cell_count(),
            Self::Exhausted { best, .. } | Self::Cancelled { best, .. } => best.number,
        }
    }

    /// Check whether the board was completely filled
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}
