//! Recursive backtracking engine and the solve entry point
//!
//! Depth-first search over hop placements. Each frame owns one number:
//! it orders the open destinations reachable from the previous number,
//! places into each in turn, and recurses for the successor. Failed
//! subtrees are reverted in place, so a single board serves the whole
//! search and independent solves share no state.

use std::time::Instant;

use crate::io::error::{Result, invalid_parameter};
use crate::solver::board::Board;
use crate::solver::moves::{open_moves, order_moves};
use crate::solver::observer::{SearchEvent, SearchObserver, SearchSignal, StepKind};
use crate::solver::outcome::{BestSoFar, Outcome, SearchStats};

/// How a search subtree ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchFlow {
    /// Every number up to N² was placed
    Solved,
    /// All candidate branches were tried and failed
    Exhausted,
    /// An observer requested a stop
    Cancelled,
}

/// Accumulator state owned by the top-level solve call
///
/// Threaded by exclusive reference through every recursive frame.
struct SearchContext {
    dead_ends: u64,
    best: BestSoFar,
    started: Instant,
}

/// Backtracking solver for one grid size
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    size: usize,
}

impl Solver {
    /// Create a solver for an N×N board
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] when `size` is zero
    /// or exceeds [`crate::io::configuration::MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        // Board::new owns the size validation
        Board::new(size)?;
        Ok(Self { size })
    }

    /// Grid dimension this solver searches
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total cell count N², the target for a complete placement
    pub const fn cell_count(&self) -> u32 {
        (self.size * self.size) as u32
    }

    /// Search for a complete placement of 1..=N² starting at `start`
    ///
    /// Seeds the start cell with 1 and searches depth-first for the rest.
    /// The observer hears every placement and revert and may stop the
    /// search at any step; pass [`crate::solver::NullObserver`] to run
    /// uninstrumented.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] when `start` lies
    /// outside the board.
    pub fn solve_from(
        &self,
        start: [i32; 2],
        observer: &mut dyn SearchObserver,
    ) -> Result<Outcome> {
        let mut board = Board::new(self.size)?;
        if !board.in_bounds(start) {
            return Err(invalid_parameter(
                "start",
                &format!("({}, {})", start[0], start[1]),
                &format!("both coordinates must lie in 0..{}", self.size),
            ));
        }

        board.place(start, 1);
        let mut context = SearchContext {
            dead_ends: 0,
            best: BestSoFar {
                number: 1,
                board: board.clone(),
            },
            started: Instant::now(),
        };

        let flow = search(&mut board, start, 2, &mut context, observer);
        let stats = SearchStats {
            dead_ends: context.dead_ends,
            elapsed: context.started.elapsed(),
        };

        Ok(match flow {
            SearchFlow::Solved => Outcome::Solved { board, stats },
            SearchFlow::Exhausted => Outcome::Exhausted {
                best: context.best,
                stats,
            },
            SearchFlow::Cancelled => Outcome::Cancelled {
                best: context.best,
                halted: board,
                stats,
            },
        })
    }
}

/// Place `number` and everything after it, hopping onward from `position`
///
/// Success short-circuits with the completed placements still on the
/// board. Exhaustion reverts every placement this frame made, so the
/// board leaves the frame exactly as it entered. Cancellation unwinds
/// without reverting, freezing the board mid-search.
fn search(
    board: &mut Board,
    position: [i32; 2],
    number: u32,
    context: &mut SearchContext,
    observer: &mut dyn SearchObserver,
) -> SearchFlow {
    if number > board.cell_count() {
        return SearchFlow::Solved;
    }

    let mut moves = open_moves(board, position);
    order_moves(board, &mut moves);

    for candidate in moves {
        board.place(candidate, number);
        if number > context.best.number {
            context.best.number = number;
            context.best.board = board.clone();
        }
        if report(board, context, observer, StepKind::Placed, candidate, number)
            == SearchSignal::Stop
        {
            return SearchFlow::Cancelled;
        }

        match search(board, candidate, number + 1, context, observer) {
            SearchFlow::Exhausted => {
                board.clear(candidate);
                context.dead_ends += 1;
                if report(board, context, observer, StepKind::Reverted, candidate, number)
                    == SearchSignal::Stop
                {
                    return SearchFlow::Cancelled;
                }
            }
            flow @ (SearchFlow::Solved | SearchFlow::Cancelled) => return flow,
        }
    }

    SearchFlow::Exhausted
}

/// Deliver one step to the observer
fn report(
    board: &Board,
    context: &SearchContext,
    observer: &mut dyn SearchObserver,
    kind: StepKind,
    position: [i32; 2],
    number: u32,
) -> SearchSignal {
    let event = SearchEvent {
        kind,
        position,
        number,
        board,
        dead_ends: context.dead_ends,
        best_number: context.best.number,
        best_board: &context.best.board,
        elapsed: context.started.elapsed(),
    };
    observer.on_step(&event)
}
