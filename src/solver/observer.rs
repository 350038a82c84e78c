//! Progress events and the observer interface
//!
//! The search is synchronous and single-threaded; after every placement and
//! every revert it hands the observer a borrowed snapshot of its state and
//! waits for the verdict. Observers double as the cancellation mechanism:
//! answering [`SearchSignal::Stop`] unwinds the search cooperatively.

use std::time::Duration;

use crate::solver::board::Board;

/// What one search step did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A number was written into an open cell
    Placed,
    /// A dead end removed the number again
    Reverted,
}

/// Observer verdict, consulted after every step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSignal {
    /// Keep searching
    Continue,
    /// Unwind and report the best placement found so far
    Stop,
}

/// Borrowed snapshot of search state, delivered once per step
///
/// All references point into the live search; they are only valid for the
/// duration of the callback.
#[derive(Debug)]
pub struct SearchEvent<'a> {
    /// Whether this step placed a number or reverted one
    pub kind: StepKind,
    /// Cell the step touched
    pub position: [i32; 2],
    /// Number written into or removed from the cell
    pub number: u32,
    /// Board state after the step
    pub board: &'a Board,
    /// Branches abandoned so far because no onward hop existed
    pub dead_ends: u64,
    /// Highest number placed at any point so far
    pub best_number: u32,
    /// Board snapshot from the moment the best number was placed
    pub best_board: &'a Board,
    /// Wall-clock time since the search started
    pub elapsed: Duration,
}

/// Receives search progress and steers cooperative cancellation
///
/// Implementations should return quickly; the search blocks for the
/// duration of each call.
pub trait SearchObserver {
    /// Handle one placement or revert and decide whether to continue
    fn on_step(&mut self, event: &SearchEvent<'_>) -> SearchSignal;
}

/// Observer that discards every event and never stops the search
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_step(&mut self, _event: &SearchEvent<'_>) -> SearchSignal {
        SearchSignal::Continue
    }
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent<'_>) -> SearchSignal,
{
    fn on_step(&mut self, event: &SearchEvent<'_>) -> SearchSignal {
        self(event)
    }
}
