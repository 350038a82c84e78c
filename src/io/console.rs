//! Terminal rendering of live search state and final outcomes

use std::io::Write;
use std::time::Duration;

use crate::solver::observer::{SearchEvent, SearchObserver, SearchSignal, StepKind};
use crate::solver::outcome::Outcome;

/// ANSI sequence that clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Repaints the whole board on every search step
///
/// Shows the search thinking: clear screen, stats header, grid. Painting
/// happens unconditionally on every event, so this observer trades speed
/// for visibility; an optional per-step delay slows the replay further.
#[derive(Debug)]
pub struct BoardRenderer {
    out: std::io::Stdout,
    step_delay: Duration,
}

impl BoardRenderer {
    /// Create a renderer that pauses for `step_delay` after each repaint
    pub fn new(step_delay: Duration) -> Self {
        Self {
            out: std::io::stdout(),
            step_delay,
        }
    }

    fn paint(&mut self, event: &SearchEvent<'_>) -> std::io::Result<()> {
        let verb = match event.kind {
            StepKind::Placed => "Placing",
            StepKind::Reverted => "Backtracking",
        };

        let mut handle = self.out.lock();
        write!(handle, "{CLEAR_SCREEN}")?;
        writeln!(
            handle,
            "{verb} number: {} at position: ({}, {})",
            event.number, event.position[0], event.position[1]
        )?;
        writeln!(handle, "Dead ends: {}", event.dead_ends)?;
        writeln!(handle, "Highest number reached so far: {}", event.best_number)?;
        writeln!(handle, "Elapsed time: {:.2} seconds", event.elapsed.as_secs_f64())?;
        writeln!(handle, "Current grid state:")?;
        write!(handle, "{}", event.board)?;
        handle.flush()
    }
}

impl SearchObserver for BoardRenderer {
    fn on_step(&mut self, event: &SearchEvent<'_>) -> SearchSignal {
        // A full terminal or closed pipe should not abort the search
        let _ = self.paint(event);
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }
        SearchSignal::Continue
    }
}

/// Print the summary for a finished search
#[allow(clippy::print_stdout)]
pub fn print_outcome(start: [i32; 2], outcome: &Outcome) {
    let stats = outcome.stats();
    match outcome {
        Outcome::Solved { board, .. } => {
            println!(
                "Solution found when starting from ({}, {}) after {} dead ends in {:.2} seconds:",
                start[0],
                start[1],
                stats.dead_ends,
                stats.elapsed.as_secs_f64()
            );
            print!("{board}");
        }
        Outcome::Exhausted { best, .. } => {
            println!("No solution exists from ({}, {}).", start[0], start[1]);
            println!("Total time: {:.2} seconds", stats.elapsed.as_secs_f64());
            println!("Dead ends: {}", stats.dead_ends);
            println!(
                "Best attempt reached {} of {}:",
                best.number,
                best.board.cell_count()
            );
            print!("{}", best.board);
        }
        Outcome::Cancelled { best, halted, .. } => {
            println!("Interrupted by user.");
            println!("Final state:");
            print!("{halted}");
            println!("Dead ends: {}", stats.dead_ends);
            println!("Elapsed time: {:.2} seconds", stats.elapsed.as_secs_f64());
            println!(
                "Highest number placed was {}. The best attempt found was:",
                best.number
            );
            print!("{}", best.board);
        }
    }
}
