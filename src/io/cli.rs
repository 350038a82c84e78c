//! Command-line interface for solving hop puzzles from a chosen start cell

use clap::Parser;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::io::configuration::{DEFAULT_GRID_SIZE, GIF_FRAME_DELAY_MS};
use crate::io::console::{BoardRenderer, print_outcome};
use crate::io::error::{Result, SolverError};
use crate::io::image::{color_ramp, export_board_as_png};
use crate::io::monitor::SearchMonitor;
use crate::io::progress::SearchProgressBar;
use crate::io::visualization::FrameCapture;
use crate::solver::search::Solver;

#[derive(Parser)]
#[command(name = "hopgrid")]
#[command(
    author,
    version,
    about = "Fill an NxN grid with 1..N² by hops of three straight or two diagonal"
)]
/// Command-line arguments for the puzzle solver
// Display and export toggles are independent flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Starting row, prompted for when omitted
    #[arg(value_name = "ROW", allow_negative_numbers = true)]
    pub row: Option<i32>,

    /// Starting column, prompted for when omitted
    #[arg(value_name = "COL", allow_negative_numbers = true)]
    pub col: Option<i32>,

    /// Grid dimension
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Repaint the whole board on every placement and backtrack
    #[arg(short, long)]
    pub watch: bool,

    /// Milliseconds to pause after each repaint (only with --watch)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Suppress live progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the search as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Export the final board as a PNG image
    #[arg(short, long)]
    pub image: bool,
}

impl Cli {
    /// Check if the live progress bar should be displayed
    ///
    /// Watch mode owns the terminal, so the bar stands down for it.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.watch
    }
}

/// Orchestrates one solve: start selection, observers, search, exports
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the solve end to end
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size or start cell is invalid, console
    /// interaction fails, the interrupt handler cannot be installed, or an
    /// export cannot be written.
    // Allow print for user feedback on exported files
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        let solver = Solver::new(self.cli.size)?;
        let start = self.resolve_start(solver.size())?;

        let interrupted = Arc::new(AtomicBool::new(false));
        install_interrupt_flag(&interrupted)?;

        let mut monitor = SearchMonitor::new(interrupted);
        if self.cli.should_show_progress() {
            monitor = monitor.with_bar(SearchProgressBar::new(solver.cell_count()));
        }
        if self.cli.watch {
            monitor = monitor.with_renderer(BoardRenderer::new(Duration::from_millis(
                self.cli.delay,
            )));
        }
        if self.cli.visualize {
            monitor = monitor.with_capture(FrameCapture::new(
                solver.size(),
                color_ramp(solver.cell_count()),
            ));
        }
        monitor.record_seed(start);

        let outcome = solver.solve_from(start, &mut monitor)?;
        let capture = monitor.finish();

        print_outcome(start, &outcome);

        if let Some(capture) = capture {
            let gif_path = Self::visualization_path(start);
            capture.export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
            if capture.is_truncated() {
                eprintln!("Capture limit reached; animation covers the search up to that point");
            }
            eprintln!("Search animation written to {gif_path}");
        }

        if self.cli.image {
            let png_path = Self::image_path(start);
            export_board_as_png(
                outcome.board(),
                &color_ramp(solver.cell_count()),
                &png_path,
            )?;
            eprintln!("Board image written to {png_path}");
        }

        Ok(())
    }

    /// Take the start cell from the command line, prompting for whatever
    /// coordinates were omitted
    fn resolve_start(&self, size: usize) -> Result<[i32; 2]> {
        let row = match self.cli.row {
            Some(row) => row,
            None => prompt_coordinate("row", size)?,
        };
        let col = match self.cli.col {
            Some(col) => col,
            None => prompt_coordinate("column", size)?,
        };
        Ok([row, col])
    }

    fn visualization_path(start: [i32; 2]) -> String {
        format!("search_r{}_c{}.gif", start[0], start[1])
    }

    fn image_path(start: [i32; 2]) -> String {
        format!("board_r{}_c{}.png", start[0], start[1])
    }
}

/// Prompt until a valid coordinate in `0..size` is entered
///
/// Unparseable and out-of-range input re-prompts rather than failing, so
/// a typo does not cost the user their session.
///
/// # Errors
///
/// Returns an error when standard input reaches end of file or a console
/// read or write fails.
// Prompts are interactive output, inseparable from reading the reply
#[allow(clippy::print_stdout)]
pub fn prompt_coordinate(label: &str, size: usize) -> Result<i32> {
    let stdin = std::io::stdin();
    loop {
        print!("Enter the {label} coordinate (0 - {}): ", size - 1);
        std::io::stdout()
            .flush()
            .map_err(|e| SolverError::Console {
                operation: "flush prompt",
                source: e,
            })?;

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| SolverError::Console {
                operation: "read coordinate",
                source: e,
            })?;
        if bytes_read == 0 {
            return Err(SolverError::Console {
                operation: "read coordinate",
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input ended before a valid coordinate",
                ),
            });
        }

        let accepted = line
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|&value| value >= 0 && (value as usize) < size);
        if let Some(value) = accepted {
            return Ok(value);
        }
    }
}

/// Arrange for Ctrl-C to flip the shared interrupt flag
///
/// The handler does nothing but store; the search notices the flag at its
/// next step and unwinds cooperatively.
fn install_interrupt_flag(interrupted: &Arc<AtomicBool>) -> Result<()> {
    let flag = Arc::clone(interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)).map_err(|e| {
        SolverError::SignalHandler {
            reason: e.to_string(),
        }
    })
}
