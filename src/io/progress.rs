//! Live search progress display

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_REDRAW_HZ;
use crate::solver::observer::{SearchEvent, SearchObserver, SearchSignal, StepKind};

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking the best placement reached
///
/// The bar position follows the best-so-far number rather than the live
/// one, so it never runs backwards while the search backtracks. The live
/// number and the dead-end count ride along in the message.
pub struct SearchProgressBar {
    bar: ProgressBar,
}

impl SearchProgressBar {
    /// Create a bar spanning the numbers a complete placement needs
    pub fn new(cell_count: u32) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(u64::from(cell_count)),
            ProgressDrawTarget::stderr_with_hz(PROGRESS_REDRAW_HZ),
        );
        bar.set_style(SEARCH_STYLE.clone());
        Self { bar }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for SearchProgressBar {
    fn on_step(&mut self, event: &SearchEvent<'_>) -> SearchSignal {
        self.bar.set_position(u64::from(event.best_number));
        let verb = match event.kind {
            StepKind::Placed => "placing",
            StepKind::Reverted => "backtracking",
        };
        self.bar
            .set_message(format!("{verb} {} (dead ends: {})", event.number, event.dead_ends));
        SearchSignal::Continue
    }
}
