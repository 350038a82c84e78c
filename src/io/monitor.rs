//! Host-side observer wiring for display, capture, and interrupts

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::io::console::BoardRenderer;
use crate::io::progress::SearchProgressBar;
use crate::io::visualization::FrameCapture;
use crate::solver::observer::{SearchEvent, SearchObserver, SearchSignal, StepKind};

/// Fans the search event stream out to the active host surfaces
///
/// Owns whichever display and capture surfaces the command line enabled,
/// forwards each event to all of them, and then polls the interrupt flag,
/// translating Ctrl-C into a cooperative stop.
pub struct SearchMonitor {
    interrupted: Arc<AtomicBool>,
    bar: Option<SearchProgressBar>,
    renderer: Option<BoardRenderer>,
    capture: Option<FrameCapture>,
}

impl SearchMonitor {
    /// Create a monitor with no display surfaces attached
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self {
            interrupted,
            bar: None,
            renderer: None,
            capture: None,
        }
    }

    /// Attach a live progress bar
    #[must_use]
    pub fn with_bar(mut self, bar: SearchProgressBar) -> Self {
        self.bar = Some(bar);
        self
    }

    /// Attach a full-board terminal renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: BoardRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Attach a step capture for GIF export
    #[must_use]
    pub fn with_capture(mut self, capture: FrameCapture) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Record the seeded start placement, which precedes all search events
    pub fn record_seed(&mut self, position: [i32; 2]) {
        if let Some(capture) = &mut self.capture {
            capture.record_placement(position, 1);
        }
    }

    /// Tear down the display and hand back the capture for export
    pub fn finish(self) -> Option<FrameCapture> {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
        self.capture
    }
}

impl SearchObserver for SearchMonitor {
    fn on_step(&mut self, event: &SearchEvent<'_>) -> SearchSignal {
        if let Some(bar) = &mut self.bar {
            bar.on_step(event);
        }
        if let Some(renderer) = &mut self.renderer {
            renderer.on_step(event);
        }
        if let Some(capture) = &mut self.capture {
            match event.kind {
                StepKind::Placed => capture.record_placement(event.position, event.number),
                StepKind::Reverted => capture.record_revert(event.position),
            }
        }

        if self.interrupted.load(Ordering::Relaxed) {
            SearchSignal::Stop
        } else {
            SearchSignal::Continue
        }
    }
}
