//! Step capture and GIF generation for search visualization

use image::Frame;

use crate::io::configuration::{MAX_CAPTURED_STEPS, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::image::render_board;
use crate::solver::board::Board;

/// One recorded search step
#[derive(Debug, Clone, Copy)]
pub struct CapturedStep {
    /// Cell the step touched
    pub position: [i32; 2],
    /// Number written into the cell, or `None` for a revert
    pub number: Option<u32>,
}

/// Records placements and reverts for replay into an animated GIF
///
/// The search is captured as a step log rather than as frames, so that
/// frame skipping and rendering stay out of the hot path. Recording stops
/// silently once [`MAX_CAPTURED_STEPS`] is reached; a deep search then
/// yields a truncated animation rather than unbounded memory growth.
#[derive(Debug)]
pub struct FrameCapture {
    steps: Vec<CapturedStep>,
    size: usize,
    color_mapping: Vec<[u8; 4]>,
    truncated: bool,
}

impl FrameCapture {
    /// Create a capture for a board of the given size
    pub fn new(size: usize, color_mapping: Vec<[u8; 4]>) -> Self {
        Self {
            steps: Vec::with_capacity(1024),
            size,
            color_mapping,
            truncated: false,
        }
    }

    /// Record a number being written into a cell
    pub fn record_placement(&mut self, position: [i32; 2], number: u32) {
        self.record(CapturedStep {
            position,
            number: Some(number),
        });
    }

    /// Record a cell being reverted to unoccupied
    pub fn record_revert(&mut self, position: [i32; 2]) {
        self.record(CapturedStep {
            position,
            number: None,
        });
    }

    fn record(&mut self, step: CapturedStep) {
        if self.steps.len() >= MAX_CAPTURED_STEPS {
            self.truncated = true;
            return;
        }
        self.steps.push(step);
    }

    /// Total recorded steps
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the step log hit its cap and dropped later steps
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Export the captured search as a GIF with automatic frame skipping
    ///
    /// Frames are skipped on two axes: the requested delay is raised to
    /// what viewers reliably support (keeping the apparent speed by
    /// dropping intermediate frames), and long searches are strided so the
    /// output never exceeds [`MAX_GIF_FRAMES`] frames.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No search steps were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.steps.is_empty() {
            return Err(invalid_parameter(
                "capture",
                &"empty",
                &"no search steps were captured",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };
        let stride_cap = self.steps.len().div_ceil(MAX_GIF_FRAMES);
        let skip_factor = viewer_skip.max(stride_cap).max(1);

        let frames = self.generate_frames(effective_delay_ms, skip_factor)?;

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SolverError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SolverError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let mut board = Board::new(self.size)?;
        let mut frames = Vec::new();

        frames.push(self.render_frame(&board, delay_ms));

        for (index, step) in self.steps.iter().enumerate() {
            match step.number {
                Some(number) => board.place(step.position, number),
                None => board.clear(step.position),
            }

            if (index + 1) % skip_factor == 0 {
                frames.push(self.render_frame(&board, delay_ms));
            }
        }

        if self.steps.len() % skip_factor != 0 {
            frames.push(self.render_frame(&board, delay_ms));
        }

        // Hold the final state long enough to read
        let final_frame_delay = delay_ms * 25;
        if let Some(last_frame_img) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(final_frame_delay, 1),
            ));
        }

        Ok(frames)
    }

    fn render_frame(&self, board: &Board, delay_ms: u32) -> Frame {
        Frame::from_parts(
            render_board(board, &self.color_mapping),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
