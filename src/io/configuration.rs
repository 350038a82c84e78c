//! Solver constants and runtime configuration defaults

/// Grid dimension used when none is given on the command line
pub const DEFAULT_GRID_SIZE: usize = 10;

// The search recurses once per placed number, so depth reaches N².
// The cap keeps worst-case stack use bounded.
/// Maximum allowed grid dimension
pub const MAX_GRID_SIZE: usize = 100;

// Progress bar display settings
/// Redraw rate for the live progress bar
pub const PROGRESS_REDRAW_HZ: u8 = 20;

// Output settings
/// Side length of one grid cell in exported images, in pixels
pub const CELL_PIXELS: u32 = 16;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to an exported GIF; longer searches are strided
pub const MAX_GIF_FRAMES: usize = 600;
/// Upper bound on recorded search steps; recording stops once reached
pub const MAX_CAPTURED_STEPS: usize = 200_000;
