//! Input/output operations and host-side presentation
//!
//! This module contains everything between the search and the outside
//! world:
//! - Command-line interface and solve orchestration
//! - Console, progress bar, and image presentation
//! - Error types shared across the crate

/// Command-line interface and solve orchestration
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Terminal rendering of live search state and final outcomes
pub mod console;
/// Error types for solver preconditions and host I/O failures
pub mod error;
/// PNG export of boards with placement-order coloring
pub mod image;
/// Host-side observer wiring for display, capture, and interrupts
pub mod monitor;
/// Live search progress display
pub mod progress;
/// Step capture and GIF generation for search visualization
pub mod visualization;
