//! Error types for solver preconditions and host I/O failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver and host operations
#[derive(Debug)]
pub enum SolverError {
    /// Parameter validation failed before the search started
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Terminal interaction failed
    ///
    /// Raised when reading a coordinate prompt from stdin fails or the
    /// input stream ends before a valid coordinate is supplied.
    Console {
        /// Description of the console operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Interrupt handler could not be registered
    SignalHandler {
        /// Description of the registration failure
        reason: String,
    },

    /// Failed to encode or save an exported image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Console { operation, source } => {
                write!(f, "Console error during {operation}: {source}")
            }
            Self::SignalHandler { reason } => {
                write!(f, "Failed to register interrupt handler: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Console { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::SignalHandler { .. } => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
