//! Error types for mandelplot operations.
//!
//! The evaluation engine itself has no recoverable failure modes. Every error
//! here reports a caller-side contract violation (bad dimensions, short
//! buffer, inconsistent configuration) or a failure to start the worker pool,
//! so that the engine can refuse the call instead of writing out of bounds.

use std::fmt;

/// Errors that can occur when rendering a divergence plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelplotError {
    /// Input validation error (dimensions, bounds, thread count, weights).
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
    /// The output buffer cannot hold `width * height` values.
    BufferError {
        /// Number of values the render needs.
        required: usize,
        /// Number of values the caller provided.
        actual: usize,
    },
    /// A row assignment is not a partition of the image rows.
    PartitionError {
        /// Offending row index.
        row: usize,
        /// Human-readable error message.
        message: String,
    },
    /// The worker thread pool could not be created.
    ThreadPoolError {
        /// Number of threads that were requested.
        num_threads: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for MandelplotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MandelplotError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            MandelplotError::BufferError { required, actual } => write!(
                f,
                "Output buffer too small: {} values required, {} provided",
                required, actual
            ),
            MandelplotError::PartitionError { row, message } => {
                write!(f, "Invalid row assignment: {} (row {})", message, row)
            }
            MandelplotError::ThreadPoolError {
                num_threads,
                message,
            } => write!(
                f,
                "Failed to start worker pool: {} ({} threads requested)",
                message, num_threads
            ),
        }
    }
}

impl std::error::Error for MandelplotError {}

/// Result type alias for mandelplot operations.
pub type Result<T> = std::result::Result<T, MandelplotError>;

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> MandelplotError {
    MandelplotError::ValidationError {
        message: message.into(),
    }
}

/// Creates a buffer error.
pub fn buffer_error(required: usize, actual: usize) -> MandelplotError {
    MandelplotError::BufferError { required, actual }
}

/// Creates a partition error.
pub fn partition_error(row: usize, message: impl Into<String>) -> MandelplotError {
    MandelplotError::PartitionError {
        row,
        message: message.into(),
    }
}

/// Creates a thread pool error.
pub fn thread_pool_error(num_threads: usize, message: impl Into<String>) -> MandelplotError {
    MandelplotError::ThreadPoolError {
        num_threads,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("width must be at least 2");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("width must be at least 2"));
    }

    #[test]
    fn test_buffer_error_display() {
        let error = buffer_error(1024, 1000);
        let display = format!("{}", error);
        assert!(display.contains("Output buffer too small"));
        assert!(display.contains("1024 values required"));
        assert!(display.contains("1000 provided"));
    }

    #[test]
    fn test_partition_error_display() {
        let error = partition_error(17, "row assigned to more than one worker");
        let display = format!("{}", error);
        assert!(display.contains("Invalid row assignment"));
        assert!(display.contains("row 17"));
        assert!(display.contains("more than one worker"));
    }

    #[test]
    fn test_thread_pool_error_display() {
        let error = thread_pool_error(8, "resource unavailable");
        let display = format!("{}", error);
        assert!(display.contains("Failed to start worker pool"));
        assert!(display.contains("8 threads requested"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = buffer_error(16, 8);
        let error2 = buffer_error(16, 8);
        let error3 = buffer_error(32, 8);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = partition_error(3, "test error");

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
