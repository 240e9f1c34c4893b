//! Window errors

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The library refused to create the requested window
    #[error("Cannot create window \"{title}\" ({width}x{height})")]
    CreationFailed {
        /// Requested title
        title: String,
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// An operation needed a bound window but none exists
    #[error("{operation}: undefined window")]
    UndefinedWindow {
        /// Name of the operation that was refused
        operation: &'static str,
    },

    /// Fullscreen was requested but the system reports no primary monitor
    #[error("No primary monitor available")]
    NoPrimaryMonitor,

    /// The per-frame callback failed
    #[error("Frame callback failed: {0}")]
    Frame(String),
}

impl WindowError {
    pub(crate) const fn undefined(operation: &'static str) -> Self {
        Self::UndefinedWindow { operation }
    }
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
