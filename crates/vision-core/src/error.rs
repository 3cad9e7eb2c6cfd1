//! Error types for vision service operations
//!
//! Only the message-carrying lifecycle operations (start, stop, load cascade)
//! produce errors. "Not available" conditions (camera stopped, no frame yet)
//! are expressed as `Option` returns by the facade and never reach this enum.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for vision service operations
pub type Result<T> = std::result::Result<T, VisionError>;

/// Vision service error types
#[derive(Debug, Error)]
pub enum VisionError {
    /// Camera device could not be acquired
    #[error("camera could not be opened (hardware error or device busy)")]
    CameraFailed,

    /// Cascade file does not exist at the resolved path
    #[error("cascade file not found: {0}")]
    CascadeNotFound(PathBuf),

    /// Engine rejected the cascade file
    #[error("cascade could not be loaded (invalid format?)")]
    CascadeInvalid,
}

impl VisionError {
    /// Whether the caller can fix this by changing a parameter
    /// (as opposed to a hardware/environment problem).
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            VisionError::CascadeNotFound(_) | VisionError::CascadeInvalid
        )
    }
}
