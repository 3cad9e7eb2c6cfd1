//! Camera lifecycle DTOs

use serde::{Deserialize, Serialize};

/// Camera status report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraStatus {
    /// Whether the camera device is currently open
    pub running: bool,

    /// Human-readable status line
    pub status: String,
}

impl CameraStatus {
    pub fn new(running: bool) -> Self {
        Self {
            running,
            status: if running {
                "camera active".to_string()
            } else {
                "camera stopped".to_string()
            },
        }
    }
}

/// Standard info/error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
