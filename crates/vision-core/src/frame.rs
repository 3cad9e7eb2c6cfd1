//! Frame metadata and payload DTOs

use serde::{Deserialize, Serialize};

/// Shape of the most recently captured raw frame
///
/// Queried freshly from the engine on every read; never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameInfo {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Bytes per source row (may exceed `width * channels` due to padding)
    pub stride: i32,
    /// Number of interleaved channels
    pub channels: i32,
    /// Total frame size in bytes (`stride * height`)
    pub total_bytes: i32,
}

/// RGB frame payload, base64-encoded for JSON transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameBase64 {
    pub width: i32,
    pub height: i32,
    pub channels: i32,
    pub base64_data: String,
}

/// Single-channel edge image, base64-encoded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeImage {
    pub width: i32,
    pub height: i32,
    pub base64_data: String,
}
