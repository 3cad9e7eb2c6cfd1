//! Detection result DTOs

use serde::{Deserialize, Serialize};

/// Bounding box of a detected object
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Single color-segmentation result
///
/// `detected = false` with no bounding box is a normal outcome (nothing in
/// frame), not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDetection {
    pub detected: bool,
    pub bounding_box: Option<BoundingBox>,
}

/// One entry of a multi-object detection result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionItem {
    pub index: i32,
    pub bounding_box: BoundingBox,
}

/// Capped, indexed collection of bounding boxes (faces, circles)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionSet {
    /// Detection kind identifier ("face" or "circle")
    #[serde(rename = "type")]
    pub kind: String,

    /// Number of detections, never more than the engine's cap of 32
    pub count: i32,

    /// Detections in engine order, indexed `0..count`
    pub detections: Vec<DetectionItem>,
}
