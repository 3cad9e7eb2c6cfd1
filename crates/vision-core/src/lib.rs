//! # vision-core
//!
//! Core types for the NeuroC vision service.
//!
//! This crate provides the pieces shared between the session facade and its
//! transports:
//! - Camera status and message DTOs
//! - Frame and detection DTOs
//! - The error taxonomy for lifecycle operations
//! - The uncompressed BMP encoder used for frame downloads

pub mod bmp;
pub mod camera;
pub mod detection;
pub mod error;
pub mod frame;

pub use camera::{ApiMessage, CameraStatus};
pub use detection::{BoundingBox, ColorDetection, DetectionItem, DetectionSet};
pub use error::{Result, VisionError};
pub use frame::{EdgeImage, FrameBase64, FrameInfo};
