//! # vision-engine
//!
//! Gateway to the external NeuroC computer-vision engine.
//!
//! The engine is an opaque native library reached through a fixed C ABI
//! (four structs, nine entry points). This crate owns everything that
//! contract implies: the `#[repr(C)]` mirror structs, the buffer-size
//! arithmetic the ABI requires, and the FFI declarations themselves. It
//! holds no session state and performs no business logic.
//!
//! The [`VisionEngine`] trait is the seam the session facade consumes; the
//! real [`NativeEngine`] implementation is only compiled with the `native`
//! feature since the engine library is not present on every build machine.

pub mod raw;

#[cfg(feature = "native")]
pub mod native;

pub use raw::{
    MAX_DETECTIONS, RawDetection, RawDetectionSet, RawFrameInfo, edge_buffer_len,
    native_buffer_len, rgb_buffer_len,
};

#[cfg(feature = "native")]
pub use native::NativeEngine;

use std::path::Path;

/// Boundary contract to the vision engine.
///
/// Every method maps to exactly one ABI entry point and blocks for the
/// duration of the underlying call. Callers are responsible for
/// serialization; the engine is not reentrant.
pub trait VisionEngine: Send {
    /// Open the physical camera device.
    fn start_camera(&mut self) -> bool;

    /// Release the camera device. Idempotent, assumed non-failing.
    fn stop_camera(&mut self);

    /// Run color segmentation on the current frame.
    fn color_detection(&mut self) -> Option<RawDetection>;

    /// Describe the shape of the most recent frame.
    fn frame_info(&mut self) -> Option<RawFrameInfo>;

    /// Fill `buf` with raw frame bytes in the engine's native channel order.
    /// `buf` must be sized with [`native_buffer_len`].
    fn frame_bytes_native(&mut self, buf: &mut [u8]) -> bool;

    /// Fill `buf` with frame bytes converted to RGB order.
    /// `buf` must be sized with [`rgb_buffer_len`].
    fn frame_bytes_rgb(&mut self, buf: &mut [u8]) -> bool;

    /// Load a face-detection cascade from `path`. Must succeed before
    /// [`VisionEngine::detect_faces`] can return data.
    fn load_cascade(&mut self, path: &Path) -> bool;

    /// Run face detection. At most [`MAX_DETECTIONS`] results.
    fn detect_faces(&mut self) -> Option<RawDetectionSet>;

    /// Run circle detection. At most [`MAX_DETECTIONS`] results.
    fn detect_circles(&mut self) -> Option<RawDetectionSet>;

    /// Run edge detection into `buf` (sized with [`edge_buffer_len`]).
    /// Returns the dimensions of the produced edge image, which may differ
    /// from the requested frame size.
    fn detect_edges(&mut self, buf: &mut [u8]) -> Option<(i32, i32)>;
}
