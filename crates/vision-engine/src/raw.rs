//! `#[repr(C)]` mirrors of the engine's ABI structs and the buffer-size
//! arithmetic the ABI requires.

/// Hard cap on detections per query, fixed by the engine's ABI.
pub const MAX_DETECTIONS: usize = 32;

/// Single detection result as laid out by the engine.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDetection {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub detected: bool,
}

/// Multi-object detection result: a fixed 32-slot array plus a count.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawDetectionSet {
    pub items: [RawDetection; MAX_DETECTIONS],
    pub count: i32,
}

impl Default for RawDetectionSet {
    fn default() -> Self {
        Self {
            items: [RawDetection::default(); MAX_DETECTIONS],
            count: 0,
        }
    }
}

impl RawDetectionSet {
    /// Detections actually filled in by the engine.
    ///
    /// The count is clamped to `[0, 32]` before use; an out-of-range value
    /// from the engine must never index past the fixed array.
    pub fn valid_items(&self) -> &[RawDetection] {
        let count = self.count.clamp(0, MAX_DETECTIONS as i32) as usize;
        &self.items[..count]
    }
}

/// Frame metadata as laid out by the engine.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFrameInfo {
    pub width: i32,
    pub height: i32,
    /// Bytes per row, including any alignment padding
    pub stride: i32,
    pub channels: i32,
    /// `stride * height`
    pub total_bytes: i32,
}

/// Buffer length for [`crate::VisionEngine::frame_bytes_rgb`]:
/// tightly packed RGB, no row padding.
pub fn rgb_buffer_len(info: &RawFrameInfo) -> usize {
    info.width as usize * info.height as usize * 3
}

/// Buffer length for [`crate::VisionEngine::frame_bytes_native`]:
/// rows as the engine stores them, padding included.
pub fn native_buffer_len(info: &RawFrameInfo) -> usize {
    info.stride as usize * info.height as usize
}

/// Buffer length for [`crate::VisionEngine::detect_edges`]:
/// one byte per pixel, no padding.
pub fn edge_buffer_len(info: &RawFrameInfo) -> usize {
    info.width as usize * info.height as usize
}
