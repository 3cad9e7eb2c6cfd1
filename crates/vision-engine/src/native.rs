//! FFI implementation of [`VisionEngine`] backed by the NeuroCComVision
//! shared library.

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use tracing::warn;

use crate::raw::{RawDetection, RawDetectionSet, RawFrameInfo};
use crate::VisionEngine;

mod ffi {
    use super::*;

    #[link(name = "NeuroCComVision")]
    unsafe extern "C" {
        pub fn StartCamera() -> bool;
        pub fn StopCamera();
        pub fn GetFrame(result: *mut RawDetection) -> bool;
        pub fn GetFrameInfo(info: *mut RawFrameInfo) -> bool;
        pub fn GetFrameBytes(buffer: *mut u8, buffer_size: c_int) -> bool;
        pub fn GetFrameBytesRgb(buffer: *mut u8, buffer_size: c_int) -> bool;
        pub fn LoadFaceCascade(cascade_path: *const c_char) -> bool;
        pub fn DetectFaces(result: *mut RawDetectionSet) -> bool;
        pub fn DetectEdges(
            output_buffer: *mut u8,
            buffer_size: c_int,
            out_width: *mut c_int,
            out_height: *mut c_int,
        ) -> bool;
        pub fn DetectCircles(result: *mut RawDetectionSet) -> bool;
    }
}

/// Handle to the process-wide native engine.
///
/// The library manages a single implicit camera instance, so there is no
/// per-handle state here; exclusivity is the caller's job (the session
/// facade serializes all access behind one lock).
pub struct NativeEngine {
    _private: (),
}

impl NativeEngine {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionEngine for NativeEngine {
    fn start_camera(&mut self) -> bool {
        unsafe { ffi::StartCamera() }
    }

    fn stop_camera(&mut self) {
        unsafe { ffi::StopCamera() }
    }

    fn color_detection(&mut self) -> Option<RawDetection> {
        let mut result = RawDetection::default();
        unsafe { ffi::GetFrame(&mut result) }.then_some(result)
    }

    fn frame_info(&mut self) -> Option<RawFrameInfo> {
        let mut info = RawFrameInfo::default();
        unsafe { ffi::GetFrameInfo(&mut info) }.then_some(info)
    }

    fn frame_bytes_native(&mut self, buf: &mut [u8]) -> bool {
        unsafe { ffi::GetFrameBytes(buf.as_mut_ptr(), buf.len() as c_int) }
    }

    fn frame_bytes_rgb(&mut self, buf: &mut [u8]) -> bool {
        unsafe { ffi::GetFrameBytesRgb(buf.as_mut_ptr(), buf.len() as c_int) }
    }

    fn load_cascade(&mut self, path: &Path) -> bool {
        let Some(path_str) = path.to_str() else {
            warn!(?path, "cascade path is not valid UTF-8");
            return false;
        };
        let Ok(c_path) = CString::new(path_str) else {
            warn!(?path, "cascade path contains interior NUL");
            return false;
        };
        unsafe { ffi::LoadFaceCascade(c_path.as_ptr()) }
    }

    fn detect_faces(&mut self) -> Option<RawDetectionSet> {
        let mut result = RawDetectionSet::default();
        unsafe { ffi::DetectFaces(&mut result) }.then_some(result)
    }

    fn detect_circles(&mut self) -> Option<RawDetectionSet> {
        let mut result = RawDetectionSet::default();
        unsafe { ffi::DetectCircles(&mut result) }.then_some(result)
    }

    fn detect_edges(&mut self, buf: &mut [u8]) -> Option<(i32, i32)> {
        let mut out_width: c_int = 0;
        let mut out_height: c_int = 0;
        let ok = unsafe {
            ffi::DetectEdges(
                buf.as_mut_ptr(),
                buf.len() as c_int,
                &mut out_width,
                &mut out_height,
            )
        };
        ok.then_some((out_width, out_height))
    }
}
