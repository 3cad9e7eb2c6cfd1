//! Shared test support: an instrumented in-memory engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::time::Duration;

use vision_engine::{RawDetection, RawDetectionSet, RawFrameInfo, VisionEngine};

/// Frame shape the mock always reports: 4x2 BGR with padded rows.
pub const MOCK_FRAME: RawFrameInfo = RawFrameInfo {
    width: 4,
    height: 2,
    stride: 16,
    channels: 3,
    total_bytes: 32,
};

/// Observable state of a [`MockEngine`], shared with the test body.
pub struct MockState {
    pub start_ok: AtomicBool,
    pub load_ok: AtomicBool,
    pub frame_ok: AtomicBool,
    pub color_detected: AtomicBool,
    pub face_count: AtomicI32,
    pub circle_count: AtomicI32,

    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
    pub cascade_loads: AtomicUsize,
    pub last_rgb_buffer_len: AtomicUsize,
    pub last_native_buffer_len: AtomicUsize,

    active: AtomicUsize,
    pub max_active: AtomicUsize,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            start_ok: AtomicBool::new(true),
            load_ok: AtomicBool::new(true),
            frame_ok: AtomicBool::new(true),
            color_detected: AtomicBool::new(true),
            face_count: AtomicI32::new(2),
            circle_count: AtomicI32::new(3),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            cascade_loads: AtomicUsize::new(0),
            last_rgb_buffer_len: AtomicUsize::new(0),
            last_native_buffer_len: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }
}

/// RAII marker for "inside an engine call"; tracks the maximum number of
/// concurrent entries so tests can assert the facade serializes access.
struct Entry<'a>(&'a MockState);

impl MockState {
    fn enter(&self) -> Entry<'_> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        // widen the race window so overlapping callers would be caught
        std::thread::sleep(Duration::from_micros(200));
        Entry(self)
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
    }
}

fn detection_set(count: i32) -> RawDetectionSet {
    let mut set = RawDetectionSet::default();
    for (i, item) in set.items.iter_mut().enumerate() {
        *item = RawDetection {
            x: i as i32 * 10,
            y: i as i32 * 5,
            width: 20,
            height: 20,
            detected: true,
        };
    }
    set.count = count;
    set
}

/// Deterministic engine stand-in driven through [`MockState`].
pub struct MockEngine {
    state: Arc<MockState>,
}

impl MockEngine {
    pub fn new() -> (Self, Arc<MockState>) {
        let state = Arc::new(MockState::default());
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl VisionEngine for MockEngine {
    fn start_camera(&mut self) -> bool {
        let _entry = self.state.enter();
        self.state.starts.fetch_add(1, Ordering::SeqCst);
        self.state.start_ok.load(Ordering::SeqCst)
    }

    fn stop_camera(&mut self) {
        let _entry = self.state.enter();
        self.state.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn color_detection(&mut self) -> Option<RawDetection> {
        let _entry = self.state.enter();
        let detected = self.state.color_detected.load(Ordering::SeqCst);
        Some(RawDetection {
            x: 12,
            y: 34,
            width: 56,
            height: 78,
            detected,
        })
    }

    fn frame_info(&mut self) -> Option<RawFrameInfo> {
        let _entry = self.state.enter();
        self.state
            .frame_ok
            .load(Ordering::SeqCst)
            .then_some(MOCK_FRAME)
    }

    fn frame_bytes_native(&mut self, buf: &mut [u8]) -> bool {
        let _entry = self.state.enter();
        self.state
            .last_native_buffer_len
            .store(buf.len(), Ordering::SeqCst);
        for (i, b) in buf.iter_mut().enumerate() {
            *b = i as u8;
        }
        self.state.frame_ok.load(Ordering::SeqCst)
    }

    fn frame_bytes_rgb(&mut self, buf: &mut [u8]) -> bool {
        let _entry = self.state.enter();
        self.state
            .last_rgb_buffer_len
            .store(buf.len(), Ordering::SeqCst);
        buf.fill(0x55);
        self.state.frame_ok.load(Ordering::SeqCst)
    }

    fn load_cascade(&mut self, _path: &Path) -> bool {
        let _entry = self.state.enter();
        self.state.cascade_loads.fetch_add(1, Ordering::SeqCst);
        self.state.load_ok.load(Ordering::SeqCst)
    }

    fn detect_faces(&mut self) -> Option<RawDetectionSet> {
        let _entry = self.state.enter();
        Some(detection_set(self.state.face_count.load(Ordering::SeqCst)))
    }

    fn detect_circles(&mut self) -> Option<RawDetectionSet> {
        let _entry = self.state.enter();
        Some(detection_set(
            self.state.circle_count.load(Ordering::SeqCst),
        ))
    }

    fn detect_edges(&mut self, buf: &mut [u8]) -> Option<(i32, i32)> {
        let _entry = self.state.enter();
        if !self.state.frame_ok.load(Ordering::SeqCst) {
            return None;
        }
        buf.fill(0x7F);
        // one row shorter than the frame, so callers must honor the
        // dimensions we report rather than the ones they requested
        Some((MOCK_FRAME.width, MOCK_FRAME.height - 1))
    }
}

/// A path that is guaranteed not to exist.
pub fn missing_cascade_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "vision-test-missing-{}-cascade.xml",
        std::process::id()
    ))
}

/// Create an empty cascade file the existence check will accept.
pub fn existing_cascade_file(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "vision-test-{}-{}-cascade.xml",
        std::process::id(),
        tag
    ));
    std::fs::write(&path, b"<cascade/>").expect("write test cascade");
    path
}
