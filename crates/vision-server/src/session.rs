//! Camera session facade
//!
//! One camera, one owner: every public operation takes the session lock for
//! its entire duration, engine calls included. The underlying device is not
//! reentrant, so correctness is deliberately prioritized over throughput —
//! callers block while another operation is in flight, and a hang in the
//! engine hangs the facade.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, info};

use vision_core::bmp;
use vision_core::{
    BoundingBox, CameraStatus, ColorDetection, DetectionItem, DetectionSet, EdgeImage,
    FrameBase64, FrameInfo, Result, VisionError,
};
use vision_engine::{
    RawDetectionSet, RawFrameInfo, VisionEngine, edge_buffer_len, native_buffer_len,
    rgb_buffer_len,
};

/// Process-wide camera session.
///
/// Constructed once at startup and handed to every transport as an
/// `Arc<VisionSession>`; there is no ambient global. Frame and detection
/// buffers are allocated fresh per request and dropped after encoding —
/// the session itself owns no pixel data.
pub struct VisionSession {
    inner: Mutex<SessionInner>,
    default_cascade: PathBuf,
}

struct SessionInner {
    engine: Box<dyn VisionEngine>,
    running: bool,
    cascade_loaded: bool,
}

impl VisionSession {
    /// Create a stopped session around the given engine.
    ///
    /// `default_cascade` is the path used by [`VisionSession::start`]'s
    /// automatic cascade load and by [`VisionSession::load_cascade`] when no
    /// explicit path is given.
    pub fn new(engine: Box<dyn VisionEngine>, default_cascade: PathBuf) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                engine,
                running: false,
                cascade_loaded: false,
            }),
            default_cascade,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // Poisoning means a panic happened inside the critical section;
        // at that point device state is unknown and aborting is correct.
        self.inner.lock().expect("session lock poisoned")
    }

    /// Current lifecycle status. Never fails.
    pub fn status(&self) -> CameraStatus {
        CameraStatus::new(self.lock().running)
    }

    /// Open the camera device. Idempotent: starting a running session is a
    /// success, not an error.
    ///
    /// On first start the default cascade is loaded best-effort; its failure
    /// is swallowed and does not affect the reported outcome, which depends
    /// only on the device acquire.
    pub fn start(&self) -> Result<String> {
        let mut inner = self.lock();

        if inner.running {
            return Ok("camera already running".to_string());
        }
        if !inner.engine.start_camera() {
            return Err(VisionError::CameraFailed);
        }
        inner.running = true;
        info!("camera started");

        if !inner.cascade_loaded {
            match Self::load_cascade_locked(&mut inner, &self.default_cascade) {
                Ok(_) => info!(path = %self.default_cascade.display(), "cascade auto-loaded"),
                Err(e) => debug!(error = %e, "automatic cascade load skipped"),
            }
        }

        Ok("camera started".to_string())
    }

    /// Release the camera device. Idempotent and never failing: the engine's
    /// release call has no error path.
    ///
    /// Note that `cascade_loaded` survives a stop, so a later start skips
    /// the automatic reload. This mirrors the engine's historical behavior;
    /// see the `stop_does_not_reset_cascade` test.
    pub fn stop(&self) -> Result<String> {
        let mut inner = self.lock();

        if !inner.running {
            return Ok("camera was already stopped".to_string());
        }
        inner.engine.stop_camera();
        inner.running = false;
        info!("camera stopped");
        Ok("camera stopped".to_string())
    }

    /// Load a face-detection cascade, from `path` or the default location.
    ///
    /// Independent of the running state: a cascade may be loaded before the
    /// camera is started.
    pub fn load_cascade(&self, path: Option<&Path>) -> Result<String> {
        let resolved = path.unwrap_or(&self.default_cascade).to_path_buf();
        let mut inner = self.lock();
        Self::load_cascade_locked(&mut inner, &resolved)
    }

    fn load_cascade_locked(inner: &mut SessionInner, path: &Path) -> Result<String> {
        // Checked up front so a missing file yields a clear message instead
        // of an opaque engine-side failure.
        if !path.exists() {
            return Err(VisionError::CascadeNotFound(path.to_path_buf()));
        }
        if !inner.engine.load_cascade(path) {
            return Err(VisionError::CascadeInvalid);
        }
        inner.cascade_loaded = true;
        info!(path = %path.display(), "cascade loaded");
        Ok("cascade loaded".to_string())
    }

    /// Shape of the current frame, or `None` when the camera is stopped or
    /// the engine has no frame yet.
    pub fn frame_info(&self) -> Option<FrameInfo> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        inner.engine.frame_info().map(to_frame_info)
    }

    /// Current frame as tightly packed RGB, base64-encoded.
    pub fn frame_rgb(&self) -> Option<FrameBase64> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        let info = inner.engine.frame_info()?;
        let mut buf = vec![0u8; rgb_buffer_len(&info)];
        if !inner.engine.frame_bytes_rgb(&mut buf) {
            return None;
        }
        Some(FrameBase64 {
            width: info.width,
            height: info.height,
            channels: 3,
            base64_data: BASE64.encode(&buf),
        })
    }

    /// Current frame as a downloadable BMP file.
    ///
    /// Fetches the engine's native (BGR, possibly row-padded) bytes — sized
    /// by stride, not width — and hands them to the BMP encoder.
    pub fn frame_bmp(&self) -> Option<Vec<u8>> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        let info = inner.engine.frame_info()?;
        let mut buf = vec![0u8; native_buffer_len(&info)];
        if !inner.engine.frame_bytes_native(&mut buf) {
            return None;
        }
        Some(bmp::encode_bgr24(
            &buf,
            info.width as usize,
            info.height as usize,
            info.stride as usize,
        ))
    }

    /// Color segmentation on the current frame. A miss (`detected = false`)
    /// is a normal outcome, not an error.
    pub fn detect_color(&self) -> Option<ColorDetection> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        let raw = inner.engine.color_detection()?;
        Some(ColorDetection {
            detected: raw.detected,
            bounding_box: raw.detected.then_some(BoundingBox {
                x: raw.x,
                y: raw.y,
                width: raw.width,
                height: raw.height,
            }),
        })
    }

    /// Face detection. Requires a running camera AND a loaded cascade;
    /// without a cascade this is unavailable even while running.
    pub fn detect_faces(&self) -> Option<DetectionSet> {
        let mut inner = self.lock();
        if !inner.running || !inner.cascade_loaded {
            return None;
        }
        let raw = inner.engine.detect_faces()?;
        Some(to_detection_set("face", &raw))
    }

    /// Circle detection. Requires a running camera.
    pub fn detect_circles(&self) -> Option<DetectionSet> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        let raw = inner.engine.detect_circles()?;
        Some(to_detection_set("circle", &raw))
    }

    /// Edge detection. The engine reports the dimensions of the image it
    /// produced, which may differ from the requested frame size; the result
    /// is encoded with the reported dimensions.
    pub fn detect_edges(&self) -> Option<EdgeImage> {
        let mut inner = self.lock();
        if !inner.running {
            return None;
        }
        let info = inner.engine.frame_info()?;
        let mut buf = vec![0u8; edge_buffer_len(&info)];
        let (width, height) = inner.engine.detect_edges(&mut buf)?;
        // never index past the buffer we actually handed to the engine
        let len = (width as usize * height as usize).min(buf.len());
        Some(EdgeImage {
            width,
            height,
            base64_data: BASE64.encode(&buf[..len]),
        })
    }

    /// Best-effort release on process termination. Failures are not
    /// surfaced; there is nobody left to report them to.
    pub fn shutdown(&self) {
        let mut inner = self.lock();
        if inner.running {
            inner.engine.stop_camera();
            inner.running = false;
            info!("camera released on shutdown");
        }
    }
}

fn to_frame_info(raw: RawFrameInfo) -> FrameInfo {
    FrameInfo {
        width: raw.width,
        height: raw.height,
        stride: raw.stride,
        channels: raw.channels,
        total_bytes: raw.total_bytes,
    }
}

fn to_detection_set(kind: &str, raw: &RawDetectionSet) -> DetectionSet {
    let detections: Vec<DetectionItem> = raw
        .valid_items()
        .iter()
        .enumerate()
        .map(|(index, d)| DetectionItem {
            index: index as i32,
            bounding_box: BoundingBox {
                x: d.x,
                y: d.y,
                width: d.width,
                height: d.height,
            },
        })
        .collect();
    DetectionSet {
        kind: kind.to_string(),
        count: detections.len() as i32,
        detections,
    }
}
