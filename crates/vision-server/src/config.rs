//! Environment-driven server configuration

use std::env;
use std::path::PathBuf;

/// Default cascade file name, expected next to the executable.
const CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Default cascade location used when a load request gives no path
    pub cascade_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: env::var("VISION_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("VISION_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            cascade_path: env::var("VISION_CASCADE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_cascade_path()),
        }
    }
}

impl AppConfig {
    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cascade next to the executable, matching the deployment layout; falls
/// back to the working directory when the executable path is unavailable.
fn default_cascade_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CASCADE_FILE)))
        .unwrap_or_else(|| PathBuf::from(CASCADE_FILE))
}
