//! # vision-server
//!
//! Camera session facade and HTTP API for the NeuroC vision engine.
//!
//! This crate provides:
//! - [`VisionSession`], the process-wide facade that owns device lifecycle
//!   state and serializes all engine access behind one lock
//! - The axum router exposing the camera/detection/frame REST surface
//! - Environment-driven configuration

pub mod config;
pub mod session;
pub mod web;

pub use config::AppConfig;
pub use session::VisionSession;

#[cfg(test)]
pub(crate) mod testutil;
