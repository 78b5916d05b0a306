//! SketchMesh Relay Library
//!
//! Thin HTTP layer between the editor and the mesh-generation service:
//! an axum proxy for submit/status/download and a polling job watcher.

pub mod config;
pub mod error;
pub mod messages;
pub mod proxy;
pub mod watcher;

pub use config::RelayConfig;
pub use error::RelayError;
pub use messages::{ConvertResponse, HealthResponse, JobStatus, ModelType, SketchStyle, StatusResponse};
pub use watcher::JobWatcher;
