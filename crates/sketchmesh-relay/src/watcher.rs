//! Polling watcher for conversion jobs.

use std::time::Duration;

use bytes::Bytes;
use tokio::time;
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::messages::{ConvertResponse, ModelType, SketchStyle, StatusResponse};

/// Client-side collaborator that submits a sketch export and polls the job
/// on a fixed interval until it reaches a terminal status.
///
/// Dropping the future returned by [`wait`](Self::wait) stops the polling
/// (consumer teardown). There is no retry logic; network errors surface
/// immediately as [`RelayError`].
#[derive(Debug, Clone)]
pub struct JobWatcher {
    client: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
}

impl JobWatcher {
    /// Watch jobs on the service at `base_url`, polling every
    /// `poll_interval`.
    pub fn new(base_url: impl Into<String>, poll_interval: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval,
        }
    }

    /// Build a watcher from relay settings (upstream base URL and poll
    /// cadence).
    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.upstream_base.clone(), config.poll_interval)
    }

    /// Submit a PNG sketch export for conversion.
    pub async fn submit(
        &self,
        png: Vec<u8>,
        model_type: ModelType,
        sketch_style: SketchStyle,
    ) -> Result<ConvertResponse, RelayError> {
        let form = reqwest::multipart::Form::new()
            .part(
                "sketch",
                reqwest::multipart::Part::bytes(png)
                    .file_name("sketch.png")
                    .mime_str("image/png")?,
            )
            .text("model_type", model_type.as_str())
            .text("sketch_style", sketch_style.as_str());

        let resp = self
            .client
            .post(format!("{}/convert", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Fetch the job status once.
    pub async fn poll(&self, mesh_id: &str) -> Result<StatusResponse, RelayError> {
        let resp = self
            .client
            .get(format!("{}/convert/{}/status", self.base_url, mesh_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Poll until the job reaches a terminal status (completed or failed).
    pub async fn wait(&self, mesh_id: &str) -> Result<StatusResponse, RelayError> {
        let mut ticker = time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let status = self.poll(mesh_id).await?;
            debug!(
                mesh_id,
                status = ?status.status,
                progress = ?status.progress,
                "job poll"
            );
            if status.status.is_terminal() {
                return Ok(status);
            }
        }
    }

    /// Download the finished mesh (GLB bytes).
    pub async fn download(&self, mesh_id: &str) -> Result<Bytes, RelayError> {
        let resp = self
            .client
            .get(format!("{}/convert/{}/download", self.base_url, mesh_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let watcher = JobWatcher::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(watcher.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_from_config_uses_configured_interval() {
        let mut config = RelayConfig::default();
        config.poll_interval = Duration::from_millis(500);
        config.upstream_base = "http://mesh:8000".to_string();

        let watcher = JobWatcher::from_config(&config);
        assert_eq!(watcher.poll_interval, Duration::from_millis(500));
        assert_eq!(watcher.base_url, "http://mesh:8000");
    }
}
