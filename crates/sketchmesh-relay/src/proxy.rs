//! Axum routes proxying the editor's conversion requests upstream.
//!
//! The relay adds CORS, request logging and field validation, then passes
//! the upstream's status code and body through unchanged so the editor
//! sees the service's own responses.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::messages::{HealthResponse, ModelType, SketchStyle};

/// Shared relay state.
pub struct AppState {
    client: reqwest::Client,
    config: RelayConfig,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Build the relay router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/convert", post(convert))
        .route("/api/convert/{mesh_id}/status", get(status))
        .route("/api/convert/{mesh_id}/download", get(download))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Forward a sketch submission to the mesh service.
async fn convert(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, RelayError> {
    let request_id = Uuid::new_v4();

    let mut sketch: Option<(String, Vec<u8>)> = None;
    let mut model_type: Option<ModelType> = None;
    let mut sketch_style = SketchStyle::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("sketch") => {
                let file_name = field.file_name().unwrap_or("sketch.png").to_string();
                let data = field.bytes().await?;
                sketch = Some((file_name, data.to_vec()));
            }
            Some("model_type") => {
                let value = field.text().await?;
                model_type = Some(match ModelType::parse(&value) {
                    Some(m) => m,
                    None => {
                        return Err(RelayError::InvalidField {
                            field: "model_type",
                            value,
                        });
                    }
                });
            }
            Some("sketch_style") => {
                let value = field.text().await?;
                sketch_style = match SketchStyle::parse(&value) {
                    Some(s) => s,
                    None => {
                        return Err(RelayError::InvalidField {
                            field: "sketch_style",
                            value,
                        });
                    }
                };
            }
            _ => {}
        }
    }

    let (file_name, data) = sketch.ok_or(RelayError::MissingField("sketch"))?;
    let model_type = model_type.ok_or(RelayError::MissingField("model_type"))?;

    info!(
        %request_id,
        model_type = model_type.as_str(),
        sketch_style = sketch_style.as_str(),
        sketch_bytes = data.len(),
        "forwarding conversion"
    );

    let form = reqwest::multipart::Form::new()
        .part(
            "sketch",
            reqwest::multipart::Part::bytes(data)
                .file_name(file_name)
                .mime_str("image/png")?,
        )
        .text("model_type", model_type.as_str())
        .text("sketch_style", sketch_style.as_str());

    let upstream = state
        .client
        .post(format!("{}/convert", state.config.upstream_base))
        .multipart(form)
        .send()
        .await?;
    passthrough(upstream, "application/json").await
}

/// Proxy the job-status snapshot.
async fn status(
    State(state): State<Arc<AppState>>,
    Path(mesh_id): Path<String>,
) -> Result<Response, RelayError> {
    let upstream = state
        .client
        .get(format!(
            "{}/convert/{}/status",
            state.config.upstream_base, mesh_id
        ))
        .send()
        .await?;
    passthrough(upstream, "application/json").await
}

/// Proxy the finished mesh download.
async fn download(
    State(state): State<Arc<AppState>>,
    Path(mesh_id): Path<String>,
) -> Result<Response, RelayError> {
    let upstream = state
        .client
        .get(format!(
            "{}/convert/{}/download",
            state.config.upstream_base, mesh_id
        ))
        .send()
        .await?;
    passthrough(upstream, "model/gltf-binary").await
}

/// Local liveness plus upstream health passthrough.
async fn health(State(state): State<Arc<AppState>>) -> Response {
    let url = format!("{}/health", state.config.upstream_base);
    match state.client.get(url).send().await {
        Ok(resp) if resp.status().is_success() => match resp.json::<HealthResponse>().await {
            Ok(upstream) => Json(upstream).into_response(),
            Err(e) => {
                warn!("upstream health response unreadable: {e}");
                degraded_health()
            }
        },
        Ok(resp) => {
            warn!("upstream health returned {}", resp.status());
            degraded_health()
        }
        Err(e) => {
            warn!("upstream health unreachable: {e}");
            degraded_health()
        }
    }
}

fn degraded_health() -> Response {
    Json(HealthResponse {
        status: "degraded".to_string(),
        models_ready: false,
        sketch2mesh_available: false,
    })
    .into_response()
}

/// Relay the upstream response's status, content type, attachment filename
/// and body unchanged.
async fn passthrough(
    upstream: reqwest::Response,
    fallback_content_type: &str,
) -> Result<Response, RelayError> {
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_content_type)
        .to_string();
    // The download endpoint names the mesh file via Content-Disposition.
    let content_disposition = upstream.headers().get(header::CONTENT_DISPOSITION).cloned();
    let body = upstream.bytes().await?;
    let mut response = (status, [(header::CONTENT_TYPE, content_type)], body).into_response();
    if let Some(value) = content_disposition {
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, value);
    }
    Ok(response)
}
