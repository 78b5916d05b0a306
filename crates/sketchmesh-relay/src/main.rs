//! SketchMesh relay server entry point.

use std::sync::Arc;

use sketchmesh_relay::config::RelayConfig;
use sketchmesh_relay::proxy::{AppState, router};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sketchmesh_relay=info,tower_http=info".into()),
        )
        .init();

    let config = RelayConfig::from_env();
    info!(upstream = %config.upstream_base, "SketchMesh relay starting");

    let bind = config.bind;
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await.unwrap();
    info!("relay listening on {bind}");
    axum::serve(listener, app).await.unwrap();
}
