use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_gateway::{
    artifact::ArtifactStore,
    config::GatewayConfig,
    models::ModelParams,
    server::{router, AppState},
    GenerativeModel,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = GatewayConfig::from_env()?;
    let store = ArtifactStore::new(&config.upload_dir).await?;
    let backend = Arc::new(GenerativeModel::new(
        &config.api_key,
        ModelParams::builder().model(&config.model).build(),
    ));

    let app = router(AppState::new(backend, store));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Gemini gateway listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
