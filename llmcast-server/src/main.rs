use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use llmcast::{CastConfig, Caster};
use llmcast_server::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let caster = Arc::new(Caster::new(config)?);

    let bind = std::env::var("LLMCAST_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!("listening on {bind}");
    axum::serve(listener, router(caster)).await?;
    Ok(())
}

/// Configuration comes from a TOML file (`LLMCAST_CONFIG`) or, failing
/// that, from `LLMCAST_MODEL` / `LLMCAST_HOST` / `LLMCAST_SYSTEM`.
fn load_config() -> anyhow::Result<CastConfig> {
    if let Ok(path) = std::env::var("LLMCAST_CONFIG") {
        return CastConfig::from_file(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}"));
    }

    let model = std::env::var("LLMCAST_MODEL")
        .context("set LLMCAST_MODEL (or point LLMCAST_CONFIG at a TOML file)")?;
    let mut config = CastConfig::new(model);
    if let Ok(host) = std::env::var("LLMCAST_HOST") {
        config = config.with_host(host);
    }
    if let Ok(system) = std::env::var("LLMCAST_SYSTEM") {
        config = config.with_system(system);
    }
    Ok(config)
}
