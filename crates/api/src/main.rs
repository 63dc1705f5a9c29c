use std::sync::Arc;

use anyhow::Context;

use depot_infra::DepotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    depot_observability::init();

    let config = DepotConfig::from_env();
    let services = depot_api::app::services::build_services(&config).await?;
    let app = depot_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
