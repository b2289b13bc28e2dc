use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use activities::shared::infrastructure::activity_store::in_memory::InMemoryActivityRegistry;
use activities::shell::config::Config;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Registry lives for the whole process; a restart resets it to the seed set.
    let registry = Arc::new(InMemoryActivityRegistry::seeded());
    let state = AppState::in_memory(registry);
    let app = router(state, &config.static_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
