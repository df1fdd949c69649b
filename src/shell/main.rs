use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use certificate_cart::shared::infrastructure::cart_repository::in_memory::InMemoryCartRepository;
use certificate_cart::shell::config::ServerConfig;
use certificate_cart::shell::http::router;
use certificate_cart::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();

    fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    // In-memory carts for now
    let repository = Arc::new(InMemoryCartRepository::new());
    let state = AppState::new(
        repository,
        config.identity_header.clone(),
        config.write_attempts,
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    tracing::info!(%addr, identity_header = %config.identity_header, "certificate cart listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
