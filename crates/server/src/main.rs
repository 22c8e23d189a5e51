use std::sync::Arc;

use datachat_api::{AppState, router};
use datachat_auth::{AuthGateway, TokenService};
use datachat_core::AppConfig;
use datachat_storage::{MemoryChatStore, MemoryUserStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, overrides) = match AppConfig::load_with_env() {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!(%err, "could not load configuration, falling back to defaults");
            (AppConfig::default(), Vec::new())
        }
    };
    for key in &overrides {
        tracing::info!(%key, "configuration overridden from environment");
    }
    if config.is_default_secret() {
        tracing::warn!(
            "running with the built-in signing secret; set DATACHAT_AUTH_SECRET before exposing this service"
        );
    }

    let users = Arc::new(MemoryUserStore::default());
    let chats = Arc::new(MemoryChatStore::default());
    let auth = AuthGateway::new(users, TokenService::new(&config.auth.secret));
    let state = Arc::new(AppState::new(auth, chats));

    let app = router::router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("listening on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
