//! forum-moderation server binary.
//!
//! Wires the in-memory adapters into the HTTP router and serves until
//! Ctrl-C.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use forum_moderation::adapters::http::{build_router, AppState};
use forum_moderation::adapters::memory::{
    InMemoryPostRepository, InMemorySessionStore, InMemoryThreadRepository,
    InMemoryUserRepository,
};
use forum_moderation::adapters::rate_limiter::FixedWindowRateLimiter;
use forum_moderation::application::SessionStateBroker;
use forum_moderation::config::{AppConfig, BootstrapAdmin, ServerConfig};
use forum_moderation::domain::moderation::{Role, User};
use forum_moderation::domain::session::SessionSnapshot;
use forum_moderation::ports::{SessionStore, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let users = Arc::new(InMemoryUserRepository::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    if let Some(admin) = config.bootstrap.admin()? {
        seed_admin(&admin, users.as_ref(), sessions.as_ref()).await?;
    }

    let broker = Arc::new(SessionStateBroker::new(sessions.clone()));
    let state = AppState {
        users,
        posts: Arc::new(InMemoryPostRepository::new()),
        threads: Arc::new(InMemoryThreadRepository::new()),
        sessions,
        broker,
        limiter: Arc::new(FixedWindowRateLimiter::new()),
        rate_limit: Arc::new(config.rate_limit.clone()),
    };
    let app = build_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "forum-moderation listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    // RUST_LOG wins over the configured directive.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn seed_admin(
    admin: &BootstrapAdmin,
    users: &dyn UserRepository,
    sessions: &dyn SessionStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = User::new(admin.id.clone(), admin.username.clone(), Role::Admin);
    users.save(&user).await?;
    sessions
        .save(&admin.token, &SessionSnapshot::new(admin.id.clone(), Role::Admin))
        .await?;
    tracing::warn!(user_id = %admin.id, token = %admin.token, "bootstrap admin seeded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
