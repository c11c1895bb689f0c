mod app;
mod handlers;
mod state;

use std::time::Duration;

use anyhow::Result;
use atelier_auth::{AuthConfig, AuthState};
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, state::AppState};

/// Atelier - Marketing site with blog, portfolio and admin area
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Seconds before an in-flight request is answered with 408
    #[arg(long, default_value = "10", env = "REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier=debug,atelier_auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env()?;
    for path in config.unreachable_policy_paths() {
        tracing::warn!(
            path = %path,
            "Admin path policy is enabled but this path is excluded from the auth context; its redirects will never run"
        );
    }

    let auth = init_auth(config).await?;
    let state = AppState::new(auth);

    // Build the application router
    let app = create_app(state, Duration::from_secs(cli.request_timeout_secs));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the auth state against the remote session store.
#[cfg(not(feature = "mock-sessions"))]
async fn init_auth(config: AuthConfig) -> Result<AuthState> {
    Ok(AuthState::remote(config)?)
}

/// Build the auth state over an in-memory store with one demo session.
///
/// Send `Authorization: Bearer demo-token` (or the session cookie) to be
/// recognized as `demo@atelier.local`.
#[cfg(feature = "mock-sessions")]
async fn init_auth(config: AuthConfig) -> Result<AuthState> {
    use std::sync::Arc;

    use atelier_auth::InMemorySessionStore;
    use atelier_core::auth::Session;

    let store = InMemorySessionStore::new();
    store
        .insert(
            "demo-token",
            Session::new("demo-user")
                .with_email("demo@atelier.local")
                .with_role("admin"),
        )
        .await;

    tracing::info!("Using in-memory session store with demo token");
    Ok(AuthState::new(Arc::new(store), config))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
