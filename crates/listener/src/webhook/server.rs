use std::future::Future;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ListenerConfig;

use super::{
    handlers::{handle_webhook, health_check},
    state::AppState,
};

/// Start the webhook server and run it until a shutdown signal arrives
pub async fn start_webhook_server(config: ListenerConfig) -> Result<()> {
    let listener = bind_listener(&config).await?;
    serve(listener, config, shutdown_signal()).await
}

pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(addr).await.wrap_err_with(|| format!("Failed to bind webhook listener on {addr}"))
}

/// Serve webhook traffic on an already bound listener until `shutdown` resolves.
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, config: ListenerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = create_router(AppState::new(config));

    info!("Webhook server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .wrap_err("Webhook server terminated unexpectedly")?;

    info!("Webhook server stopped");
    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let body_limit = match state.config.max_body_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(body_limit))
        .with_state(state)
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, stopping gracefully..."),
        _ = terminate => info!("Received SIGTERM, stopping gracefully..."),
    }
}
