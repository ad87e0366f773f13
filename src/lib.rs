//! # qqbot - QQ Group Bot Service
//!
//! HTTP front of the QQ group bot that reports the status of a Minecraft
//! server. Over HTTP it only answers liveness probes; the bot command layer
//! lives in [`services`].
//!
//! ## Modules
//!
//! - [`config`] - Environment configuration
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Response bodies and bot message types
//! - [`services`] - Scheduled trigger, status client and command handling
//! - [`utils`] - Constants, tracing setup and shutdown signal

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::future::Future;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::any,
};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::handlers::{default_status, health_check};
use crate::utils::{
    constant::{HEALTH_PATH, SHUTDOWN_GRACE_PERIOD},
    shutdown::shutdown_signal,
};

/// Creates the Axum router.
///
/// `/health` answers every method with the health body; every other path
/// falls through to [`default_status`]. CORS headers allowing any origin,
/// method and header are added to every response. Preflight requests are not
/// intercepted, so they receive the same JSON body as any other request.
pub fn app() -> Router {
    let any_value = HeaderValue::from_static("*");

    Router::new()
        .route(HEALTH_PATH, any(health_check))
        .fallback(default_status)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            any_value.clone(),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            any_value.clone(),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            any_value,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serves [`app`] on `listener` until Ctrl+C or SIGTERM.
///
/// In-flight requests get [`SHUTDOWN_GRACE_PERIOD`] to finish.
pub async fn serve(listener: TcpListener) -> AppResult<()> {
    serve_with_shutdown(listener, app(), shutdown_signal(), SHUTDOWN_GRACE_PERIOD).await
}

/// Serves `router` until `signal` resolves, then drains connections for at
/// most `grace_period`. Connections still open after that are no longer
/// awaited and end when the runtime shuts down.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
    grace_period: Duration,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(addr = %listener.local_addr()?, "Server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let signal = async move {
        signal.await;
        let _ = shutdown_tx.send(true);
    };

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .into_future();

    let drain_deadline = async move {
        if shutdown_rx.wait_for(|started| *started).await.is_err() {
            std::future::pending::<()>().await;
        }
        info!(
            grace_secs = grace_period.as_secs_f64(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
        tokio::time::sleep(grace_period).await;
    };

    tokio::select! {
        result = server => result?,
        _ = drain_deadline => {
            warn!("Grace period expired, dropping remaining connections");
        }
    }

    info!("Server stopped");
    Ok(())
}
