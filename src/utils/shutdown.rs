//! # Shutdown Signal
//!
//! Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.

use std::future::Future;
use std::pin::Pin;

use tokio::signal;
use tracing::{error, info};

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate: Pin<Box<dyn Future<Output = ()> + Send>> =
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => Box::pin(async move {
                sigterm.recv().await;
            }),
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                Box::pin(std::future::pending::<()>())
            }
        };

    #[cfg(not(unix))]
    let terminate: Pin<Box<dyn Future<Output = ()> + Send>> =
        Box::pin(std::future::pending::<()>());

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
