//! Shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to install Ctrl+C handler")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler")]
    SigTerm(#[source] io::Error),
}

#[cfg(unix)]
async fn terminated() -> Result<&'static str, ShutdownError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownError::SigTerm)?
        .recv()
        .await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminated() -> Result<&'static str, ShutdownError> {
    std::future::pending().await
}

/// Waits for Ctrl+C or SIGTERM, then drains in-flight requests.
pub(crate) async fn wait_and_stop(handle: ServerHandle) -> Result<(), ShutdownError> {
    let signal_name = tokio::select! {
        result = signal::ctrl_c() => result.map(|()| "Ctrl+C").map_err(ShutdownError::CtrlC)?,
        result = terminated() => result?,
    };

    info!(signal = signal_name, "shutting down");

    handle.stop_graceful(None);

    Ok(())
}
