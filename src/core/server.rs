// Listener plumbing and shutdown coordination

use anyhow::{Context, Result};
use axum::Router;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::UnixListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Pause after a failed accept before trying again
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Resolve once `true` is published on the shutdown channel, or its sender is gone
pub async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

/// Publish `true` on `shutdown` when Ctrl+C or SIGTERM arrives
pub fn spawn_signal_listener(shutdown: watch::Sender<bool>) {
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown.send(true);
    });
}

/// Bind a Unix socket, replacing a stale socket file left by a previous run
pub fn bind_unix(path: &Path) -> Result<UnixListener> {
    if path.exists() {
        std::fs::remove_file(path)
            .context(format!("Failed to remove existing Unix socket: {}", path.display()))?;
    }

    UnixListener::bind(path)
        .context(format!("Failed to bind Unix socket listener to {}", path.display()))
}

/// Accept connections on `listener` until shutdown, then remove the socket file.
///
/// Connections already accepted are served to completion on their own tasks.
pub async fn serve_unix(
    listener: UnixListener,
    app: Router,
    path: PathBuf,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    use tower::Service;

    loop {
        let socket = tokio::select! {
            _ = wait_for_shutdown(shutdown.clone()) => break,
            accepted = listener.accept() => match accepted {
                Ok((socket, _remote_addr)) => socket,
                Err(e) => {
                    error!(error = %e, "Failed to accept Unix socket connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            },
        };

        let tower_service = app.clone();
        tokio::spawn(async move {
            let socket = hyper_util::rt::TokioIo::new(socket);

            let hyper_service = hyper::service::service_fn(move |request: hyper::Request<hyper::body::Incoming>| {
                tower_service.clone().call(request)
            });

            if let Err(err) = hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection_with_upgrades(socket, hyper_service)
                .await
            {
                error!(error = %err, "Error serving Unix socket connection");
            }
        });
    }

    drop(listener);
    if let Err(e) = std::fs::remove_file(&path) {
        warn!(path = %path.display(), error = %e, "Failed to remove Unix socket");
    }

    info!(path = %path.display(), "Unix socket listener stopped");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
