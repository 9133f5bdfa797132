use anyhow::{bail, Context, Result};
use axum::serve;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinError;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};
use user_directory::core::config::Config;
use user_directory::core::routes::build_router;
use user_directory::core::server::{bind_unix, serve_unix, spawn_signal_listener, wait_for_shutdown};
use user_directory::core::startup::seed_demo_users;
use user_directory::core::state::AppState;
use user_directory::core::tracing_init::init_tracing;
use user_directory::models::stats::{format_average, UserStats};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?;

    init_tracing(&config.logging);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = ?config.server.port,
        unix_socket = ?config.server.unix_socket,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "User directory starting"
    );

    let state = AppState::new(config.clone());

    if config.directory.seed_demo_users {
        seed_demo_users(&state).await?;
    }

    let stats = UserStats::from_users(state.users.read().await.get_users());
    info!(
        users = stats.count,
        min_id = ?stats.min_id,
        max_id = ?stats.max_id,
        avg_given_name_length = %format_average(stats.avg_given_name_length),
        avg_family_name_length = %format_average(stats.avg_family_name_length),
        "User directory startup complete"
    );

    let app = build_router(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
                )
        );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    spawn_signal_listener(shutdown_tx);

    let tcp_handle = if let Some(port) = config.server.port {
        let addr = format!("0.0.0.0:{}", port);
        info!(address = %addr, "Starting TCP listener");

        let listener = TcpListener::bind(&addr).await
            .context(format!("Failed to bind TCP listener to {}", addr))?;

        let app_clone = app.clone();
        let shutdown = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            serve(
                listener,
                app_clone.into_make_service_with_connect_info::<SocketAddr>()
            )
                .with_graceful_shutdown(wait_for_shutdown(shutdown))
                .await
                .context("TCP server error")
        }))
    } else {
        None
    };

    let unix_handle = if let Some(unix_socket) = &config.server.unix_socket {
        info!(path = %unix_socket.display(), "Starting Unix socket listener");

        let listener = bind_unix(unix_socket)?;

        Some(tokio::spawn(serve_unix(
            listener,
            app,
            unix_socket.clone(),
            shutdown_rx.clone(),
        )))
    } else {
        None
    };

    info!("HTTP server(s) started, waiting for shutdown signal");

    match (tcp_handle, unix_handle) {
        (Some(tcp), Some(unix)) => {
            let (tcp_result, unix_result) = tokio::join!(tcp, unix);
            log_server_exit("TCP", tcp_result);
            log_server_exit("Unix socket", unix_result);
        }
        (Some(tcp), None) => log_server_exit("TCP", tcp.await),
        (None, Some(unix)) => log_server_exit("Unix socket", unix.await),
        (None, None) => {
            error!("No listeners configured");
            bail!("No listeners configured");
        }
    }

    info!("Shutting down gracefully");

    Ok(())
}

fn log_server_exit(listener: &str, result: Result<Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => info!(listener, "Server stopped"),
        Ok(Err(e)) => error!(listener, error = %e, "Server failed"),
        Err(e) => error!(listener, error = %e, "Server task panicked or was cancelled"),
    }
}
