mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod routes;

use axum::{extract::Request, ServiceExt};
use config::Config;
use db::{dbitems::PgItemStore, SharedStore};
use routes::create_app;
use std::panic;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "simple_backend=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration, refusing to start without the database settings
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build the shared database handle
    let store: SharedStore = match PgItemStore::connect(&config).await {
        Ok(db) => {
            info!("Database initialized successfully");
            Arc::new(db)
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let app_routes = create_app(store);

    // Start the HTTP/API server
    let listener = match tokio::net::TcpListener::bind(config.server_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.server_address(), e);
            std::process::exit(1);
        }
    };

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app_routes))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully..."),
        () = terminate => info!("Received SIGTERM, shutting down gracefully..."),
    }
}
