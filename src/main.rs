//! Binary entry point: wire up logging, configuration, the database, and
//! the HTTP server.

use cheeseboard::{
    config,
    errors::{Error, Result},
    web::{AppState, routes},
};
use dotenvy::dotenv;
use std::env;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 4. Seed accounts from config.toml, if present
    match config::accounts::load_default_config() {
        Ok(accounts) => config::accounts::seed_accounts(&db, &accounts).await?,
        Err(e) => warn!("Skipping account seeding: {}", e),
    }

    // 5. Run the server
    let app = routes::router(AppState { db });

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .map_err(|e| Error::Config {
            message: format!("Invalid PORT value: {e}"),
        })?;
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
