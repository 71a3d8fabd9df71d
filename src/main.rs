use anyhow::{Context, Result};
use dotenv::dotenv;
use productadmin::{
    config::{Config, ConnectionManager, ConnectionPool},
    handler::AppRouter,
    state::AppState,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .context("Failed to create database pool")?;

    // One-shot administrative wipe; never runs alongside the server.
    if std::env::args().nth(1).as_deref() == Some("--clear") {
        clear_db(&pool).await;
    }

    connect_db(&pool).await;

    let state = AppState::new(pool);

    AppRouter::serve(config.port, &config.frontend_url, state)
        .await
        .context("Failed to start server")?;

    Ok(())
}

/// Connection failure at startup is logged, not fatal. The process keeps
/// serving and handlers surface their own errors once invoked.
async fn connect_db(pool: &ConnectionPool) {
    if ConnectionManager::sync(pool).await.is_err() {
        error!("Hubo un Error con la conexion a la BD");
    }
}

async fn clear_db(pool: &ConnectionPool) {
    match ConnectionManager::reset(pool).await {
        Ok(()) => {
            info!("Datos eliminados");
            std::process::exit(0);
        }
        Err(err) => {
            error!("{err:?}");
            std::process::exit(1);
        }
    }
}
