use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use tracing::info;

pub type ConnectionPool = Pool<Sqlite>;

/// Schema migrations embedded at compile time from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the pool without touching the store. Connections are opened on
    /// first use, so an unreachable database never fails process startup.
    pub fn new_pool(connection_string: &str) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|err| anyhow::anyhow!("Invalid DATABASE_URL: {}", err))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);

        Ok(pool)
    }

    /// Authenticates against the store and synchronizes the schema.
    pub async fn sync(pool: &ConnectionPool) -> anyhow::Result<()> {
        let conn = pool.acquire().await?;
        drop(conn);

        MIGRATOR.run(pool).await?;
        Ok(())
    }

    /// Drops every table and recreates the schema, deleting all data
    /// unconditionally. Only reachable from the `--clear` entry path.
    pub async fn reset(pool: &ConnectionPool) -> anyhow::Result<()> {
        sqlx::query("DROP TABLE IF EXISTS products")
            .execute(pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
            .execute(pool)
            .await?;

        MIGRATOR.run(pool).await?;

        info!("🗑️ Database reset, schema recreated");
        Ok(())
    }
}
