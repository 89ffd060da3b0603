use crate::config::DatabaseConfig;
use crate::db::schema;
use crate::error::RegistryError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, Pool, Sqlite, SqliteConnection};
use std::fs;
use tracing::{debug, info};

type SqlitePool = Pool<Sqlite>;

/// A pooled connection scoped to one request; returned to the pool when dropped.
pub type RequestConnection = PoolConnection<Sqlite>;

#[derive(Clone)]
pub struct RegistryStorage {
    pool: SqlitePool,
}

impl RegistryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the database file if needed, open the pool and ensure all tables exist.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, RegistryError> {
        ensure_database(cfg).await?;
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_with(connect_options(cfg))
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RegistryError> {
        let mut conn = self.acquire().await?;
        for stmt in schema::statements() {
            sqlx::query(stmt).execute(&mut *conn).await?;
        }
        info!("registry tables ready");
        Ok(())
    }

    /// Hand out one connection for the lifetime of a request.
    pub async fn acquire(&self) -> Result<RequestConnection, RegistryError> {
        Ok(self.pool.acquire().await?)
    }
}

fn connect_options(cfg: &DatabaseConfig) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(cfg.file_path())
        .create_if_missing(true)
        .foreign_keys(true)
}

/// Make sure the named database exists, using a throwaway connection that is closed right away.
async fn ensure_database(cfg: &DatabaseConfig) -> Result<(), RegistryError> {
    if !cfg.dir.as_os_str().is_empty() {
        fs::create_dir_all(&cfg.dir)?;
    }
    let path = cfg.file_path();
    let conn = SqliteConnection::connect_with(&connect_options(cfg)).await?;
    conn.close().await?;
    debug!(path = %path.display(), "database file present");
    Ok(())
}
