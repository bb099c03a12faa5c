use serde::{de::DeserializeOwned, Serialize};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Executor, Pool, Row, Sqlite,
};
use std::str::FromStr;

use crate::error::Error;

pub const PREFERENCES_KEY: &str = "vt_prefs";
pub const FAVORITES_KEY: &str = "vt_favorites";
pub const HISTORY_KEY: &str = "vt_history";

/// Key/value store of JSON string blobs.
#[derive(Clone, Debug)]
pub struct Store {
    pool: Pool<Sqlite>,
}

impl Store {
    #[tracing::instrument]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(db_uri)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Private in-memory database; one connection so every query sees the same data.
    pub async fn in_memory() -> Result<Self, Error> {
        Self::new("sqlite::memory:", 1).await
    }

    pub async fn with_pool(pool: Pool<Sqlite>) -> Result<Self, Error> {
        pool.execute("CREATE TABLE IF NOT EXISTS settings (key TEXT PRIMARY KEY, data TEXT NOT NULL)")
            .await?;

        Ok(Self { pool })
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_row = conn
            .fetch_optional(sqlx::query("SELECT data FROM settings WHERE key = ?").bind(key))
            .await?;

        Ok(match maybe_row {
            Some(row) => Some(row.try_get("data")?),
            None => None,
        })
    }

    #[tracing::instrument(skip(self, data))]
    pub async fn put_raw(&self, key: &str, data: &str) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO settings (key, data) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET data = excluded.data",
            )
            .bind(key)
            .bind(data),
        )
        .await?;

        Ok(())
    }

    /// Reads a JSON blob. Unreadable blobs are treated as absent.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        let raw = match self.get_raw(key).await? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "discarding unreadable stored value");
                Ok(None)
            }
        }
    }

    pub async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Error> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw).await
    }
}
