use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Row};
use crate::config::structs::store_config::StoreConfig;
use crate::store::errors::StoreError;
use crate::store::structs::sqlite_store::SqliteStore;
use crate::store::traits::peer_store::{PeerStore, ScanVisitor};

const LOG_PREFIX: &str = "[SQLite]";

impl SqliteStore {
    /// Opens the pool and makes sure the peer table exists.
    #[tracing::instrument(level = "debug")]
    pub async fn connect(config: &StoreConfig) -> Result<SqliteStore, StoreError> {
        let options = SqliteConnectOptions::from_str(config.path.as_str())?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::ConnectionError(format!("{} on DSL {}", e, config.path)))?;

        let store = SqliteStore {
            pool,
            table_name: config.table_name.clone(),
        };
        store.create_table().await?;
        Ok(store)
    }

    async fn create_table(&self) -> Result<(), StoreError> {
        info!("{} Creating table {} when missing", LOG_PREFIX, self.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`key` BLOB PRIMARY KEY NOT NULL, `value` BLOB NOT NULL)",
            self.table_name
        );
        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PeerStore for SqliteStore {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let query = format!("SELECT `value` FROM `{}` WHERE `key` = ?", self.table_name);
        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(None),
            Some(row) => Ok(Some(row.try_get::<Vec<u8>, _>(0)?)),
        }
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let query = format!(
            "INSERT INTO `{}` (`key`, `value`) VALUES (?, ?) ON CONFLICT (`key`) DO UPDATE SET `value`=excluded.`value`",
            self.table_name
        );
        sqlx::query(&query)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &[u8]) -> Result<(), StoreError> {
        let query = format!("DELETE FROM `{}` WHERE `key` = ?", self.table_name);
        sqlx::query(&query)
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn scan(
        &self,
        start_key: &[u8],
        max_count: usize,
        visit: &mut ScanVisitor<'_>,
    ) -> Result<(), StoreError> {
        let limit = i64::try_from(max_count).unwrap_or(i64::MAX);
        let query = format!(
            "SELECT `key`, `value` FROM `{}` WHERE `key` >= ? ORDER BY `key` ASC LIMIT ?",
            self.table_name
        );
        let mut rows = sqlx::query(&query)
            .bind(start_key)
            .bind(limit)
            .fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let key: Vec<u8> = row.try_get(0)?;
            let value: Vec<u8> = row.try_get(1)?;
            if !visit(&key, &value) {
                break;
            }
        }
        Ok(())
    }
}
