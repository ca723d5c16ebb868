use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, error, info};

use super::{ItemStore, StoreError};
use crate::config::Config;
use crate::models::Item;

const SELECT_ALL_SQL: &str = "SELECT id, name FROM items";
const SELECT_ONE_SQL: &str = "SELECT id, name FROM items WHERE id = $1::int4";
const INSERT_SQL: &str = "INSERT INTO items (name) VALUES ($1) RETURNING id, name";
const UPDATE_SQL: &str = "UPDATE items SET name = $1 WHERE id = $2::int4 RETURNING id, name";
const DELETE_SQL: &str = "DELETE FROM items WHERE id = $1::int4 RETURNING id, name";

/// Items table backed by a PostgreSQL connection pool
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Application configuration holding the database settings
    ///
    /// # Returns
    /// * `Result<Self, StoreError>` - Items store or error
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        info!(
            "Connecting to database {} at {}:{} as {}...",
            config.pg_database, config.pg_host, config.pg_port, config.pg_user
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(2) // Keep some connections alive
            .acquire_timeout(config.db_acquire_timeout())
            .idle_timeout(Duration::from_secs(600)) // Close idle connections after 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // Recycle connections after 30 minutes
            .connect_with(config.connect_options())
            .await?;

        info!("Database connection pool created successfully");

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn log_pool_state(&self, operation: &str) {
        let pool_idle = self.pool.num_idle() as u32;
        let pool_size = self.pool.size();
        debug!(
            "{}: pool connections: {} idle, {} in use",
            operation,
            pool_idle,
            pool_size.saturating_sub(pool_idle)
        );
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.log_pool_state("list items");

        let items = sqlx::query_as::<_, Item>(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn find_item(&self, id: &str) -> Result<Option<Item>, StoreError> {
        self.log_pool_state("find item");

        let item = sqlx::query_as::<_, Item>(SELECT_ONE_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn insert_item(&self, name: Option<&str>) -> Result<Item, StoreError> {
        self.log_pool_state("insert item");

        // Exactly one row must come back; zero rows is an error
        let item = sqlx::query_as::<_, Item>(INSERT_SQL)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        info!("Item {} created", item.id);
        Ok(item)
    }

    async fn update_item(&self, id: &str, name: &str) -> Result<Option<Item>, StoreError> {
        self.log_pool_state("update item");

        let item = sqlx::query_as::<_, Item>(UPDATE_SQL)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn delete_item(&self, id: &str) -> Result<Option<Item>, StoreError> {
        self.log_pool_state("delete item");

        let item = sqlx::query_as::<_, Item>(DELETE_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if let Err(e) = sqlx::query("SELECT 1").execute(&self.pool).await {
            error!(
                "Database ping failed: {}. Pool state: {} idle, {} total",
                e,
                self.pool.num_idle(),
                self.pool.size()
            );
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_bind_parameters() {
        for sql in [SELECT_ONE_SQL, INSERT_SQL, UPDATE_SQL, DELETE_SQL] {
            assert!(sql.contains("$1"), "{sql}");
        }
        assert!(UPDATE_SQL.contains("$2::int4"));
    }

    #[test]
    fn test_statements_return_both_columns() {
        for sql in [INSERT_SQL, UPDATE_SQL, DELETE_SQL] {
            assert!(sql.ends_with("RETURNING id, name"), "{sql}");
        }
    }

    #[tokio::test]
    async fn test_lazy_pool_reports_unreachable_database() {
        let options = sqlx::postgres::PgConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .database("items")
            .username("nobody");
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(options);
        let store = PgItemStore::from_pool(pool);

        assert!(store.ping().await.is_err());
        assert!(matches!(
            store.find_item("1").await,
            Err(StoreError::Database(_))
        ));
    }
}
