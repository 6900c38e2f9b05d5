use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
    ) -> Result<ConnectionPool> {
        info!("🏗️ Creating database pool (max {max_connections} connections)");

        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(connection_string)
            .await
            .context("Failed to create database connection pool")
    }
}
