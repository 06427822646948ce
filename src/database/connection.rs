use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(settings);
    // Every in-memory connection is its own database, so keep exactly one.
    let size = if settings.is_in_memory() {
        1
    } else {
        settings.pool_size.max(1)
    };
    build_pool(manager, size)
}

fn build_manager(settings: &DatabaseSettings) -> SqliteConnectionManager {
    let manager = if settings.is_in_memory() {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(&settings.path)
    };
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(size)
        .build(manager)
        .context("Failed to create database connection pool")
}

/// Check out a connection; it goes back to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
