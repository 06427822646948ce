use anyhow::{Context, Result};

use super::connection::DbConn;

const DROP_STATEMENTS: [&str; 3] = [
    "DROP VIEW IF EXISTS player_rankings",
    "DROP TABLE IF EXISTS matches",
    "DROP TABLE IF EXISTS players",
];

/// Create the tables and the ranking view unless they already exist.
pub fn initialize_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ready");
    Ok(())
}

pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    for statement in DROP_STATEMENTS {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute: {statement}"))?;
    }
    initialize_database(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
