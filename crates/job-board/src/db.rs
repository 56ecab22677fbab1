use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const SCHEMA: &str = include_str!("../schema/job_board.sql");

/// Open a SQLite pool with foreign keys enforced on every connection.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!(url = %config.url, max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Create the `jobs` and `applications` tables when they are missing.
///
/// Used by the demo command and tests; deployed databases are expected to
/// already carry the job board schema.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in schema_statements(SCHEMA) {
        debug!(%statement, "applying schema statement");
        sqlx::query(&statement).execute(&mut *tx).await?;
    }

    tx.commit().await
}

fn schema_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|statement| {
            statement
                .lines()
                .filter(|line| !line.trim().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}
