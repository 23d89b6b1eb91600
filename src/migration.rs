//! Database bootstrap: create the target database if missing, then the `restaurants` table.

use crate::error::{BootstrapError, ConfigError};
use crate::model::{Restaurant, STATUS_ACTIVE};
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const ADMIN_DATABASE: &str = "postgres";

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// `postgres` database on the same server to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), BootstrapError> {
    let (admin, db_name) = admin_target(database_url)?;
    let db_name = match db_name {
        Some(name) if !name.is_empty() && name != ADMIN_DATABASE => name,
        _ => return Ok(()),
    };
    let mut conn = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Connect options for the admin database, plus the database named by `database_url`.
fn admin_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::InvalidVar {
        name: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let db_name = opts.get_database().map(str::to_owned);
    Ok((opts.database(ADMIN_DATABASE), db_name))
}

/// Create the `restaurants` table when absent. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), BootstrapError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            addr TEXT NOT NULL DEFAULT '',
            status INTEGER NOT NULL DEFAULT {},
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        quote_ident(Restaurant::TABLE_NAME),
        STATUS_ACTIVE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_target_keeps_server_and_options() {
        let (admin, db) =
            admin_target("postgres://app:pw@db:5432/food?sslmode=disable&sslrootcert=/etc/ssl/ca.pem").unwrap();
        assert_eq!(db.as_deref(), Some("food"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_port(), 5432);
        assert_eq!(admin.get_username(), "app");
    }

    #[test]
    fn admin_target_without_database_path_names_no_database() {
        let (admin, db) = admin_target("postgres://u:p@db:5432").unwrap();
        assert_eq!(db, std::env::var("PGDATABASE").ok());
        assert_eq!(admin.get_host(), "db");
    }

    #[test]
    fn unparsable_url_is_a_config_error() {
        let err = admin_target("no-slashes-here").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "DATABASE_URL", .. }));
    }

    #[test]
    fn quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("restaurants"), "\"restaurants\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
