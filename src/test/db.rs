//! PostgreSQL test databases inside one shared container.

use crate::migration::{apply_migrations, ensure_database_exists};
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

const USER: &str = "restaurant_test";
const PASSWORD: &str = "restaurant_test_password";

/// Started once per test binary together with its mapped port; `None` when no
/// container runtime is reachable.
static POSTGRES_CONTAINER: Lazy<OnceCell<Option<(ContainerAsync<PostgresImage>, u16)>>> =
    Lazy::new(OnceCell::new);

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

async fn init_postgres_container() -> Option<(ContainerAsync<PostgresImage>, u16)> {
    let started = PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("postgres")
        .start()
        .await;
    let container = match started {
        Ok(container) => container,
        Err(err) => {
            eprintln!("PostgreSQL container unavailable, skipping database tests: {err}");
            return None;
        }
    };
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");
    Some((container, port))
}

/// A freshly created database with the `restaurants` table in place.
///
/// Each instance gets its own database, created through
/// [`ensure_database_exists`] exactly as the server does at startup.
#[derive(Debug, Clone)]
pub struct TestDb {
    pub pool: PgPool,
    pub url: String,
}

impl TestDb {
    /// `None` when the container could not be started.
    pub async fn new() -> Option<Self> {
        let (_, port) = POSTGRES_CONTAINER
            .get_or_init(init_postgres_container)
            .await
            .as_ref()?;
        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let name = format!(
            "restaurant_test_{}_{}",
            std::process::id(),
            NEXT_DB.fetch_add(1, Ordering::SeqCst)
        );
        let url = format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{name}");

        ensure_database_exists(&url)
            .await
            .expect("Failed to create test database");
        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create pool for database");
        apply_migrations(&pool)
            .await
            .expect("Failed to run migrations on database");

        Some(Self { pool, url })
    }
}
