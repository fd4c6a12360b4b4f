use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_size: u32,
    pub busy_timeout: Duration,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 8,
            busy_timeout: Duration::from_millis(5_000),
        }
    }
}

/// Applied to every connection the pool opens.
///
/// SQLite serializes writers on the database file. Without a busy timeout a
/// concurrent price update fails immediately with `SQLITE_BUSY` instead of
/// waiting for the other writer to finish.
#[derive(Debug, Clone, Copy)]
struct SqliteCustomizer {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(config: &DbConfig) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.as_str());
    Pool::builder()
        .max_size(config.max_size)
        .connection_customizer(Box::new(SqliteCustomizer {
            busy_timeout: config.busy_timeout,
        }))
        .build(manager)
}
