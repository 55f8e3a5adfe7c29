use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;

mod schema;
mod seed;

pub use schema::init_schema;
pub use seed::seed_sample_data;

/// Connection factory for the SQLite file. Each request opens its own
/// connection through `connect` and drops it when done; there is no pool.
#[derive(Clone, Debug)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            // bookings may point at users or hotels that do not exist
            .foreign_keys(false);
        Ok(Database { options })
    }

    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// Opens a connection, creates missing tables and closes it again.
    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        init_schema(&mut conn).await?;
        conn.close().await
    }
}
