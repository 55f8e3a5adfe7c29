//! Loads the showcase destinations and hotels into the configured database.

use env_logger::Env;
use sqlx::Connection;
use std::io;
use travel_booking_api::db::seed_sample_data;
use travel_booking_api::{Database, Settings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = Settings::from_env();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let db = Database::new(&settings.database_url).map_err(io::Error::other)?;
    db.initialize().await.map_err(io::Error::other)?;

    let mut conn = db.connect().await.map_err(io::Error::other)?;
    seed_sample_data(&mut conn).await.map_err(io::Error::other)?;
    conn.close().await.map_err(io::Error::other)?;

    log::info!("Sample data added to {}", settings.database_url);
    Ok(())
}
