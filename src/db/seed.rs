use sqlx::{Connection, SqliteConnection};

const DESTINATIONS: [(&str, &str, f64, &str); 3] = [
    ("Paris", "The City of Light with iconic Eiffel Tower", 999.99, "/Images/paris.jpg"),
    ("Maldives", "Paradise islands with crystal clear waters", 1499.99, "/Images/maldives.jpg"),
    ("Tokyo", "Modern city with rich cultural heritage", 1299.99, "/Images/tokyo.jpg"),
];

const HOTELS: [(&str, &str, f64, &str, &str); 3] = [
    (
        "Grand Paris Hotel",
        "Paris",
        299.99,
        "Luxury hotel near Eiffel Tower",
        "/Images/paris-hotel.jpg",
    ),
    (
        "Maldives Resort & Spa",
        "Maldives",
        599.99,
        "Overwater villas with ocean view",
        "/Images/maldives-hotel.jpg",
    ),
    (
        "Tokyo Skyline Hotel",
        "Tokyo",
        399.99,
        "Modern hotel in Shinjuku district",
        "/Images/tokyo-hotel.jpg",
    ),
];

/// Inserts the showcase destinations and hotels in one transaction. Not
/// deduplicated: running it twice adds the rows twice.
pub async fn seed_sample_data(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    for (name, description, price, image_url) in DESTINATIONS {
        sqlx::query("INSERT INTO destinations (name, description, price, image_url) VALUES (?, ?, ?, ?)")
            .bind(name)
            .bind(description)
            .bind(price)
            .bind(image_url)
            .execute(&mut *tx)
            .await?;
    }

    for (name, location, price_per_night, description, image_url) in HOTELS {
        sqlx::query(
            "INSERT INTO hotels (name, location, price_per_night, description, image_url) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(location)
        .bind(price_per_night)
        .bind(description)
        .bind(image_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    log::info!(
        "Seeded {} destinations and {} hotels",
        DESTINATIONS.len(),
        HOTELS.len()
    );
    Ok(())
}
