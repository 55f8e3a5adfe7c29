use sqlx::SqliteConnection;

const TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS destinations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        price REAL NOT NULL,
        image_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS hotels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL,
        price_per_night REAL NOT NULL,
        description TEXT,
        image_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        hotel_id INTEGER,
        check_in DATE,
        check_out DATE,
        total_price REAL,
        FOREIGN KEY (user_id) REFERENCES users (id),
        FOREIGN KEY (hotel_id) REFERENCES hotels (id)
    )
    "#,
];

/// Creates the four tables if they are missing. Safe to run on every start.
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    log::info!("Ensuring schema exists...");
    for ddl in TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}
