use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub price_per_night: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub price_per_night: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
