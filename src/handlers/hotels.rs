use crate::db::Database;
use crate::error::AppError;
use crate::models::hotel::{Hotel, NewHotel};
use crate::models::Message;
use actix_web::{web, HttpResponse};
use sqlx::Connection;

pub async fn get_hotels(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    let hotels = sqlx::query_as::<_, Hotel>(
        "SELECT id, name, location, price_per_night, description, image_url FROM hotels",
    )
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;
    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn add_hotel(
    db: web::Data<Database>,
    body: web::Json<NewHotel>,
) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    sqlx::query(
        "INSERT INTO hotels (name, location, price_per_night, description, image_url) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&body.name)
    .bind(&body.location)
    .bind(body.price_per_night)
    .bind(&body.description)
    .bind(&body.image_url)
    .execute(&mut conn)
    .await?;

    conn.close().await?;
    Ok(HttpResponse::Created().json(Message::new("Hotel added successfully")))
}
