use crate::db::Database;
use crate::error::AppError;
use crate::models::destination::{Destination, NewDestination};
use crate::models::Message;
use actix_web::{web, HttpResponse};
use sqlx::Connection;

pub async fn get_destinations(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    let destinations = sqlx::query_as::<_, Destination>(
        "SELECT id, name, description, price, image_url FROM destinations",
    )
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;
    Ok(HttpResponse::Ok().json(destinations))
}

pub async fn add_destination(
    db: web::Data<Database>,
    body: web::Json<NewDestination>,
) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    sqlx::query("INSERT INTO destinations (name, description, price, image_url) VALUES (?, ?, ?, ?)")
        .bind(&body.name)
        .bind(&body.description)
        .bind(body.price)
        .bind(&body.image_url)
        .execute(&mut conn)
        .await?;

    conn.close().await?;
    Ok(HttpResponse::Created().json(Message::new("Destination added successfully")))
}
