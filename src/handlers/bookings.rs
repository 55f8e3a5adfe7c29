use crate::db::Database;
use crate::error::AppError;
use crate::models::booking::{BookingCreated, BookingWithHotel, NewBooking};
use actix_web::{web, HttpResponse};
use sqlx::Connection;

/// Stores the booking as submitted. The user and hotel ids are not checked.
pub async fn create_booking(
    db: web::Data<Database>,
    body: web::Json<NewBooking>,
) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    let booking_id = sqlx::query(
        r#"
        INSERT INTO bookings (user_id, hotel_id, check_in, check_out, total_price)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(body.user_id)
    .bind(body.hotel_id)
    .bind(&body.check_in)
    .bind(&body.check_out)
    .bind(body.total_price)
    .execute(&mut conn)
    .await?
    .last_insert_rowid();

    conn.close().await?;
    log::debug!("booking {} created for user {}", booking_id, body.user_id);

    Ok(HttpResponse::Created().json(BookingCreated {
        message: "Booking created successfully".to_string(),
        booking_id,
    }))
}

/// Bookings of one user with their hotel's name and location. Bookings whose
/// hotel no longer exists drop out of the join.
pub async fn get_user_bookings(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let mut conn = db.connect().await?;

    let bookings = sqlx::query_as::<_, BookingWithHotel>(
        r#"
        SELECT b.id, b.user_id, b.hotel_id,
               CAST(b.check_in AS TEXT) AS check_in, CAST(b.check_out AS TEXT) AS check_out,
               b.total_price,
               h.name AS hotel_name, h.location AS hotel_location
        FROM bookings b
        JOIN hotels h ON b.hotel_id = h.id
        WHERE b.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;
    Ok(HttpResponse::Ok().json(bookings))
}
