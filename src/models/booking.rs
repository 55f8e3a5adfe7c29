use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dates are kept as the text the client sent and returned unchanged.
#[derive(Debug, Deserialize)]
pub struct NewBooking {
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct BookingCreated {
    pub message: String,
    pub booking_id: i64,
}

/// A booking row joined with the name and location of its hotel.
#[derive(Debug, Serialize, FromRow)]
pub struct BookingWithHotel {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub hotel_name: String,
    pub hotel_location: String,
}
