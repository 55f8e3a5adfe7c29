//! Travel booking backend: users, destinations, hotels and bookings over a
//! single SQLite file, one connection and one statement per request.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use actix_cors::Cors;
use actix_web::web;

pub use config::Settings;
pub use db::Database;
pub use error::AppError;

/// Registers every route plus the shared JSON body configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .route("/register", web::post().to(handlers::auth::register))
        .route("/login", web::post().to(handlers::auth::login))
        .service(
            web::resource("/destinations")
                .route(web::get().to(handlers::destinations::get_destinations))
                .route(web::post().to(handlers::destinations::add_destination)),
        )
        .service(
            web::resource("/hotels")
                .route(web::get().to(handlers::hotels::get_hotels))
                .route(web::post().to(handlers::hotels::add_hotel)),
        )
        .service(
            web::scope("/bookings")
                .route("", web::post().to(handlers::bookings::create_booking))
                .route(
                    "/{user_id}",
                    web::get().to(handlers::bookings::get_user_bookings),
                ),
        );
}

/// Any origin, method and header is accepted.
pub fn cors() -> Cors {
    Cors::permissive()
}
