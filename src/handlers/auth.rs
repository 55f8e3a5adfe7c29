//! Registration and login.
//!
//! SECURITY: passwords are stored and compared as plain text and login issues
//! no session or token. Kept for compatibility with existing clients; do not
//! expose this service beyond local use until hashing is added.

use crate::db::Database;
use crate::error::AppError;
use crate::models::user::{LoginRequest, LoginResponse, RegisterUser, UserIdentity};
use crate::models::Message;
use actix_web::{web, HttpResponse};
use sqlx::Connection;

pub async fn register(
    db: web::Data<Database>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    let inserted = sqlx::query("INSERT INTO users (username, password, email) VALUES (?, ?, ?)")
        .bind(&body.username)
        .bind(&body.password)
        .bind(&body.email)
        .execute(&mut conn)
        .await;

    match inserted {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            log::debug!("duplicate registration for {}", body.username);
            return Err(AppError::conflict("Username or email already exists"));
        }
        Err(e) => return Err(e.into()),
    }

    conn.close().await?;
    Ok(HttpResponse::Created().json(Message::new("User registered successfully")))
}

pub async fn login(
    db: web::Data<Database>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let mut conn = db.connect().await?;

    let user = sqlx::query_as::<_, UserIdentity>(
        "SELECT id, username FROM users WHERE username = ? AND password = ?",
    )
    .bind(&body.username)
    .bind(&body.password)
    .fetch_optional(&mut conn)
    .await?;

    conn.close().await?;

    // missing user and wrong password are indistinguishable to the caller
    match user {
        Some(user) => Ok(HttpResponse::Ok().json(LoginResponse::from(user))),
        None => Err(AppError::Unauthorized),
    }
}
