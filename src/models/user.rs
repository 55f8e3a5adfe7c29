use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, FromRow)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
    pub username: String,
}

impl From<UserIdentity> for LoginResponse {
    fn from(user: UserIdentity) -> Self {
        LoginResponse {
            message: "Login successful".to_string(),
            user_id: user.id,
            username: user.username,
        }
    }
}
