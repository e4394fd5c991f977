use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RSignup {
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RLogin {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RRequestReset {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RConfirmReset {
    pub token: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
    pub name: String,
}

/// Admin listing row. The stored hash never rides along.
#[derive(Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}
