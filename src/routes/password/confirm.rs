use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenPurpose;
use crate::types::user::RConfirmReset;
use crate::utils::password::hash_password;
use crate::utils::token::verify_token;
use crate::utils::validation::validate_password_strength;
use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("")]
async fn confirm_reset(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RConfirmReset>,
) -> ApiResult<Response> {
    // Bad signature, expired and wrong-purpose all collapse into the same
    // generic rejection.
    let email = verify_token(&body.token, TokenPurpose::Reset)?;

    validate_password_strength(&body.new_password)?;

    let password_hash = hash_password(&body.new_password)
        .map_err(|_| AppError::Internal("password hashing failed".to_string()))?;

    match db.update_user_password(&email, password_hash).await {
        Ok(()) => {}
        // Account gone since the token was issued: same generic rejection.
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    }
    info!("password reset completed");

    Ok(ApiResponse::Ok(Response {
        message: "Password has been reset.".to_string(),
    }))
}
