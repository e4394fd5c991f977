use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RRequestReset;
use crate::utils::mail::mail_password_reset;
use crate::utils::token::issue_reset_token;
use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[post("")]
async fn request_reset(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRequestReset>,
) -> ApiResult<Response> {
    body.validate()
        .map_err(|_| AppError::Validation("invalid email address".to_string()))?;

    // Same acknowledgment whether or not the account exists, matching the
    // login flow. The mail only goes out when it does.
    if let Ok(user) = db.get_user_by_email(&body.email).await {
        let token = issue_reset_token(&user.email)?;
        mail_password_reset(&user.email, &token).await?;
        info!("reset mail sent");
    }

    Ok(ApiResponse::Ok(Response {
        message: "If that email is registered, a reset link has been sent.".to_string(),
    }))
}
