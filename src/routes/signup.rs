use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RSignup};
use crate::utils::password::hash_password;
use crate::utils::validation::{validate_email_domain, validate_password_strength};
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
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSignup>,
) -> ApiResult<Response> {
    if body.password != body.confirm_password {
        return Err(AppError::Validation("passwords do not match".to_string()));
    }

    validate_password_strength(&body.password)?;

    body.validate()
        .map_err(|_| AppError::Validation("invalid email address".to_string()))?;
    validate_email_domain(&body.email, config().allowed_email_domain.as_deref())?;

    let password_hash = hash_password(&body.password)
        .map_err(|_| AppError::Internal("password hashing failed".to_string()))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            password_hash,
            is_admin: false,
        })
        .await?;
    info!("created user {}", user_id);

    // No account data comes back, just the confirmation.
    Ok(ApiResponse::Created(Response {
        message: "User successfully created!".to_string(),
    }))
}
