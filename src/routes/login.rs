use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::password::verify_password;
use crate::utils::token::issue_session_token;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    // One code path. A missing account and a wrong password are
    // indistinguishable to the caller.
    let user = match db.get_user_by_email(&body.email).await {
        Ok(user) => user,
        Err(_) => return Err(AppError::Unauthorized),
    };

    if !verify_password(&body.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = issue_session_token(&user.email)?;

    Ok(ApiResponse::Ok(LoginRes {
        token,
        name: user.name,
    }))
}
