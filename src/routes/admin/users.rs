use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserSummary;
use actix_web::{delete, get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[get("/users")]
async fn list_users(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<UserSummary>> {
    let users = db.list_users().await?;
    if users.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::Ok(
        users
            .into_iter()
            .map(|u| UserSummary {
                id: u.id,
                name: u.name,
                email: u.email,
            })
            .collect(),
    ))
}

#[delete("/users/{id}")]
async fn delete_user(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i64>,
) -> ApiResult<Response> {
    let id = path.into_inner();
    db.delete_user(id).await?;
    info!("deleted user {}", id);

    Ok(ApiResponse::Ok(Response {
        message: "User deleted.".to_string(),
    }))
}
