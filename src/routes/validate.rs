use actix_web::post;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenPurpose;
use crate::utils::token::verify_token;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("")]
async fn validate(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
) -> ApiResult<Response> {
    verify_token(auth.token(), TokenPurpose::Session)?;

    Ok(ApiResponse::EmptyOk)
}
