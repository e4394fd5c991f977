use actix_web::{
    dev::ServiceRequest,
    error::{ErrorForbidden, ErrorUnauthorized},
    web,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::token::TokenPurpose;
use crate::utils::token::verify_token;

/// Gate for the admin scope: a valid session token whose subject still exists
/// and carries the admin flag. A reset token never passes here.
pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let email = match verify_token(credentials.token(), TokenPurpose::Session) {
        Ok(email) => email,
        Err(_) => return Err((ErrorUnauthorized("Invalid token").into(), req)),
    };

    let db = match req.app_data::<web::Data<Arc<PostgresService>>>() {
        Some(db) => Arc::clone(db.get_ref()),
        None => return Err((ErrorUnauthorized("Invalid token").into(), req)),
    };

    match db.get_user_by_email(&email).await {
        Ok(user) if user.is_admin => Ok(req),
        Ok(_) => Err((ErrorForbidden("Admin access required").into(), req)),
        Err(_) => Err((ErrorUnauthorized("Invalid token").into(), req)),
    }
}
