use crate::utils::webutils::validate_admin_token;
use actix_web::web;

pub mod admin;
pub mod health;
pub mod login;
pub mod password;
pub mod signup;
pub mod validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/signup").service(signup::signup));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(web::scope("/validate").service(validate::validate));
    cfg.service(web::scope("/request-password-reset").service(password::request::request_reset));
    cfg.service(web::scope("/reset-password").service(password::confirm::confirm_reset));
    cfg.service(
        web::scope("/admin")
            .service(admin::users::list_users)
            .service(admin::users::delete_user)
            .wrap(admin_auth),
    );
}
