use actix_web::{web, App};
use std::sync::Arc;
use eva_auth::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::{password::hash_password, token::issue_session_token},
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(eva_auth::routes::configure_routes)
    }

    /// Inserts an admin account directly and returns (id, session token).
    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (i64, String) {
        let email = format!("admin-{}@test.com", Uuid::new_v4());
        let password_hash = hash_password("Adminpw1").expect("Failed to hash password");

        let admin_id = self.db.create_user(DBUserCreate {
            name: "Test Admin".to_string(),
            email: email.clone(),
            password_hash,
            is_admin: true,
        }).await.expect("Failed to create admin");

        let token = issue_session_token(&email).expect("Failed to issue session token");

        (admin_id, token)
    }

    /// Inserts a regular account directly and returns (id, email, password).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (i64, String, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let password = "Abcdef12".to_string();
        let password_hash = hash_password(&password).expect("Failed to hash password");

        let user_id = self.db.create_user(DBUserCreate {
            name: "Test User".to_string(),
            email: email.clone(),
            password_hash,
            is_admin: false,
        }).await.expect("Failed to create user");

        (user_id, email, password)
    }
}
