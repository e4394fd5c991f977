use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use eva_auth::config::{EnvConfig, MailConfig, CONFIG};
use eva_auth::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn init_test_config() {
    let _ = CONFIG.set(EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        auth_secret: "test-secret-not-for-production".to_string(),
        reset_link_base: "http://localhost:3000".to_string(),
        allowed_email_domain: None,
        mail: MailConfig {
            api_key: "test".to_string(),
            // Nothing listens here, so mail sends fail fast in tests.
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from_address: "noreply@test.com".to_string(),
        },
    });
}

// Test data helpers
pub mod test_data {
    use eva_auth::types::user::RSignup;

    pub fn sample_signup() -> RSignup {
        RSignup {
            name: "Ada".to_string(),
            email: "ada@gmail.com".to_string(),
            password: "Abcdef12".to_string(),
            confirm_password: "Abcdef12".to_string(),
        }
    }

    pub fn sample_signup_with_email(email: &str) -> RSignup {
        RSignup {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "Abcdef12".to_string(),
            confirm_password: "Abcdef12".to_string(),
        }
    }
}
