use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub auth_secret: String,
    pub reset_link_base: String,
    pub allowed_email_domain: Option<String>,
    pub mail: MailConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from_address: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            // Signing secret for every issued token. Rotating it invalidates
            // all outstanding sessions and reset links at once.
            auth_secret: Self::get_env("AUTH_SECRET"),
            reset_link_base: env::var("RESET_LINK_BASE")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            allowed_email_domain: env::var("ALLOWED_EMAIL_DOMAIN").ok(),
            mail: MailConfig {
                api_key: Self::get_env("RESEND_KEY"),
                endpoint: env::var("MAIL_ENDPOINT")
                    .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
                from_address: Self::get_env("MAIL_FROM"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
