use crate::config::config;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use reqwest::{Client, ClientBuilder};
use std::time::Instant;
use tracing::info;

pub async fn send_email(email: SendEmail) -> Result<(), AppError> {
    let mail_cfg = &config().mail;

    let payload = serde_json::to_string(&email)
        .map_err(|e| AppError::Mail(format!("serialize email failed: {e}")))?;

    let client: Client = ClientBuilder::new()
        .user_agent("eva-auth/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Mail(format!("build client failed: {e}")))?;

    let t0 = Instant::now();
    let res = client
        .post(&mail_cfg.endpoint)
        .bearer_auth(&mail_cfg.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| AppError::Mail(format!("send failed: {e}")))?;

    let status = res.status();
    info!("[mail] <- status: {} in {} ms", status, t0.elapsed().as_millis());

    if status.is_success() {
        Ok(())
    } else {
        let body = res.text().await.unwrap_or_default();
        Err(AppError::Mail(format!("mail API error: HTTP {status}: {body}")))
    }
}

/// Reset link mail. The token rides in the link only, it is never stored.
pub async fn mail_password_reset(to: &str, token: &str) -> Result<(), AppError> {
    let reset_link = format!(
        "{}/reset-password?token={}",
        config().reset_link_base,
        token
    );

    send_email(SendEmail {
        from: config().mail.from_address.clone(),
        to: vec![to.to_string()],
        subject: "Password Reset Request".to_string(),
        text: Some(format!(
            "Click the link to reset your password: {}",
            reset_link
        )),
        ..Default::default()
    })
    .await
}
