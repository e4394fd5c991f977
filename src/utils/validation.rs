use crate::types::error::AppError;

/// Baseline policy: at least 8 characters, one uppercase letter, one digit.
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::Validation(
            "password must contain an uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "password must contain a digit".to_string(),
        ));
    }
    Ok(())
}

/// Deployment knob: when a domain is configured, only addresses under it may
/// register. No restriction when unset.
pub fn validate_email_domain(email: &str, allowed_domain: Option<&str>) -> Result<(), AppError> {
    let Some(domain) = allowed_domain else {
        return Ok(());
    };
    match email.rsplit_once('@') {
        Some((_, host)) if host == domain => Ok(()),
        _ => Err(AppError::Validation(format!(
            "email must belong to {domain}"
        ))),
    }
}
