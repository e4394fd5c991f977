use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// A stored hash that does not even parse counts as a failed verification,
/// same as a wrong password. Failing closed denies access instead of granting it.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("Abcdef12").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, "Abcdef12");
        assert!(verify_password("Abcdef12", &hash));
        assert!(!verify_password("Abcdef13", &hash));
    }

    #[test]
    fn hashing_salts_every_call() {
        let h1 = hash_password("Abcdef12").unwrap();
        let h2 = hash_password("Abcdef12").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password("Abcdef12", &h1));
        assert!(verify_password("Abcdef12", &h2));
    }

    #[test]
    fn malformed_stored_hash_fails_closed() {
        assert!(!verify_password("Abcdef12", "not-a-phc-string"));
        assert!(!verify_password("Abcdef12", ""));
        assert!(!verify_password("Abcdef12", "$argon2id$garbage"));
    }
}
