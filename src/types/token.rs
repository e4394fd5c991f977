use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family a signed token belongs to. A reset link must never pass as a
/// session and the other way around, so verification always pins one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Session,
    Reset,
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPurpose::Session => write!(f, "session"),
            TokenPurpose::Reset => write!(f, "reset")
        }
    }
}

/// Signed claim set carried by both token families.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub purpose: TokenPurpose,
    pub iat: i64,
    pub exp: i64,
}
