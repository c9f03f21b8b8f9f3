use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ApiError, Result};

/// Accepted password shape: at most 10 characters, all from the API's
/// allowed set
static PASSWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9@\-_*]{0,10}$").expect("Failed to compile password regex")
});

/// Reject passwords longer than 10 characters or containing characters
/// outside `a-z A-Z 0-9 @ - _ *`
pub fn validate_password(password: &str) -> Result<()> {
    if PASSWORD_PATTERN.is_match(password) {
        Ok(())
    } else {
        Err(ApiError::validation("invalid password"))
    }
}
