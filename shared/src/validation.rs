use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{INVALID_AVATAR_URL_ERROR, INVALID_NAME_ERROR, MAX_NAME_LENGTH};

static AVATAR_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("avatar url pattern is valid")
});

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() as u64 > MAX_NAME_LENGTH {
        return Err(invalid("invalid_display_name", INVALID_NAME_ERROR));
    }
    Ok(())
}

// Empty is allowed, the form submits "" when no avatar is set
pub fn validate_avatar_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || AVATAR_URL.is_match(url) {
        return Ok(());
    }
    Err(invalid("invalid_avatar_url", INVALID_AVATAR_URL_ERROR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_bounds() {
        assert!(validate_display_name("Alice").is_ok());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(50)).is_ok());
        assert!(validate_display_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_errors_carry_messages() {
        let error = validate_display_name("").unwrap_err();
        assert_eq!(error.code, "invalid_display_name");
        assert_eq!(error.message.as_deref(), Some(INVALID_NAME_ERROR));

        let error = validate_avatar_url("mailto:a@b.c").unwrap_err();
        assert_eq!(error.message.as_deref(), Some(INVALID_AVATAR_URL_ERROR));
    }

    #[test]
    fn test_avatar_url() {
        assert!(validate_avatar_url("").is_ok());
        assert!(validate_avatar_url("https://example.com/a.png").is_ok());
        assert!(validate_avatar_url("ftp://example.com/a.png").is_err());
        assert!(validate_avatar_url("not a url").is_err());
    }
}
