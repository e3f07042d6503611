use crate::error::{AppError, AppResult};
use regex::Regex;

/// Email format check shared by user registration and academy creation.
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationFailed(format!(
            "'{email}' is not a valid email address"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("owner@dojo.academy").is_ok());
        assert!(validate_email("missing-at.example.com").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("spaces in@example.com").is_err());
        assert!(validate_email("no-tld@example").is_err());
    }
}
