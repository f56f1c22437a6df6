/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into the controller's error type
    pub fn into_result(self) -> crate::core::error::Result<()> {
        match self.error {
            Some(message) if !self.is_valid => {
                Err(crate::core::error::AppError::Validation(message))
            }
            _ => Ok(()),
        }
    }
}

/// Minimum signup password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Digits in a mobile number
pub const PHONE_DIGITS: usize = 10;

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((user, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if domain.contains('@') || email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    if user.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a login password (presence only)
pub fn validate_login_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }
    ValidationResult::ok()
}

/// Validate a new account password
pub fn validate_new_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate a 10-digit phone number. Spaces, dashes and a leading `+91` are ignored.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let local = trimmed.strip_prefix("+91").unwrap_or(trimmed);
    let mut digits = 0;
    for c in local.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' => {}
            _ => return ValidationResult::err("Phone number can only contain digits"),
        }
    }

    if digits != PHONE_DIGITS {
        return ValidationResult::err(format!("Phone number must have {} digits", PHONE_DIGITS));
    }

    ValidationResult::ok()
}

/// Validate that the confirmation matches
pub fn validate_password_match(password: &str, confirm: &str) -> ValidationResult {
    if password != confirm {
        return ValidationResult::err("Passwords don't match");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.in").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
        assert!(!validate_email("a@example.").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_login_password("x").is_valid);
        assert!(!validate_login_password("").is_valid);
        assert!(validate_new_password("longenough").is_valid);
        assert!(!validate_new_password("short").is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("9876543210").is_valid);
        assert!(validate_phone("+91 98765-43210").is_valid);
        assert!(!validate_phone("12345").is_valid);
        assert!(!validate_phone("98765x3210").is_valid);
        assert!(!validate_phone("").is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_password_match("a", "a").into_result().is_ok());
        assert_eq!(
            validate_password_match("a", "b").into_result().unwrap_err().to_string(),
            "Validation error: Passwords don't match"
        );
    }
}
