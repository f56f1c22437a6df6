//! # Auth Form
//!
//! Login and signup share one form. Switching mode clears every field, and
//! [`AuthForm::validate`] checks only the fields the current mode shows.

use crate::core::error::Result;
use crate::utils::validation::{
    validate_email, validate_login_password, validate_new_password, validate_password_match,
    validate_phone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to continue",
            AuthMode::Signup => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Signup => "Already have an account? Sign in",
        }
    }
}

/// Third-party sign-in buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub fn label(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Continue with Google",
            SocialProvider::Apple => "Continue with Apple",
        }
    }
}

/// Validated form output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Present for signups only
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
}

impl AuthForm {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn signup(
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            mode: AuthMode::Signup,
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            show_password: false,
        }
    }

    /// Switch between login and signup, clearing all fields
    pub fn toggle_mode(&mut self) {
        let mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        *self = Self {
            mode,
            show_password: self.show_password,
            ..Self::default()
        };
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn validate(&self) -> Result<Credentials> {
        validate_email(&self.email).into_result()?;
        match self.mode {
            AuthMode::Login => {
                validate_login_password(&self.password).into_result()?;
                Ok(Credentials {
                    email: self.email.trim().to_string(),
                    phone: None,
                })
            }
            AuthMode::Signup => {
                validate_phone(&self.phone).into_result()?;
                validate_new_password(&self.password).into_result()?;
                validate_password_match(&self.password, &self.confirm_password).into_result()?;
                Ok(Credentials {
                    email: self.email.trim().to_string(),
                    phone: Some(self.phone.trim().to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn test_login_accepts_any_password() {
        let creds = AuthForm::login(" priya@example.com ", "pw").validate().unwrap();
        assert_eq!(creds.email, "priya@example.com");
        assert_eq!(creds.phone, None);
    }

    #[test]
    fn test_login_rejects_bad_email() {
        let err = AuthForm::login("priya", "pw").validate().unwrap_err();
        assert_eq!(err, AppError::Validation("Invalid email format".to_string()));
    }

    #[test]
    fn test_signup_checks_every_field() {
        let ok = AuthForm::signup("a@b.com", "9876543210", "longenough", "longenough");
        assert!(ok.validate().is_ok());

        let short = AuthForm::signup("a@b.com", "9876543210", "short", "short");
        assert!(short.validate().is_err());

        let mismatch = AuthForm::signup("a@b.com", "9876543210", "longenough", "different1");
        assert_eq!(
            mismatch.validate().unwrap_err(),
            AppError::Validation("Passwords don't match".to_string())
        );

        let phone = AuthForm::signup("a@b.com", "12345", "longenough", "longenough");
        assert!(phone.validate().is_err());
    }

    #[test]
    fn test_toggle_clears_fields() {
        let mut form = AuthForm::login("a@b.com", "secret");
        form.toggle_password_visibility();
        form.toggle_mode();

        assert_eq!(form.mode, AuthMode::Signup);
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.show_password);
        assert_eq!(form.mode.submit_label(), "Create Account");
    }
}
