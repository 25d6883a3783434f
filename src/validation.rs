//! Form checks run before anything reaches a session model.

use serde::Serialize;

use crate::models::Credentials;

/// A message attached to one form field, ready to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

/// Raw input of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    /// All field errors at once, or credentials with a trimmed email.
    pub fn validate(&self) -> Result<Credentials, Vec<FieldError>> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !looks_like_email(email) {
            errors.push(FieldError::new("email", "Email address is invalid"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        if errors.is_empty() {
            Ok(Credentials::new(email, self.password.clone()))
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_form() {
        let credentials = LoginForm::new("  ada@example.com ", "hunter22")
            .validate()
            .unwrap();
        assert_eq!(credentials, Credentials::new("ada@example.com", "hunter22"));
    }

    #[test]
    fn test_empty_form_reports_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["email", "password"]);
        assert_eq!(errors[0].message, "Email is required");
    }

    #[test]
    fn test_malformed_emails() {
        for email in ["ada", "@example.com", "ada@", "a@b@c", "ada @example.com"] {
            let errors = LoginForm::new(email, "pw").validate().unwrap_err();
            assert_eq!(fields(&errors), vec!["email"], "email: {:?}", email);
            assert_eq!(errors[0].message, "Email address is invalid");
        }
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let credentials = LoginForm::new("ada@example.com", " pw ").validate().unwrap();
        assert_eq!(credentials.password, " pw ");
    }
}
