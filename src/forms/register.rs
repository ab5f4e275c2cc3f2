//! Register Form Model

use serde::Serialize;

use super::{is_valid_email, FieldError};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Captured registration form values
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Full rule set. The confirm check reads the current `password`
    /// value, so re-running validation after a password edit re-checks
    /// the match.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.email.is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "Please input your email!",
            });
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email!",
            });
        }

        if self.first_name.is_empty() {
            errors.push(FieldError {
                field: "firstName",
                message: "Please input your first name!",
            });
        }
        if self.last_name.is_empty() {
            errors.push(FieldError {
                field: "lastName",
                message: "Please input your last name!",
            });
        }
        if self.username.is_empty() {
            errors.push(FieldError {
                field: "username",
                message: "Please input your username!",
            });
        }

        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Please input your password!",
            });
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 6 characters!",
            });
        }

        if self.confirm_password.is_empty() {
            errors.push(FieldError {
                field: "confirmPassword",
                message: "Please confirm your password!",
            });
        } else if self.confirm_password != self.password {
            errors.push(FieldError {
                field: "confirmPassword",
                message: "Passwords do not match!",
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field_error;

    fn filled() -> RegisterForm {
        RegisterForm {
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn every_field_required() {
        let errors = RegisterForm::default().validate();
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn five_char_password_fails_min_length() {
        let mut form = filled();
        form.password = "abcde".to_string();
        form.confirm_password = "abcde".to_string();

        let errors = form.validate();
        assert_eq!(
            field_error(&errors, "password"),
            Some("Password must be at least 6 characters!")
        );
    }

    #[test]
    fn six_char_password_passes_min_length() {
        let mut form = filled();
        form.password = "abcdef".to_string();
        form.confirm_password = "abcdef".to_string();

        assert!(form.validate().is_empty());
    }

    #[test]
    fn mismatched_confirmation_blocks_submission() {
        let mut form = filled();
        form.password = "secret1".to_string();
        form.confirm_password = "secret2".to_string();

        let errors = form.validate();
        assert_eq!(
            field_error(&errors, "confirmPassword"),
            Some("Passwords do not match!")
        );
    }

    #[test]
    fn matching_confirmation_passes() {
        let mut form = filled();
        form.password = "secret1".to_string();
        form.confirm_password = "secret1".to_string();

        assert!(form.validate().is_empty());
    }

    #[test]
    fn malformed_email_reports_pattern_message() {
        let mut form = filled();
        form.email = "not-an-email".to_string();

        let errors = form.validate();
        assert_eq!(
            field_error(&errors, "email"),
            Some("Please enter a valid email!")
        );
    }

    #[test]
    fn one_error_per_field_at_most() {
        // Empty password trips the required rule, not the length rule too
        let mut form = filled();
        form.password = String::new();

        let errors = form.validate();
        assert_eq!(
            field_error(&errors, "password"),
            Some("Please input your password!")
        );
        assert_eq!(
            errors.iter().filter(|e| e.field == "password").count(),
            1
        );
    }
}
