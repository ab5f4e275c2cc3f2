//! Login Form Model

use serde::Serialize;

use super::FieldError;

/// Captured login form values
#[derive(Clone, Debug, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    /// Required-field check. No email format rule here: any non-empty
    /// pair of values is accepted, there are no credentials to verify.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.email.is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "Please input your email!",
            });
        }
        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Please input your password!",
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            remember: false,
        }
    }

    #[test]
    fn empty_email_yields_one_error() {
        let errors = form("", "hunter2").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please input your email!");
    }

    #[test]
    fn empty_password_yields_one_error() {
        let errors = form("a@b.com", "").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn both_empty_yields_one_error_per_field() {
        let errors = form("", "").validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn any_non_empty_values_pass() {
        // No format or credential check on login
        assert!(form("a@b.com", "x").validate().is_empty());
        assert!(form("not-an-email", "x").validate().is_empty());
    }
}
