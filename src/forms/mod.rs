//! Form Models
//!
//! Typed field structs and pure validators for the login and register
//! forms. A validator returns the failed fields as a flat list; the
//! pages render each message inline under its input. At most one
//! message is reported per field, the first rule that failed.

pub mod login;
pub mod register;

pub use login::LoginForm;
pub use register::RegisterForm;

/// A validation failure attached to a single form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Look up the inline message for one field, if it failed validation
pub fn field_error(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Basic email shape check
pub fn is_valid_email(email: &str) -> bool {
    lazy_regex::regex_is_match!(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$", email)
}

/// Log submitted form values to the browser console, JSON-encoded.
/// Development aid only; nothing is sent anywhere.
pub fn log_submitted(form_name: &str, values: &impl serde::Serialize) {
    if let Ok(json) = serde_json::to_string(values) {
        web_sys::console::log_1(&format!("{} success: {}", form_name, json).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepted() {
        assert!(is_valid_email("popo@momo.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn malformed_email_rejected() {
        assert!(!is_valid_email("popom"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn field_error_finds_first_match() {
        let errors = [
            FieldError {
                field: "email",
                message: "Please input your email!",
            },
            FieldError {
                field: "password",
                message: "Please input your password!",
            },
        ];

        assert_eq!(
            field_error(&errors, "password"),
            Some("Please input your password!")
        );
        assert_eq!(field_error(&errors, "username"), None);
    }
}
