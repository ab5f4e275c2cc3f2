//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod field_message;
pub mod layout;
pub mod toast;

pub use field_message::FieldMessage;
pub use layout::AppLayout;
pub use toast::Toast;
