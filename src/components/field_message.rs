//! Inline Field Error Message
//!
//! Renders the validation message for one field under its input, if
//! that field is currently failing.

use leptos::*;

use crate::forms::{field_error, FieldError};

#[component]
pub fn FieldMessage(errors: Memo<Vec<FieldError>>, field: &'static str) -> impl IntoView {
    view! {
        {move || {
            field_error(&errors.get(), field).map(|message| view! {
                <p class="text-red-400 text-sm mt-1">{message}</p>
            })
        }}
    }
}
