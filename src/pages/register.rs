//! Register Page
//!
//! Registration form. Like login there is no backend: a valid
//! submission logs the values, shows a success toast, and redirects to
//! the login page.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::FieldMessage;
use crate::forms::{log_submitted, FieldError, RegisterForm};
use crate::state::global::GlobalState;
use crate::theme::use_theme;

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let theme = use_theme();

    let (email, set_email) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);

    let form = move || RegisterForm {
        email: email.get(),
        first_name: first_name.get(),
        last_name: last_name.get(),
        username: username.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
    };

    // Recomputes from the live field values once a submit has been
    // attempted, so editing the password re-checks the confirmation.
    let errors = create_memo(move |_| {
        if submitted.get() {
            form().validate()
        } else {
            Vec::new()
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);

        let values = form();
        if values.validate().is_empty() {
            log_submitted("register", &values);
            state.show_success("Registration successful!");
            navigate("/login", Default::default());
        }
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl">
                <div class="px-8 py-4 border-b border-gray-700 font-semibold">"Register"</div>

                <form on:submit=on_submit novalidate=true class="p-8 space-y-4">
                    <FormInput
                        icon="✉"
                        placeholder="Email"
                        input_type="email"
                        value=email
                        set_value=set_email
                        errors=errors
                        field="email"
                    />
                    <FormInput
                        icon="👤"
                        placeholder="First Name"
                        value=first_name
                        set_value=set_first_name
                        errors=errors
                        field="firstName"
                    />
                    <FormInput
                        icon="👤"
                        placeholder="Last Name"
                        value=last_name
                        set_value=set_last_name
                        errors=errors
                        field="lastName"
                    />
                    <FormInput
                        icon="👤"
                        placeholder="Username"
                        value=username
                        set_value=set_username
                        errors=errors
                        field="username"
                    />
                    <FormInput
                        icon="🔒"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        set_value=set_password
                        errors=errors
                        field="password"
                    />
                    <FormInput
                        icon="🔒"
                        placeholder="Confirm Password"
                        input_type="password"
                        value=confirm_password
                        set_value=set_confirm_password
                        errors=errors
                        field="confirmPassword"
                    />

                    <button
                        type="submit"
                        class="w-full rounded-lg py-3 font-semibold text-white transition-opacity hover:opacity-90"
                        style=format!("background-color: {}", theme.color_primary)
                    >
                        "Register"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Text input with a prefix icon and its inline error slot
#[component]
fn FormInput(
    icon: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    errors: Memo<Vec<FieldError>>,
    field: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="relative">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">{icon}</span>
                <input
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg pl-10 pr-4 py-3 border border-gray-600 \
                           focus:border-blue-500 focus:outline-none"
                />
            </div>
            <FieldMessage errors=errors field=field />
        </div>
    }
}
