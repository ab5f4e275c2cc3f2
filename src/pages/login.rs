//! Login Page
//!
//! Standalone sign-in form. There is no credential check: a submission
//! that passes the required-field rules logs the captured values and
//! navigates to the dashboard.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::components::FieldMessage;
use crate::forms::{log_submitted, LoginForm};
use crate::theme::use_theme;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_navigate();
    let theme = use_theme();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let form = move || LoginForm {
        email: email.get(),
        password: password.get(),
        remember: remember.get(),
    };

    // Inline errors go live after the first submit attempt and track
    // the current field values from then on.
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
            log_submitted("login", &values);
            navigate("/", Default::default());
        }
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center px-4">
            // Brand
            <div class="flex items-center space-x-2 mb-6">
                <span class="text-2xl">"📦"</span>
                <span class="text-xl font-bold">"InsideBox"</span>
            </div>

            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8">
                <p class="text-gray-400 text-sm mb-2">"Please enter your details"</p>
                <h1 class="text-2xl font-bold mb-6">"Welcome back"</h1>

                <form on:submit=on_submit novalidate=true class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2" for="email-input">
                            "Email address"
                        </label>
                        <input
                            id="email-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                                   focus:border-blue-500 focus:outline-none"
                        />
                        <FieldMessage errors=errors field="email" />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2" for="password-input">
                            "Password"
                        </label>
                        <input
                            id="password-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                                   focus:border-blue-500 focus:outline-none"
                        />
                        <FieldMessage errors=errors field="password" />
                    </div>

                    <div class="flex items-center justify-between text-sm">
                        <label class="flex items-center space-x-2">
                            <input
                                type="checkbox"
                                prop:checked=move || remember.get()
                                on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            />
                            <span>"Remember for 30 days"</span>
                        </label>
                        <A href="/forgot-password" class="text-gray-400 hover:text-white">
                            "Forgot password"
                        </A>
                    </div>

                    <button
                        type="submit"
                        class="w-full rounded-lg py-3 font-semibold text-white transition-opacity hover:opacity-90"
                        style=format!("background-color: {}", theme.color_primary)
                    >
                        "Sign in"
                    </button>

                    // Decorative, as in the original: no handler attached
                    <button
                        type="button"
                        class="w-full rounded-lg py-3 font-semibold bg-gray-700 hover:bg-gray-600 transition-colors"
                    >
                        "Sign in with Google"
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-gray-400">
                    "Don't have an account? "
                    <A href="/register" class="text-blue-400 hover:underline">
                        "Sign up"
                    </A>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use leptos::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::Login;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_fields_and_submit() {
        let document = leptos::document();
        let wrapper = document.create_element("section").unwrap();
        document.body().unwrap().append_child(&wrapper).unwrap();

        mount_to(wrapper.clone().unchecked_into(), || {
            view! {
                <leptos_router::Router>
                    <Login />
                </leptos_router::Router>
            }
        });

        let email = wrapper
            .query_selector("#email-input")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>();
        assert_eq!(email.placeholder(), "Enter your email");

        let submit = wrapper
            .query_selector("button[type='submit']")
            .unwrap()
            .unwrap();
        assert_eq!(submit.text_content().unwrap().trim(), "Sign in");
    }
}
