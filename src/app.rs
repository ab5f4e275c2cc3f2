//! App Root Component
//!
//! Routing and global providers. Login and register render standalone;
//! the index route renders inside the navigation shell.

use leptos::*;
use leptos_router::*;

use crate::components::{AppLayout, Toast};
use crate::pages::{Home, Login, Register};
use crate::state::global::provide_global_state;
use crate::theme::provide_theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme();
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/" view=AppLayout>
                    <Route path="" view=Home />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications survive navigation
            <Toast />
        </Router>
    }
}

/// Catch-all for paths with no route. The menu's profile and settings
/// entries land here until those pages exist.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 rounded-lg font-medium bg-gray-700 hover:bg-gray-600 transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
