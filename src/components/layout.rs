//! Layout Shell
//!
//! Collapsible sider menu, header with the collapse toggle, routed
//! content area, and footer. Wraps every page except login and
//! register.

use chrono::Datelike;
use leptos::*;
use leptos_router::{use_location, use_navigate, Outlet};

use crate::theme::use_theme;

/// Sider menu entries. `logout` is the only key that is not a path.
const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        key: "/",
        icon: "🏠",
        label: "Home",
    },
    MenuItem {
        key: "/profile",
        icon: "👤",
        label: "Profile",
    },
    MenuItem {
        key: "/settings",
        icon: "⚙",
        label: "Settings",
    },
    MenuItem {
        key: "logout",
        icon: "⏻",
        label: "Logout",
    },
];

/// One entry in the sider menu
#[derive(Clone, Copy)]
struct MenuItem {
    key: &'static str,
    icon: &'static str,
    label: &'static str,
}

/// Resolve a menu key to the path it navigates to. There is no session
/// to clear, so logout is just a redirect to the login page.
fn menu_target(key: &str) -> &str {
    if key == "logout" {
        "/login"
    } else {
        key
    }
}

/// Sider width class for the current collapse state
fn sider_class(collapsed: bool) -> &'static str {
    if collapsed {
        "w-20 shrink-0 bg-gray-800 border-r border-gray-700 transition-all duration-200"
    } else {
        "w-52 shrink-0 bg-gray-800 border-r border-gray-700 transition-all duration-200"
    }
}

/// Navigation shell around the routed pages
#[component]
pub fn AppLayout() -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);

    view! {
        <div class="min-h-screen flex bg-gray-900 text-white">
            // Sider with logo block and menu
            <aside class=move || sider_class(collapsed.get())>
                <div class="h-8 m-4 rounded bg-white/20" />
                <nav class="px-2 space-y-1">
                    {MENU_ITEMS
                        .iter()
                        .map(|item| view! { <MenuEntry item=*item collapsed=collapsed /> })
                        .collect_view()}
                </nav>
            </aside>

            <div class="flex-1 flex flex-col">
                // Header with collapse toggle
                <header class="h-16 bg-gray-800 border-b border-gray-700 flex items-center">
                    <button
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                        class="w-16 h-16 text-gray-300 hover:text-white transition-colors"
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </header>

                // Routed page content
                <main class="flex-1 m-6 p-6 bg-gray-800 rounded-lg">
                    <Outlet />
                </main>

                <Footer />
            </div>
        </div>
    }
}

/// Individual menu entry; highlights when its key matches the path
#[component]
fn MenuEntry(item: MenuItem, collapsed: ReadSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let theme = use_theme();

    let selected = create_memo(move |_| location.pathname.get() == item.key);

    view! {
        <button
            on:click=move |_| navigate(menu_target(item.key), Default::default())
            class=move || {
                let base = "w-full flex items-center space-x-3 px-4 py-2 rounded-lg \
                            text-left transition-colors";
                if selected.get() {
                    format!("{} text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
            style=move || {
                selected
                    .get()
                    .then(|| format!("background-color: {}", theme.color_primary))
            }
        >
            <span class="text-lg">{item.icon}</span>
            {move || {
                (!collapsed.get()).then(|| view! { <span>{item.label}</span> })
            }}
        </button>
    }
}

/// Footer with brand and current year
#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-4 text-center text-sm text-gray-500">
            {format!("InsideBox ©{} Created with Leptos", year)}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_key_redirects_to_login() {
        assert_eq!(menu_target("logout"), "/login");
    }

    #[test]
    fn path_keys_pass_through() {
        assert_eq!(menu_target("/"), "/");
        assert_eq!(menu_target("/profile"), "/profile");
        assert_eq!(menu_target("/settings"), "/settings");
    }

    #[test]
    fn collapse_toggle_changes_sider_width() {
        assert_ne!(sider_class(false), sider_class(true));
    }

    #[test]
    fn double_toggle_restores_sider_width() {
        let mut collapsed = false;
        let initial = sider_class(collapsed);

        collapsed = !collapsed;
        assert_ne!(sider_class(collapsed), initial);

        collapsed = !collapsed;
        assert_eq!(sider_class(collapsed), initial);
    }
}
