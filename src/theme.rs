//! Theme Configuration
//!
//! Global style tokens provided through context.

use leptos::*;

/// Design tokens shared by the whole component tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary brand color, applied to call-to-action buttons and the
    /// selected menu entry
    pub color_primary: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color_primary: "#1677ff",
        }
    }
}

/// Provide the theme to the component tree
pub fn provide_theme() {
    provide_context(Theme::default());
}

/// Read the theme from context, falling back to the default tokens
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}
