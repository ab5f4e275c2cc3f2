//! Home Page
//!
//! Static dashboard: three statistic cards and two placeholder panels.
//! No data fetching, no state.

use leptos::*;

/// Placeholder dashboard statistics
const STATS: &[(&str, u64, &str)] = &[
    ("Users", 1128, "👤"),
    ("Orders", 93, "🛒"),
    ("Revenue", 11280, "$"),
];

/// Dashboard page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>

            // Statistic cards
            <div class="grid grid-cols-3 gap-4">
                {STATS
                    .iter()
                    .map(|&(title, value, icon)| view! {
                        <StatCard title=title value=value icon=icon />
                    })
                    .collect_view()}
            </div>

            // Placeholder panels
            <div class="grid grid-cols-2 gap-4">
                <PlaceholderPanel title="Recent Activity" body="No recent activity" />
                <PlaceholderPanel title="Quick Actions" body="No quick actions available" />
            </div>
        </div>
    }
}

/// Single statistic card with a prefix icon
#[component]
fn StatCard(title: &'static str, value: u64, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 border border-gray-600">
            <span class="text-gray-400 text-sm">{title}</span>
            <div class="flex items-center space-x-2 mt-2">
                <span class="text-xl text-gray-400">{icon}</span>
                <span class="text-3xl font-bold">{format_stat(value)}</span>
            </div>
        </div>
    }
}

/// Titled panel with static placeholder text
#[component]
fn PlaceholderPanel(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg border border-gray-600">
            <div class="px-4 py-3 border-b border-gray-600 font-semibold">{title}</div>
            <p class="px-4 py-6 text-gray-400">{body}</p>
        </div>
    }
}

/// Group digits in threes for display (1128 renders as "1,128")
fn format_stat(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_ungrouped() {
        assert_eq!(format_stat(0), "0");
        assert_eq!(format_stat(93), "93");
        assert_eq!(format_stat(999), "999");
    }

    #[test]
    fn dashboard_values_grouped() {
        assert_eq!(format_stat(1128), "1,128");
        assert_eq!(format_stat(11280), "11,280");
    }

    #[test]
    fn large_values_grouped_in_threes() {
        assert_eq!(format_stat(1_000_000), "1,000,000");
        assert_eq!(format_stat(123_456_789), "123,456,789");
    }
}
