//! Bottom tab bar. `A` marks the current tab with `aria-current="page"`,
//! which the stylesheet highlights.

use leptos::prelude::*;
use leptos_router::components::A;

const TABS: &[(&str, &str, &str)] = &[
    ("/", "🏠", "Home"),
    ("/search", "🔍", "Search"),
    ("/sell", "➕", "Sell"),
    ("/profile", "👤", "Profile"),
];

#[component]
pub fn BottomNav() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {TABS.iter().map(|(path, icon, label)| view! {
                <A href=*path exact=true>
                    <span class="tab">
                        <span class="tab-icon">{*icon}</span>
                        <span class="tab-label">{*label}</span>
                    </span>
                </A>
            }).collect_view()}
        </nav>
    }
}
