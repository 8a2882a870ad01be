//! Header Bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::WalletConnect;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <A href="/" exact=true>
                <span class="top-bar-title">"Marketplace"</span>
            </A>
            <div class="top-bar-actions">
                <A href="/sell">
                    <span class="icon-button" title="List a product">"+"</span>
                </A>
                <WalletConnect/>
            </div>
        </header>
    }
}
