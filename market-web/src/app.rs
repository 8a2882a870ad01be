//! Telegram Market Web App - Leptos Frontend
//!
//! Header with wallet connection, routed screens and a bottom tab bar.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{BottomNav, Navbar};
use crate::config::AppConfig;
use crate::pages::{HomePage, ProfilePage, SellPage};
use crate::state::market::provide_market_context;
use crate::state::wallet::provide_wallet_context;
use crate::utils::constants::LOADING_HIDE_RETRY_MS;
use crate::utils::dom::hide_loading_screen;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_wallet_context(config);
    provide_market_context();

    // Backup for main(): the splash may still be visible if the DOM was not ready.
    Effect::new(move || {
        if hide_loading_screen() {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(LOADING_HIDE_RETRY_MS).await;
            if !hide_loading_screen() {
                log::warn!("Loading screen still present after retry");
            }
        });
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/search") view=HomePage/>
                        <Route path=path!("/sell") view=SellPage/>
                        <Route path=path!("/profile") view=ProfilePage/>
                    </Routes>
                </main>
                <BottomNav/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="screen not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Back to the market"</span>
                </A>
            </div>
        </div>
    }
}
