//! Profile Page - summary counters, menu and connected wallet

use leptos::prelude::*;
use shared::dto::profile::{ProfileSummary, PROFILE_MENU};

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let profile = ProfileSummary::sample();

    view! {
        <div class="screen profile-screen">
            <div class="card profile-card">
                <div class="avatar">{profile.initial()}</div>
                <h2 class="profile-name">{profile.display_name.clone()}</h2>
                <p class="profile-handle">{profile.handle.clone()}</p>

                <div class="profile-stats">
                    <div class="stat">
                        <p class="stat-value selling">{profile.selling}</p>
                        <p class="stat-label">"Selling"</p>
                    </div>
                    <div class="stat">
                        <p class="stat-value sold">{profile.sold}</p>
                        <p class="stat-label">"Sold"</p>
                    </div>
                    <div class="stat">
                        <p class="stat-value liked">{profile.liked}</p>
                        <p class="stat-label">"Liked"</p>
                    </div>
                </div>
            </div>

            <div class="card wallet-card">
                <p class="stat-label">"Wallet"</p>
                {move || match wallet_ctx.state().kind() {
                    Some(kind) => view! {
                        <div>
                            <p class="wallet-status connected">{format!("Connected with {}", kind.name())}</p>
                            <p class="wallet-address-full">{wallet_ctx.address()}</p>
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="wallet-status">"No wallet connected"</p>
                    }.into_any(),
                }}
            </div>

            <div class="profile-menu">
                {PROFILE_MENU.iter().map(|item| view! {
                    <div class="menu-item">
                        <span class="menu-icon">{item.icon}</span>
                        <div class="menu-text">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                        <span class="menu-chevron">"›"</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
