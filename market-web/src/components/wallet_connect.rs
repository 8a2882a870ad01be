//! Wallet Connect Widget
//!
//! Disconnected: one button per wallet the configured policy offers, all disabled
//! while a request is pending. Connected: the shortened account.

use leptos::logging::log;
use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletConnect() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let kinds = wallet_ctx.config.policy.offered_kinds();

    view! {
        <div class="wallet-connect">
            {move || match wallet_ctx.short_address() {
                Some(short) => {
                    let full = wallet_ctx.address().unwrap_or_default();
                    view! {
                        <span class="wallet-address" title=full>{short}</span>
                    }.into_any()
                }
                None => view! {
                    <div class="wallet-buttons">
                        {kinds.iter().copied().map(|kind| {
                            let label = move || {
                                if wallet_ctx.pending_kind() == Some(kind) {
                                    "Connecting...".to_string()
                                } else {
                                    format!("Connect {}", kind.name())
                                }
                            };
                            view! {
                                <button
                                    class="wallet-button"
                                    disabled=move || wallet_ctx.is_pending()
                                    on:click=move |_| {
                                        log!("Wallet connection clicked: {}", kind.name());
                                        wallet_ctx.connect(kind);
                                    }
                                >
                                    <span class="wallet-icon">{kind.icon()}</span>
                                    <span>{label}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
