//! Telegram Market - marketplace mini app with browser wallet login
//!
//! Buyers browse and list products; the header connects an injected
//! EVM wallet (MetaMask, Trust Wallet, TokenPocket) to show the account.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Telegram Market starting...");

    let config = AppConfig::load();

    utils::dom::hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
