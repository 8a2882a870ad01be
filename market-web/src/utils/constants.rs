//! Application constants

/// The only request method issued to injected providers.
pub const REQUEST_ACCOUNTS_METHOD: &str = "eth_requestAccounts";

// Header address display: 0x1234...5678
pub use shared::utils::{ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN};

// DOM ids provided by index.html
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
pub const CONFIG_ELEMENT_ID: &str = "market-config";

/// Delay before the second attempt at hiding the loading screen.
pub const LOADING_HIDE_RETRY_MS: u32 = 100;
