//! Wallet state management

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::connector::{run_attempt, AttemptState, ConnectionState, WalletConnector};
use crate::services::injected::BrowserProviders;
use crate::services::notice::BrowserAlert;
use crate::services::wallet::WalletKind;
use crate::utils::constants::{ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connector: RwSignal<WalletConnector>,
    pub config: AppConfig,
}

impl WalletContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            connector: RwSignal::new(WalletConnector::new()),
            config,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.connector.with(|c| c.state().clone())
    }

    pub fn is_connected(&self) -> bool {
        self.connector.with(|c| c.state().is_connected())
    }

    pub fn is_pending(&self) -> bool {
        self.connector.with(|c| c.is_pending())
    }

    pub fn pending_kind(&self) -> Option<WalletKind> {
        self.connector.with(|c| match c.attempt() {
            AttemptState::Pending(kind) => Some(*kind),
            _ => None,
        })
    }

    pub fn address(&self) -> Option<String> {
        self.connector.with(|c| c.state().account().map(|s| s.to_string()))
    }

    pub fn short_address(&self) -> Option<String> {
        self.connector.with(|c| c.state().display_account(ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN))
    }

    /// Button handler: run one attempt against the shared connector signal.
    ///
    /// The signal is updated before and after the provider await, never held
    /// across it. Clicks that arrive while another request is pending are refused
    /// by `begin`.
    pub fn connect(&self, kind: WalletKind) {
        let connector = self.connector;
        let AppConfig { policy, locale } = self.config;

        leptos::task::spawn_local(async move {
            let outcome = run_attempt(
                move |f| {
                    // Disposed signal: the callback is skipped and the attempt ends.
                    connector.try_update(|c| f(c));
                },
                &BrowserProviders,
                &BrowserAlert,
                policy,
                locale,
                kind,
            )
            .await;

            match outcome {
                Ok(_) => log::debug!("{} attempt settled", kind),
                Err(e) => log::debug!("{} attempt ended: {}", kind, e),
            }
        });
    }
}

pub fn provide_wallet_context(config: AppConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
