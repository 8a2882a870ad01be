//! Injected EVM Wallet Providers
//!
//! Wallet extensions inject a provider object into `window` under a well-known
//! name. Several of them reuse `window.ethereum` and identify themselves with a
//! capability flag (`isTrust`, `isTokenPocket`), so finding "the Trust Wallet
//! provider" means checking the flag on the shared slot before falling back to
//! the wallet's own global.
//!
//! Everything in this module is written against the [`ProviderSource`] and
//! [`WalletProvider`] traits. The browser implementation lives in
//! [`crate::services::injected`]; tests plug in stubs.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConnectError, ProviderError};
use crate::utils::constants::REQUEST_ACCOUNTS_METHOD;

/// Wallet the user asked to connect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    MetaMask,
    TrustWallet,
    TokenPocket,
    /// Whichever injected wallet is present
    Generic,
}

impl WalletKind {
    pub fn name(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "MetaMask",
            WalletKind::TrustWallet => "Trust Wallet",
            WalletKind::TokenPocket => "TokenPocket",
            WalletKind::Generic => "Wallet",
        }
    }

    /// Emoji shown on the connect button.
    pub fn icon(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "🦊",
            WalletKind::TrustWallet => "🛡️",
            WalletKind::TokenPocket => "👛",
            WalletKind::Generic => "💼",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Global property a provider is injected under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InjectedSlot {
    /// `window.ethereum`, shared by MetaMask and most EIP-1193 wallets
    Ethereum,
    /// `window.trustwallet`
    TrustWallet,
    /// `window.tp`
    TokenPocket,
}

impl InjectedSlot {
    /// Best-effort probe order.
    pub const PROBE_ORDER: [InjectedSlot; 3] =
        [InjectedSlot::Ethereum, InjectedSlot::TrustWallet, InjectedSlot::TokenPocket];

    pub fn global_name(&self) -> &'static str {
        match self {
            InjectedSlot::Ethereum => "ethereum",
            InjectedSlot::TrustWallet => "trustwallet",
            InjectedSlot::TokenPocket => "tp",
        }
    }
}

/// How a [`WalletKind`] is mapped onto the injected slots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// One button per wallet. MetaMask takes `ethereum` as-is, Trust Wallet and
    /// TokenPocket take `ethereum` only when it carries their flag and otherwise
    /// use their own global.
    #[default]
    Explicit,
    /// A single button that probes `ethereum`, `trustwallet`, `tp` in order.
    BestEffort,
}

impl ResolutionPolicy {
    /// Buttons rendered while disconnected.
    pub fn offered_kinds(&self) -> &'static [WalletKind] {
        match self {
            ResolutionPolicy::Explicit => {
                &[WalletKind::MetaMask, WalletKind::TrustWallet, WalletKind::TokenPocket]
            }
            ResolutionPolicy::BestEffort => &[WalletKind::Generic],
        }
    }
}

impl FromStr for ResolutionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(ResolutionPolicy::Explicit),
            "best-effort" | "besteffort" | "auto" => Ok(ResolutionPolicy::BestEffort),
            other => Err(ConfigError::InvalidPolicy(other.to_string())),
        }
    }
}

/// The slice of the EIP-1193 provider surface this app relies on
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `isTrust` flag on a shared `ethereum` object
    fn is_trust(&self) -> bool {
        false
    }

    /// `isTokenPocket` flag on a shared `ethereum` object
    fn is_token_pocket(&self) -> bool {
        false
    }

    /// `provider.request({ method })`, decoded as a list of strings
    async fn request(&self, method: &str) -> Result<Vec<String>, ProviderError>;
}

/// Where providers are looked up. Implementations must re-read their source on
/// every call: extensions can inject or vanish between attempts.
pub trait ProviderSource {
    fn lookup(&self, slot: InjectedSlot) -> Option<Rc<dyn WalletProvider>>;
}

/// A provider together with the slot it was found in
#[derive(Clone)]
pub struct ProviderHandle {
    slot: InjectedSlot,
    provider: Rc<dyn WalletProvider>,
}

impl ProviderHandle {
    pub fn new(slot: InjectedSlot, provider: Rc<dyn WalletProvider>) -> Self {
        Self { slot, provider }
    }

    pub fn slot(&self) -> InjectedSlot {
        self.slot
    }

    pub fn provider(&self) -> &Rc<dyn WalletProvider> {
        &self.provider
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle").field("slot", &self.slot).finish_non_exhaustive()
    }
}

fn lookup_in<S: ProviderSource + ?Sized>(source: &S, slot: InjectedSlot) -> Option<ProviderHandle> {
    source.lookup(slot).map(|provider| ProviderHandle::new(slot, provider))
}

fn probe<S: ProviderSource + ?Sized>(source: &S) -> Option<ProviderHandle> {
    InjectedSlot::PROBE_ORDER.iter().find_map(|slot| lookup_in(source, *slot))
}

/// `ethereum` when it carries the wallet's flag, else the wallet's own global.
fn flagged_or_own<S, F>(source: &S, own: InjectedSlot, flag: F) -> Option<ProviderHandle>
where
    S: ProviderSource + ?Sized,
    F: Fn(&dyn WalletProvider) -> bool,
{
    lookup_in(source, InjectedSlot::Ethereum)
        .filter(|handle| flag(&*handle.provider))
        .or_else(|| lookup_in(source, own))
}

/// Find the provider to use for `kind`. Pure lookup, no side effects.
pub fn resolve_provider<S: ProviderSource + ?Sized>(
    source: &S,
    policy: ResolutionPolicy,
    kind: WalletKind,
) -> Result<ProviderHandle, ConnectError> {
    let handle = match (policy, kind) {
        (ResolutionPolicy::BestEffort, _) | (_, WalletKind::Generic) => probe(source),
        (ResolutionPolicy::Explicit, WalletKind::MetaMask) => lookup_in(source, InjectedSlot::Ethereum),
        (ResolutionPolicy::Explicit, WalletKind::TrustWallet) => {
            flagged_or_own(source, InjectedSlot::TrustWallet, |p| p.is_trust())
        }
        (ResolutionPolicy::Explicit, WalletKind::TokenPocket) => {
            flagged_or_own(source, InjectedSlot::TokenPocket, |p| p.is_token_pocket())
        }
    };

    match handle {
        Some(handle) => {
            log::debug!("{} resolved to window.{}", kind, handle.slot.global_name());
            Ok(handle)
        }
        None => Err(ConnectError::ProviderNotFound(kind)),
    }
}

/// Ask the provider for account access and return the first account.
pub async fn request_accounts(handle: &ProviderHandle, kind: WalletKind) -> Result<String, ConnectError> {
    log::info!("Requesting accounts from window.{}", handle.slot.global_name());

    let accounts = handle
        .provider
        .request(REQUEST_ACCOUNTS_METHOD)
        .await
        .map_err(|e| ConnectError::rejected(kind, &e))?;

    accounts.into_iter().next().ok_or_else(|| ConnectError::RequestRejected {
        kind,
        reason: "provider returned no accounts".to_string(),
        cancelled: false,
    })
}

/// Resolve `kind` and request its accounts. Does not touch connector state.
pub async fn negotiate<S: ProviderSource + ?Sized>(
    source: &S,
    policy: ResolutionPolicy,
    kind: WalletKind,
) -> Result<String, ConnectError> {
    let handle = resolve_provider(source, policy, kind)?;
    request_accounts(&handle, kind).await
}
