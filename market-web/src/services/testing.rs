//! In-memory stand-ins for injected providers and the alert sink.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{ProviderError, USER_REJECTED_CODE};
use crate::services::notice::NoticeSink;
use crate::services::wallet::{InjectedSlot, ProviderSource, WalletProvider};

/// Provider that answers every request with a fixed response
#[derive(Clone)]
pub struct StubProvider {
    trust: bool,
    token_pocket: bool,
    response: Result<Vec<String>, ProviderError>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl StubProvider {
    pub fn accounts(accounts: &[&str]) -> Self {
        Self::responding(Ok(accounts.iter().map(|a| a.to_string()).collect()))
    }

    pub fn user_rejects() -> Self {
        Self::responding(Err(ProviderError::Rejected {
            code: Some(USER_REJECTED_CODE),
            message: "User rejected the request.".to_string(),
        }))
    }

    pub fn responding(response: Result<Vec<String>, ProviderError>) -> Self {
        Self {
            trust: false,
            token_pocket: false,
            response,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_trust(mut self) -> Self {
        self.trust = true;
        self
    }

    pub fn with_token_pocket(mut self) -> Self {
        self.token_pocket = true;
        self
    }

    pub fn requested_methods(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WalletProvider for StubProvider {
    fn is_trust(&self) -> bool {
        self.trust
    }

    fn is_token_pocket(&self) -> bool {
        self.token_pocket
    }

    async fn request(&self, method: &str) -> Result<Vec<String>, ProviderError> {
        self.calls.borrow_mut().push(method.to_string());
        self.response.clone()
    }
}

/// A fake `window` with whichever slots a test fills in
#[derive(Clone, Default)]
pub struct StubProviders {
    slots: HashMap<InjectedSlot, Rc<dyn WalletProvider>>,
}

impl StubProviders {
    pub fn with(mut self, slot: InjectedSlot, provider: StubProvider) -> Self {
        self.slots.insert(slot, Rc::new(provider));
        self
    }

    pub fn without(mut self, slot: InjectedSlot) -> Self {
        self.slots.remove(&slot);
        self
    }

    /// True when `provider` is the object injected at `slot`.
    pub fn is_same(&self, slot: InjectedSlot, provider: &Rc<dyn WalletProvider>) -> bool {
        self.slots.get(&slot).is_some_and(|injected| Rc::ptr_eq(injected, provider))
    }
}

impl ProviderSource for StubProviders {
    fn lookup(&self, slot: InjectedSlot) -> Option<Rc<dyn WalletProvider>> {
        self.slots.get(&slot).cloned()
    }
}

/// Collects notices instead of calling `window.alert`
#[derive(Default)]
pub struct RecordingNotices {
    shown: RefCell<Vec<String>>,
}

impl RecordingNotices {
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, message: &str) {
        self.shown.borrow_mut().push(message.to_string());
    }
}
