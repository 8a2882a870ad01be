//! Wallet connector state machine
//!
//! Two pieces of state are tracked separately:
//!
//! - [`ConnectionState`]: which account (if any) the UI shows.
//! - [`AttemptState`]: the lifecycle of the latest button press
//!   (`Idle -> Pending -> Settled`).
//!
//! A press calls [`WalletConnector::begin`], awaits [`negotiate`] and then hands the
//! result to [`WalletConnector::finish`]. [`run_attempt`] drives that sequence
//! through an accessor closure, so state kept in a reactive signal is only
//! borrowed before and after the await, never across it.
//! [`WalletConnector::connect`] is the same sequence on a plain `&mut self`.

use shared::utils::{format_address, truncate_address};

use crate::config::Locale;
use crate::error::ConnectError;
use crate::services::notice::{notice_text, NoticeSink};
use crate::services::wallet::{negotiate, ProviderSource, ResolutionPolicy, WalletKind};

/// Account the UI currently knows about
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected { account: String, kind: WalletKind },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn account(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { account, .. } => Some(account),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn kind(&self) -> Option<WalletKind> {
        match self {
            ConnectionState::Connected { kind, .. } => Some(*kind),
            ConnectionState::Disconnected => None,
        }
    }

    /// Account shortened to `prefix...suffix` for the header.
    pub fn display_account(&self, prefix_len: usize, suffix_len: usize) -> Option<String> {
        self.account().map(|account| format_address(account, prefix_len, suffix_len))
    }
}

/// Lifecycle of the most recent connection attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AttemptState {
    #[default]
    Idle,
    Pending(WalletKind),
    Settled(Result<String, ConnectError>),
}

/// Owns the connection and attempt state for the wallet widget
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletConnector {
    state: ConnectionState,
    attempt: AttemptState,
}

impl WalletConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.attempt, AttemptState::Pending(_))
    }

    /// Start an attempt for `kind`. Only one attempt may be in flight.
    pub fn begin(&mut self, kind: WalletKind) -> Result<(), ConnectError> {
        if let AttemptState::Pending(current) = self.attempt {
            log::debug!("Ignoring {} connect, {} request still pending", kind, current);
            return Err(ConnectError::AttemptInFlight);
        }
        self.attempt = AttemptState::Pending(kind);
        Ok(())
    }

    /// Record the outcome of the pending attempt.
    ///
    /// Success replaces any previous account. Failure leaves the connection state
    /// as it was. Returns `false` when no attempt was pending and nothing changed.
    pub fn settle(&mut self, outcome: Result<String, ConnectError>) -> bool {
        let AttemptState::Pending(kind) = self.attempt else {
            log::warn!("Dropping connection outcome with no pending attempt");
            return false;
        };

        match &outcome {
            Ok(account) => {
                log::info!("{} connected: {}", kind, truncate_address(account));
                self.state = ConnectionState::Connected { account: account.clone(), kind };
            }
            Err(e @ ConnectError::ProviderNotFound(_)) => log::warn!("{}", e),
            Err(e) => log::error!("{}", e),
        }
        self.attempt = AttemptState::Settled(outcome);
        true
    }

    /// [`settle`](Self::settle), then surface a failure through `notices`.
    pub fn finish<N: NoticeSink + ?Sized>(
        &mut self,
        outcome: Result<String, ConnectError>,
        notices: &N,
        locale: Locale,
    ) -> Result<String, ConnectError> {
        if self.settle(outcome.clone()) {
            if let Err(e) = &outcome {
                if let Some(text) = notice_text(e, locale) {
                    notices.notify(&text);
                }
            }
        }
        outcome
    }

    /// Run a complete attempt: begin, resolve, request accounts, settle.
    pub async fn connect<S, N>(
        &mut self,
        source: &S,
        notices: &N,
        policy: ResolutionPolicy,
        locale: Locale,
        kind: WalletKind,
    ) -> Result<String, ConnectError>
    where
        S: ProviderSource + ?Sized,
        N: NoticeSink + ?Sized,
    {
        run_attempt(|f| f(&mut *self), source, notices, policy, locale, kind).await
    }
}

/// Run one attempt against a connector reached through `access`.
///
/// `access` is called twice, once to [`begin`](WalletConnector::begin) and once to
/// [`finish`](WalletConnector::finish). If it never invokes the callback (the
/// owning signal was disposed) the attempt ends without touching a provider, or
/// without recording the outcome.
pub async fn run_attempt<A, S, N>(
    mut access: A,
    source: &S,
    notices: &N,
    policy: ResolutionPolicy,
    locale: Locale,
    kind: WalletKind,
) -> Result<String, ConnectError>
where
    A: FnMut(&mut dyn FnMut(&mut WalletConnector)),
    S: ProviderSource + ?Sized,
    N: NoticeSink + ?Sized,
{
    let mut began = Err(ConnectError::AttemptInFlight);
    access(&mut |c: &mut WalletConnector| began = c.begin(kind));
    began?;

    let outcome = negotiate(source, policy, kind).await;

    let mut pending = Some(outcome.clone());
    let mut settled = None;
    access(&mut |c: &mut WalletConnector| {
        if let Some(outcome) = pending.take() {
            settled = Some(c.finish(outcome, notices, locale));
        }
    });
    settled.unwrap_or(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::services::testing::{RecordingNotices, StubProvider, StubProviders};
    use crate::services::wallet::InjectedSlot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const FIRST: &str = "0xAAA0000000000000000000000000000000000111";
    const SECOND: &str = "0xBBB0000000000000000000000000000000000222";

    fn connect(
        connector: &mut WalletConnector,
        source: &StubProviders,
        notices: &RecordingNotices,
        kind: WalletKind,
    ) -> Result<String, ConnectError> {
        block_on(connector.connect(source, notices, ResolutionPolicy::Explicit, Locale::English, kind))
    }

    #[test]
    fn test_run_attempt_through_shared_cell() {
        let cell = RefCell::new(WalletConnector::new());
        let source = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::accounts(&[FIRST]));
        let notices = RecordingNotices::default();

        let result = block_on(run_attempt(
            |f| f(&mut cell.borrow_mut()),
            &source,
            &notices,
            ResolutionPolicy::Explicit,
            Locale::English,
            WalletKind::MetaMask,
        ));

        assert_eq!(result, Ok(FIRST.to_string()));
        assert_eq!(cell.borrow().state().account(), Some(FIRST));
        assert!(!cell.borrow().is_pending());
        assert!(notices.shown().is_empty());
    }

    #[test]
    fn test_run_attempt_refused_while_pending() {
        let cell = RefCell::new(WalletConnector::new());
        cell.borrow_mut().begin(WalletKind::TrustWallet).unwrap();
        let provider = StubProvider::accounts(&[FIRST]);
        let source = StubProviders::default().with(InjectedSlot::Ethereum, provider.clone());
        let notices = RecordingNotices::default();

        let result = block_on(run_attempt(
            |f| f(&mut cell.borrow_mut()),
            &source,
            &notices,
            ResolutionPolicy::Explicit,
            Locale::English,
            WalletKind::MetaMask,
        ));

        assert_eq!(result, Err(ConnectError::AttemptInFlight));
        assert_eq!(cell.borrow().attempt(), &AttemptState::Pending(WalletKind::TrustWallet));
        assert!(provider.requested_methods().is_empty());
        assert!(notices.shown().is_empty());
    }

    #[test]
    fn test_run_attempt_with_disposed_state_skips_provider() {
        let provider = StubProvider::accounts(&[FIRST]);
        let source = StubProviders::default().with(InjectedSlot::Ethereum, provider.clone());
        let notices = RecordingNotices::default();

        let result = block_on(run_attempt(
            |_| {},
            &source,
            &notices,
            ResolutionPolicy::Explicit,
            Locale::English,
            WalletKind::MetaMask,
        ));

        assert_eq!(result, Err(ConnectError::AttemptInFlight));
        assert!(provider.requested_methods().is_empty());
    }

    #[test]
    fn test_new_connector_is_idle_and_disconnected() {
        let connector = WalletConnector::new();
        assert_eq!(connector.state(), &ConnectionState::Disconnected);
        assert_eq!(connector.attempt(), &AttemptState::Idle);
        assert!(!connector.is_pending());
    }

    #[test]
    fn test_no_provider_notifies_once_per_click() {
        let source = StubProviders::default();

        for kind in [WalletKind::MetaMask, WalletKind::TrustWallet, WalletKind::TokenPocket] {
            let mut connector = WalletConnector::new();
            let notices = RecordingNotices::default();

            let result = connect(&mut connector, &source, &notices, kind);

            assert_eq!(result, Err(ConnectError::ProviderNotFound(kind)));
            assert_eq!(connector.state(), &ConnectionState::Disconnected);
            assert_eq!(notices.shown(), vec![format!("{} is not installed.", kind.name())]);
        }
    }

    #[test]
    fn test_successful_connection() {
        let source = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::accounts(&[FIRST]));
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let result = connect(&mut connector, &source, &notices, WalletKind::MetaMask);

        assert_eq!(result.as_deref(), Ok(FIRST));
        assert_eq!(
            connector.state(),
            &ConnectionState::Connected { account: FIRST.to_string(), kind: WalletKind::MetaMask }
        );
        assert_eq!(connector.attempt(), &AttemptState::Settled(Ok(FIRST.to_string())));
        assert_eq!(connector.state().display_account(6, 4).as_deref(), Some("0xAAA0...0111"));
        assert!(notices.shown().is_empty());
    }

    #[test]
    fn test_rejection_keeps_disconnected_and_notifies() {
        let source = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::user_rejects());
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let result = connect(&mut connector, &source, &notices, WalletKind::MetaMask);

        assert!(matches!(result, Err(ConnectError::RequestRejected { cancelled: true, .. })));
        assert_eq!(connector.state(), &ConnectionState::Disconnected);
        assert!(!connector.is_pending());
        assert_eq!(notices.shown(), vec!["MetaMask connection was cancelled.".to_string()]);
    }

    #[test]
    fn test_malformed_response_is_rejection() {
        let provider = StubProvider::responding(Err(ProviderError::Malformed("{}".to_string())));
        let source = StubProviders::default().with(InjectedSlot::TokenPocket, provider);
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let result = connect(&mut connector, &source, &notices, WalletKind::TokenPocket);

        assert_eq!(
            result,
            Err(ConnectError::RequestRejected {
                kind: WalletKind::TokenPocket,
                reason: "unexpected response: {}".to_string(),
                cancelled: false,
            })
        );
        assert_eq!(connector.state(), &ConnectionState::Disconnected);
    }

    #[test]
    fn test_reconnect_overwrites_account() {
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let first = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::accounts(&[FIRST]));
        connect(&mut connector, &first, &notices, WalletKind::MetaMask).unwrap();

        let second = StubProviders::default().with(InjectedSlot::TrustWallet, StubProvider::accounts(&[SECOND]));
        connect(&mut connector, &second, &notices, WalletKind::TrustWallet).unwrap();

        assert_eq!(
            connector.state(),
            &ConnectionState::Connected { account: SECOND.to_string(), kind: WalletKind::TrustWallet }
        );
    }

    #[test]
    fn test_failed_reconnect_keeps_previous_account() {
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let source = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::accounts(&[FIRST]));
        connect(&mut connector, &source, &notices, WalletKind::MetaMask).unwrap();

        // extension removed between clicks
        let gone = source.without(InjectedSlot::Ethereum);
        let result = connect(&mut connector, &gone, &notices, WalletKind::MetaMask);

        assert_eq!(result, Err(ConnectError::ProviderNotFound(WalletKind::MetaMask)));
        assert_eq!(connector.state().account(), Some(FIRST));
        assert_eq!(notices.shown().len(), 1);
    }

    #[test]
    fn test_second_begin_while_pending_is_rejected() {
        let mut connector = WalletConnector::new();

        connector.begin(WalletKind::MetaMask).unwrap();
        assert!(connector.is_pending());

        assert_eq!(connector.begin(WalletKind::TrustWallet), Err(ConnectError::AttemptInFlight));
        assert_eq!(connector.attempt(), &AttemptState::Pending(WalletKind::MetaMask));

        assert!(connector.settle(Ok(FIRST.to_string())));
        assert_eq!(connector.state().kind(), Some(WalletKind::MetaMask));
        assert!(connector.begin(WalletKind::TrustWallet).is_ok());
    }

    #[test]
    fn test_connect_while_pending_does_not_notify() {
        let source = StubProviders::default().with(InjectedSlot::Ethereum, StubProvider::accounts(&[FIRST]));
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();
        connector.begin(WalletKind::TokenPocket).unwrap();

        let result = connect(&mut connector, &source, &notices, WalletKind::MetaMask);

        assert_eq!(result, Err(ConnectError::AttemptInFlight));
        assert!(notices.shown().is_empty());
        assert_eq!(connector.attempt(), &AttemptState::Pending(WalletKind::TokenPocket));
    }

    #[test]
    fn test_settle_without_pending_attempt_is_ignored() {
        let notices = RecordingNotices::default();
        let mut connector = WalletConnector::new();

        let outcome = connector.finish(Err(ConnectError::ProviderNotFound(WalletKind::MetaMask)), &notices, Locale::English);

        assert!(outcome.is_err());
        assert_eq!(connector.attempt(), &AttemptState::Idle);
        assert!(notices.shown().is_empty());
    }

    #[test]
    fn test_korean_notice() {
        let mut connector = WalletConnector::new();
        let notices = RecordingNotices::default();

        let _ = block_on(connector.connect(
            &StubProviders::default(),
            &notices,
            ResolutionPolicy::Explicit,
            Locale::Korean,
            WalletKind::TrustWallet,
        ));

        assert_eq!(notices.shown(), vec!["Trust Wallet이 설치되어 있지 않습니다.".to_string()]);
    }
}
