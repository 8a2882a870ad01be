//! # Error Types
//!
//! Error enums for the wallet connector and the configuration loader, built with
//! `thiserror` like the rest of the workspace.
//!
//! ## Error Categories
//!
//! - [`ProviderError`]: raised by an injected provider's `request` call
//! - [`ConnectError`]: what a connection attempt settles with
//! - [`ConfigError`]: a configuration layer that could not be applied
//!
//! Connector errors never escape the wallet widget: they are logged, turned into a
//! user notice and recorded as the settled outcome of the attempt.

use thiserror::Error;

use crate::services::wallet::WalletKind;

/// EIP-1193 code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Failure reported by an injected provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The promise returned by `request` rejected
    #[error("{message}")]
    Rejected { code: Option<i64>, message: String },

    /// The promise resolved, but not to an array of strings
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, ProviderError::Rejected { code: Some(USER_REJECTED_CODE), .. })
    }
}

/// Outcome of a failed connection attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No injected handle matched the requested (or probed) wallet kind
    #[error("{0} is not installed")]
    ProviderNotFound(WalletKind),

    /// The provider was found but the account request failed. `cancelled` is set
    /// when the user dismissed the wallet prompt (EIP-1193 code 4001).
    #[error("{kind} connection failed: {reason}")]
    RequestRejected { kind: WalletKind, reason: String, cancelled: bool },

    /// Another attempt is still waiting on its provider
    #[error("a wallet connection request is already in progress")]
    AttemptInFlight,
}

impl ConnectError {
    pub fn rejected(kind: WalletKind, err: &ProviderError) -> Self {
        ConnectError::RequestRejected {
            kind,
            reason: err.to_string(),
            cancelled: err.is_user_rejection(),
        }
    }
}

/// A configuration layer that could not be applied
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown resolution policy '{0}' (expected 'explicit' or 'best-effort')")]
    InvalidPolicy(String),

    #[error("unknown locale '{0}' (expected 'en' or 'ko')")]
    InvalidLocale(String),

    #[error("invalid embedded config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_detection() {
        let rejected = ProviderError::Rejected {
            code: Some(USER_REJECTED_CODE),
            message: "User rejected the request.".to_string(),
        };
        assert!(rejected.is_user_rejection());

        let internal = ProviderError::Rejected { code: Some(-32603), message: "Internal error".to_string() };
        assert!(!internal.is_user_rejection());
        assert!(!ProviderError::Malformed("null".to_string()).is_user_rejection());
    }

    #[test]
    fn test_connect_error_messages() {
        assert_eq!(
            ConnectError::ProviderNotFound(WalletKind::TrustWallet).to_string(),
            "Trust Wallet is not installed"
        );

        let err = ConnectError::rejected(
            WalletKind::MetaMask,
            &ProviderError::Rejected { code: Some(4001), message: "User rejected the request.".to_string() },
        );
        assert_eq!(err.to_string(), "MetaMask connection failed: User rejected the request.");
        assert!(matches!(err, ConnectError::RequestRejected { cancelled: true, .. }));

        let malformed = ConnectError::rejected(WalletKind::MetaMask, &ProviderError::Malformed("null".to_string()));
        assert!(matches!(malformed, ConnectError::RequestRejected { cancelled: false, .. }));
    }
}
