//! User-facing notices for failed wallet connections

use crate::config::Locale;
use crate::error::ConnectError;
use crate::services::wallet::WalletKind;

/// Where notices are shown
pub trait NoticeSink {
    fn notify(&self, message: &str);
}

/// Blocking `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl NoticeSink for BrowserAlert {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("window.alert failed: {:?}", e);
        }
    }
}

fn not_installed(kind: WalletKind, locale: Locale) -> String {
    match (locale, kind) {
        (Locale::English, WalletKind::Generic) => "No wallet is installed.".to_string(),
        (Locale::English, kind) => format!("{} is not installed.", kind.name()),
        (Locale::Korean, WalletKind::MetaMask) => "MetaMask가 설치되어 있지 않습니다.".to_string(),
        (Locale::Korean, WalletKind::TrustWallet) => "Trust Wallet이 설치되어 있지 않습니다.".to_string(),
        (Locale::Korean, WalletKind::TokenPocket) => "TokenPocket이 설치되어 있지 않습니다.".to_string(),
        (Locale::Korean, WalletKind::Generic) => "지갑이 설치되어 있지 않습니다.".to_string(),
    }
}

/// Text to show for a failed attempt. `AttemptInFlight` is silent.
pub fn notice_text(err: &ConnectError, locale: Locale) -> Option<String> {
    match err {
        ConnectError::ProviderNotFound(kind) => Some(not_installed(*kind, locale)),
        ConnectError::RequestRejected { kind, cancelled: true, .. } => Some(match locale {
            Locale::English => format!("{} connection was cancelled.", kind.name()),
            Locale::Korean => format!("{} 연결이 취소되었습니다.", kind.name()),
        }),
        ConnectError::RequestRejected { kind, reason, .. } => Some(match locale {
            Locale::English => format!("{} connection failed: {}", kind.name(), reason),
            Locale::Korean => format!("{} 연결에 실패했습니다: {}", kind.name(), reason),
        }),
        ConnectError::AttemptInFlight => None,
    }
}
