//! Browser-injected providers via wasm-bindgen
//!
//! Reads `window.ethereum`, `window.trustwallet` and `window.tp` at lookup time
//! and forwards `request` calls to the extension's promise API.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::error::ProviderError;
use crate::services::wallet::{InjectedSlot, ProviderSource, WalletProvider};

#[wasm_bindgen(inline_js = "
export function injectedProvider(name) {
    const handle = window[name];
    if (handle === undefined || handle === null) {
        return null;
    }
    return handle;
}

export async function requestProvider(handle, method) {
    if (typeof handle.request !== 'function') {
        throw new Error('provider has no request method');
    }
    return await handle.request({ method: method });
}
")]
extern "C" {
    /// `window[name]`, or null when nothing is injected there
    fn injectedProvider(name: &str) -> Option<JsValue>;

    /// `handle.request({ method })`
    #[wasm_bindgen(catch)]
    async fn requestProvider(handle: &JsValue, method: &str) -> Result<JsValue, JsValue>;
}

/// Provider object found under one of the well-known globals
pub struct InjectedProvider {
    slot: InjectedSlot,
    handle: JsValue,
}

impl InjectedProvider {
    fn flag(&self, name: &str) -> bool {
        js_sys::Reflect::get(&self.handle, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }
}

/// Turn a rejected promise value into a [`ProviderError`].
///
/// EIP-1193 errors are objects with a numeric `code` and a `message`; some
/// wallets reject with a bare string instead.
fn decode_rejection(err: JsValue) -> ProviderError {
    if let Some(message) = err.as_string() {
        return ProviderError::Rejected { code: None, message };
    }

    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError::Rejected { code, message }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn is_trust(&self) -> bool {
        self.flag("isTrust")
    }

    fn is_token_pocket(&self) -> bool {
        self.flag("isTokenPocket")
    }

    async fn request(&self, method: &str) -> Result<Vec<String>, ProviderError> {
        log::debug!("window.{}.request({{ method: '{}' }})", self.slot.global_name(), method);

        let response = requestProvider(&self.handle, method).await.map_err(decode_rejection)?;

        serde_wasm_bindgen::from_value::<Vec<String>>(response)
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

/// The real `window`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProviders;

impl ProviderSource for BrowserProviders {
    fn lookup(&self, slot: InjectedSlot) -> Option<Rc<dyn WalletProvider>> {
        injectedProvider(slot.global_name()).map(|handle| {
            Rc::new(InjectedProvider { slot, handle }) as Rc<dyn WalletProvider>
        })
    }
}
