//! Injected Ethereum Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider that wallet extensions
//! (MetaMask and friends) inject as `window.ethereum`. The
//! [`BrowserProvider`] type adapts these bindings to the
//! [`shared::EthereumProvider`] trait the session logic runs against.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use shared::{AppError, EthereumProvider, Result};

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function requestAccounts() {
    return await window.ethereum.request({ method: 'eth_requestAccounts' });
}

export async function requestPermissions() {
    return await window.ethereum.request({
        method: 'wallet_requestPermissions',
        params: [{ eth_accounts: {} }]
    });
}
")]
extern "C" {
    /// Check if an EIP-1193 provider is injected into the page
    #[wasm_bindgen(js_name = hasEthereumProvider)]
    fn has_ethereum_provider() -> bool;

    /// Prompt for account access; resolves to an array of address strings
    #[wasm_bindgen(js_name = requestAccounts, catch)]
    async fn request_accounts_js() -> std::result::Result<JsValue, JsValue>;

    /// Re-prompt for the `eth_accounts` permission
    #[wasm_bindgen(js_name = requestPermissions, catch)]
    async fn request_permissions_js() -> std::result::Result<JsValue, JsValue>;
}

/// The wallet extension installed in this browser, if any.
pub struct BrowserProvider;

impl EthereumProvider for BrowserProvider {
    fn is_available(&self) -> bool {
        has_ethereum_provider()
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        if !has_ethereum_provider() {
            return Err(AppError::ProviderUnavailable);
        }

        let accounts = request_accounts_js()
            .await
            .map_err(|err| AppError::WalletRequest(js_error_message(&err)))?;

        serde_wasm_bindgen::from_value(accounts).map_err(|err| {
            AppError::WalletRequest(format!("unexpected accounts payload: {}", err))
        })
    }

    async fn request_permissions(&self) -> Result<()> {
        if !has_ethereum_provider() {
            return Err(AppError::ProviderUnavailable);
        }

        request_permissions_js()
            .await
            .map(|_| ())
            .map_err(|err| AppError::WalletRequest(js_error_message(&err)))
    }
}

/// Pull a readable message out of a thrown JS value.
///
/// Provider rejections are `Error` objects, but a raw string or an
/// arbitrary object can come through too.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    match value.as_string() {
        Some(message) => message,
        None => format!("{:?}", value),
    }
}
