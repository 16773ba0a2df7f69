//! # Application error type
//!
//! Single error enum shared by the wallet session logic and the
//! browser frontend. Variants carry the provider's message as a plain
//! string so they stay `Clone` and comparable in tests.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// No injected wallet extension was found on the page.
    #[error("no wallet provider detected in this browser")]
    ProviderUnavailable,

    /// The provider rejected or failed a wallet RPC request.
    #[error("wallet request failed: {0}")]
    WalletRequest(String),

    /// Reading a local image file for the preview failed.
    #[error("image read failed: {0}")]
    ImageRead(String),
}
