//! # Shared application core
//!
//! Browser-agnostic pieces of the Omnivore frontend: the wallet session
//! state machine, the NFT draft model, and display helpers. The web
//! crate layers signals and DOM bindings on top; everything here runs
//! natively so it can be tested without a browser.
//!
//! ## Structure
//!
//! - **[`wallet`]**: wallet session state machine behind the
//!   [`wallet::EthereumProvider`] trait
//! - **[`draft`]**: the [`draft::NftDraft`] form model and [`draft::Chain`] list
//! - **[`utils`]**: address formatting for display
//! - **[`error`]**: the [`error::AppError`] type shared by all of the above
//!
//! ## Usage
//!
//! ```rust
//! use shared::{truncate_address, WalletSession};
//!
//! let session = WalletSession::Connected {
//!     address: "0xAbCdEf1234567890abcdef1234567890ABCDEF12".to_string(),
//! };
//! let display = session.address().map(truncate_address).unwrap_or_default();
//! assert_eq!(display, "0xAbCd...EF12");
//! ```

pub mod draft;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export the types the web crate touches on every page.
pub use draft::{Chain, NftDraft};
pub use error::{AppError, Result};
pub use utils::{format_address, truncate_address};
pub use wallet::{connect, disconnect, initialize, EthereumProvider, WalletSession};
