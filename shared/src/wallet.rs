//! # Wallet session state machine
//!
//! A session is either [`WalletSession::Disconnected`] or
//! [`WalletSession::Connected`] with the active account address. The
//! transitions live in free functions ([`initialize`], [`connect`],
//! [`disconnect`]) that talk to the injected browser wallet through the
//! [`EthereumProvider`] trait, so the logic runs the same against the real
//! provider and against mocks in native tests.
//!
//! Failure policy: a failed or empty account request leaves the session
//! disconnected, and a failed permission re-prompt during disconnect still
//! clears the local session. The provider is the source of truth for
//! accounts, the page is the source of truth for the session.

use std::future::Future;

use crate::error::Result;

/// Minimal surface of an EIP-1193 style injected wallet.
///
/// The returned futures are deliberately not `Send`: the real
/// implementation wraps browser promises, which never leave the main
/// thread.
pub trait EthereumProvider {
    /// Whether a provider object is injected into the page at all.
    fn is_available(&self) -> bool;

    /// Prompt the user for account access and return the exposed accounts.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<String>>>;

    /// Re-prompt for account permissions, used when revoking a connection.
    fn request_permissions(&self) -> impl Future<Output = Result<()>>;
}

/// Connection state of the page's wallet session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WalletSession {
    /// No account is attached to the page.
    #[default]
    Disconnected,
    /// An account granted access; `address` is the provider's first account.
    Connected { address: String },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    /// The connected address, if any.
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { address } => Some(address),
            WalletSession::Disconnected => None,
        }
    }
}

/// Establish the initial session when the page loads.
///
/// Without an injected provider this is a silent no-op; with one, the
/// user is prompted immediately, matching the connect button.
pub async fn initialize<P: EthereumProvider>(provider: &P) -> WalletSession {
    if !provider.is_available() {
        log::debug!("no wallet provider injected; staying disconnected");
        return WalletSession::Disconnected;
    }
    connect(provider).await
}

/// Ask the provider for account access and build the resulting session.
///
/// The first account in the provider's response becomes the session
/// address. Any failure, including an empty account list, leaves the
/// session disconnected.
pub async fn connect<P: EthereumProvider>(provider: &P) -> WalletSession {
    match provider.request_accounts().await {
        Ok(accounts) => match accounts.into_iter().next() {
            Some(address) => {
                log::info!("wallet connected: {}", address);
                WalletSession::Connected { address }
            }
            None => {
                log::error!("wallet connect failed: provider returned no accounts");
                WalletSession::Disconnected
            }
        },
        Err(err) => {
            log::error!("wallet connect failed: {}", err);
            WalletSession::Disconnected
        }
    }
}

/// Drop the local session and ask the provider to re-prompt for
/// permissions so the next connect shows the account picker again.
///
/// The local session clears even if the permission request fails; the
/// provider keeps its own grant state and there is nothing further to
/// roll back on our side.
pub async fn disconnect<P: EthereumProvider>(provider: &P) -> WalletSession {
    if let Err(err) = provider.request_permissions().await {
        log::warn!("wallet permission re-prompt failed: {}", err);
    }
    log::info!("wallet disconnected");
    WalletSession::Disconnected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::cell::Cell;
    use std::sync::{Mutex, Once};

    const ADDRESS: &str = "0xAbCdEf1234567890abcdef1234567890ABCDEF12";

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    /// Collects every log line so tests can assert on diagnostics.
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            let mut lines = CAPTURED.lock().unwrap();
            lines.push(format!("{}", record.args()));
        }

        fn flush(&self) {}
    }

    fn init_capture_logger() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Debug);
        });
    }

    /// Tests run in parallel and share the capture buffer, so every
    /// assertion uses a needle unique to its own mock messages.
    fn log_contains(needle: &str) -> bool {
        let lines = CAPTURED.lock().unwrap();
        lines.iter().any(|line| line.contains(needle))
    }

    struct MockProvider {
        available: bool,
        accounts: Result<Vec<String>>,
        permissions: Result<()>,
        account_calls: Cell<usize>,
        permission_calls: Cell<usize>,
    }

    impl MockProvider {
        fn with_accounts(accounts: &[&str]) -> Self {
            Self {
                available: true,
                accounts: Ok(accounts.iter().map(|s| s.to_string()).collect()),
                permissions: Ok(()),
                account_calls: Cell::new(0),
                permission_calls: Cell::new(0),
            }
        }

        fn failing(err: AppError) -> Self {
            Self {
                available: true,
                accounts: Err(err.clone()),
                permissions: Err(err),
                account_calls: Cell::new(0),
                permission_calls: Cell::new(0),
            }
        }

        fn absent() -> Self {
            Self {
                available: false,
                accounts: Ok(Vec::new()),
                permissions: Ok(()),
                account_calls: Cell::new(0),
                permission_calls: Cell::new(0),
            }
        }
    }

    impl EthereumProvider for MockProvider {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn request_accounts(&self) -> Result<Vec<String>> {
            self.account_calls.set(self.account_calls.get() + 1);
            self.accounts.clone()
        }

        async fn request_permissions(&self) -> Result<()> {
            self.permission_calls.set(self.permission_calls.get() + 1);
            self.permissions.clone()
        }
    }

    #[test]
    fn test_session_accessors() {
        let disconnected = WalletSession::default();
        assert!(!disconnected.is_connected());
        assert_eq!(disconnected.address(), None);

        let connected = WalletSession::Connected {
            address: ADDRESS.to_string(),
        };
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some(ADDRESS));
    }

    #[tokio::test]
    async fn test_initialize_without_provider_stays_disconnected() {
        init_capture_logger();
        let provider = MockProvider::absent();

        let session = initialize(&provider).await;

        assert_eq!(session, WalletSession::Disconnected);
        assert_eq!(provider.account_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_initialize_with_provider_connects_immediately() {
        init_capture_logger();
        let provider = MockProvider::with_accounts(&[ADDRESS]);

        let session = initialize(&provider).await;

        assert_eq!(
            session,
            WalletSession::Connected {
                address: ADDRESS.to_string()
            }
        );
        assert_eq!(provider.account_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_connect_stores_first_account_verbatim() {
        init_capture_logger();
        let provider = MockProvider::with_accounts(&[ADDRESS, "0x9999"]);

        let session = connect(&provider).await;

        assert_eq!(session.address(), Some(ADDRESS));
    }

    #[tokio::test]
    async fn test_connect_failure_logs_and_stays_disconnected() {
        init_capture_logger();
        let provider =
            MockProvider::failing(AppError::WalletRequest("mock-connect-denied".to_string()));

        let session = connect(&provider).await;

        assert_eq!(session, WalletSession::Disconnected);
        assert!(log_contains("mock-connect-denied"));
    }

    #[tokio::test]
    async fn test_connect_with_empty_account_list_stays_disconnected() {
        init_capture_logger();
        let provider = MockProvider::with_accounts(&[]);

        let session = connect(&provider).await;

        assert_eq!(session, WalletSession::Disconnected);
        assert!(log_contains("no accounts"));
    }

    #[tokio::test]
    async fn test_disconnect_clears_session() {
        init_capture_logger();
        let provider = MockProvider::with_accounts(&[ADDRESS]);

        let session = disconnect(&provider).await;

        assert_eq!(session, WalletSession::Disconnected);
        assert_eq!(provider.permission_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_clears_session_even_when_permission_request_fails() {
        init_capture_logger();
        let provider =
            MockProvider::failing(AppError::WalletRequest("mock-revoke-failed".to_string()));

        let session = disconnect(&provider).await;

        assert_eq!(session, WalletSession::Disconnected);
        assert_eq!(provider.permission_calls.get(), 1);
        assert!(log_contains("mock-revoke-failed"));
    }

    #[tokio::test]
    async fn test_connected_address_formats_for_display() {
        init_capture_logger();
        let provider = MockProvider::with_accounts(&[ADDRESS]);

        let session = connect(&provider).await;
        let display = session
            .address()
            .map(crate::utils::truncate_address)
            .unwrap_or_default();

        assert_eq!(display, "0xAbCd...EF12");
    }
}
