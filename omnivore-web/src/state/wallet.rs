//! Wallet state management

use leptos::prelude::*;
use shared::WalletSession;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<WalletSession>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(WalletSession::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|session| session.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.session
            .with(|session| session.address().map(|s| s.to_string()))
    }

    pub fn set_session(&self, session: WalletSession) {
        self.session.set(session);
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
