//! Navigation Bar Component
//!
//! Brand link, page links, and the wallet connect/disconnect control.

use leptos::prelude::*;
use leptos_router::components::A;

use shared::{truncate_address, wallet};

use crate::services::ethereum::BrowserProvider;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    // Probe for an injected wallet as soon as the navbar mounts, so a
    // returning user is prompted without clicking anything.
    leptos::task::spawn_local(async move {
        let session = wallet::initialize(&BrowserProvider).await;
        wallet_ctx.set_session(session);
    });

    let connect = move |_| {
        leptos::task::spawn_local(async move {
            let session = wallet::connect(&BrowserProvider).await;
            wallet_ctx.set_session(session);
        });
    };

    let disconnect = move |_| {
        leptos::task::spawn_local(async move {
            let session = wallet::disconnect(&BrowserProvider).await;
            wallet_ctx.set_session(session);
        });
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Omnivore"</span>
                </A>
                <div style="display: flex; align-items: center; gap: 24px;">
                    <A href="/createNFT" attr:class="nav-link">"Create NFT"</A>
                    <A href="/profile" attr:class="nav-link">"Profile"</A>
                    {move || if wallet_ctx.is_connected() {
                        let address = wallet_ctx.address().unwrap_or_default();
                        let display = truncate_address(&address);
                        view! {
                            <button class="wallet-button" title=address on:click=disconnect>
                                {display}
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="wallet-button" on:click=connect>
                                "Connect Wallet"
                            </button>
                        }.into_any()
                    }}
                </div>
            </div>
        </nav>
    }
}
