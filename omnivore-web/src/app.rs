//! Omnivore Web App - Leptos Frontend
//!
//! Cross-chain NFT minting interface

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::CreateNftPage;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    // <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/createNFT") view=CreateNftPage/>
                    // <Route path=path!("/profile") view=ProfilePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/createNFT">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Create an NFT"
                    </span>
                </A>
            </div>
        </div>
    }
}
