//! Create NFT Page - draft form for the cross-chain mint flow
//!
//! Everything the user enters lands in an [`NftDraft`] signal. Submit is
//! wired but intentionally inert until the minting backend exists.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};

use shared::{Chain, NftDraft};

use crate::services::images;

#[component]
pub fn CreateNftPage() -> impl IntoView {
    let draft = RwSignal::new(NftDraft::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // TODO: hand the draft to the minting flow once the contract side exists.
        log::debug!("mint submit ignored; minting flow not wired yet");
    };

    let on_image_change = move |ev: web_sys::Event| {
        let file = match picked_file(&ev) {
            Some(file) => file,
            None => return,
        };

        leptos::task::spawn_local(async move {
            match images::read_as_data_url(file).await {
                Ok(data_url) => draft.update(|draft| draft.image = Some(data_url)),
                Err(err) => log::error!("{}", err),
            }
        });
    };

    view! {
        <div class="page-center">
            <div class="card form-panel">
                <h1 style="font-size: 32px; margin-bottom: 12px; font-weight: 700;">"Create NFT"</h1>
                <p class="subtitle">"Mint an NFT and bridge it to another chain"</p>

                <form class="nft-form" on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label">"Name"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="NFT name"
                            prop:value=move || draft.with(|draft| draft.name.clone())
                            on:input=move |ev| {
                                if let Some(value) = input_value(&ev) {
                                    draft.update(|draft| draft.name = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Description"</label>
                        <textarea
                            class="form-input"
                            placeholder="Describe your NFT"
                            rows="3"
                            prop:value=move || draft.with(|draft| draft.description.clone())
                            on:input=move |ev| {
                                if let Some(value) = textarea_value(&ev) {
                                    draft.update(|draft| draft.description = value);
                                }
                            }
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Price"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Price in native tokens"
                            prop:value=move || draft.with(|draft| draft.price.clone())
                            on:input=move |ev| {
                                if let Some(value) = input_value(&ev) {
                                    draft.update(|draft| draft.price = value);
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Image"</label>
                        <input
                            type="file"
                            class="form-input"
                            accept="image/*"
                            on:change=on_image_change
                        />
                        {move || draft.with(|draft| draft.image.clone()).map(|data_url| view! {
                            <img class="image-preview" src=data_url alt="NFT preview"/>
                        })}
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Source Chain"</label>
                        <select
                            class="form-input"
                            on:change=move |ev| {
                                let chain = select_value(&ev).as_deref().and_then(Chain::from_id);
                                draft.update(|draft| draft.source_chain = chain);
                            }
                        >
                            <option value="">"Current Chain"</option>
                            {Chain::ALL
                                .iter()
                                .map(|chain| view! { <option value=chain.id()>{chain.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Destination Chain"</label>
                        <select
                            class="form-input"
                            on:change=move |ev| {
                                let chain = select_value(&ev).as_deref().and_then(Chain::from_id);
                                draft.update(|draft| draft.destination_chain = chain);
                            }
                        >
                            <option value="">"Target Chain"</option>
                            {Chain::ALL
                                .iter()
                                .map(|chain| view! { <option value=chain.id()>{chain.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <button type="submit" class="btn">"Create NFT"</button>
                </form>
            </div>
        </div>
    }
}

/// First file picked in a file input's change event.
fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

fn textarea_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
}

fn select_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}
