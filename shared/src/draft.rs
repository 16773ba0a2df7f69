//! # NFT draft model
//!
//! The form state for the minting page. Everything stays as the user
//! typed it; validation and submission belong to the minting flow.

use serde::{Deserialize, Serialize};

/// Chains the minting form can bridge between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Bsc,
    Polygon,
}

impl Chain {
    /// Every selectable chain, in the order the form lists them.
    pub const ALL: [Chain; 3] = [Chain::Ethereum, Chain::Bsc, Chain::Polygon];

    /// Stable identifier used as the `<option>` value.
    pub fn id(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Bsc => "bsc",
            Chain::Polygon => "polygon",
        }
    }

    /// Human-readable name shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Bsc => "Binance Smart Chain",
            Chain::Polygon => "Polygon",
        }
    }

    /// Parse an `<option>` value back into a chain.
    pub fn from_id(id: &str) -> Option<Chain> {
        match id {
            "ethereum" => Some(Chain::Ethereum),
            "bsc" => Some(Chain::Bsc),
            "polygon" => Some(Chain::Polygon),
            _ => None,
        }
    }
}

/// An NFT being drafted in the form, before any mint is attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftDraft {
    pub name: String,
    pub description: String,
    /// Free text; parsing is the submit flow's problem once it exists.
    pub price: String,
    /// Data URL of the selected image, used directly as the preview source.
    pub image: Option<String>,
    pub source_chain: Option<Chain>,
    pub destination_chain: Option<Chain>,
}

impl NftDraft {
    pub fn new() -> Self {
        Self::default()
    }
}
