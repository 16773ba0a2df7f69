//! Page modules

pub mod create_nft;

pub use create_nft::CreateNftPage;
