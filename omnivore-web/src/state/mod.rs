//! Global app state

pub mod wallet;
