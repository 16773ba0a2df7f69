//! Browser interop services

pub mod ethereum;
pub mod images;
