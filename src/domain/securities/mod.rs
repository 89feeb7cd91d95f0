//! Securities domain — instrument reference data with a cache-aside store.

pub mod client;
pub mod store;
pub mod wire;

pub use client::Securities;
pub use store::SecurityStore;
pub use wire::{SecuritiesRequest, SecuritiesResponse, Security};
