//! Portfolio domain — read-only account snapshots.

pub mod client;
pub mod wire;

pub use client::Portfolio;
pub use wire::{Currency, Money, PortfolioRequest, PortfolioResponse, Position};
