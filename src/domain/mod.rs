//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — re-exports and slice-level types
//! - `wire.rs` — serde structs matching the API's wire format
//! - `builder.rs` — validating construction of conditional request payloads
//! - `client.rs` — sub-client with the slice's HTTP operations

pub mod candles;
pub mod order;
pub mod portfolio;
pub mod securities;
pub mod stop;
