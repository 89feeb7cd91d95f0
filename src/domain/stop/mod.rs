//! Stop domain — stop-loss and take-profit orders linked to active orders.

pub mod builder;
pub mod client;
pub mod wire;

pub use builder::StopBuilder;
pub use client::Stops;
pub use wire::{
    CancelStopRequest, CancelStopResponse, CreateStopRequest, GetStopsRequest, NewStopResponse,
    Stop, StopLoss, StopsResponse, TakeProfit,
};
