//! Candle domain — day and intraday history requests.

pub mod client;
pub mod wire;

pub use client::Candles;
pub use wire::{
    CandlesResponse, DayCandle, DayCandlesRequest, DayCandlesResponse, DayTimeFrame,
    IntraDayCandle, IntraDayCandlesRequest, IntraDayCandlesResponse, IntraDayTimeFrame, TimeFrame,
};
