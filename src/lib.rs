//! # Finam SDK
//!
//! A typed async client for the Finam Trade REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared wire vocabulary, domain models, errors
//! 2. **HTTP API** — `FinamHttp` with an explicit session lifecycle
//! 3. **High-Level Client** — `FinamClient` with nested sub-clients and a
//!    cache-aside instrument store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finam_sdk::prelude::*;
//!
//! let client = FinamClient::builder(token)
//!     .build()?;
//! client.connect().await?;
//!
//! let portfolio = client.get_portfolio(&PortfolioRequest::new("D12345")).await?;
//! let order = OrderBuilder::new("D12345", "TQBR", "SBER", BuySell::Buy, 1)
//!     .price(dec!(250.65))
//!     .build()?;
//! let placed = client.create_order(&order).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire vocabulary used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types, builders, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with an explicit session lifecycle.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FinamClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub use crate::client::{FinamClient, FinamClientBuilder};
pub use crate::domain::order::OrderBuilder;
pub use crate::domain::stop::StopBuilder;
pub use crate::error::SdkError;

pub mod prelude {
    // Shared wire vocabulary
    pub use crate::shared::{
        ApiResponse, BuySell, FinamDecimal, Market, OrderCondition, OrderConditionType,
        OrderStatus, OrderValidBefore, OrderValidBeforeType, PriceSign, Property, QuantityUnits,
        StopPrice, StopPriceUnits, StopQuantity, StopStatus, WebError,
    };

    // Domain types — candles
    pub use crate::domain::candles::{
        CandlesResponse, DayCandle, DayCandlesRequest, DayCandlesResponse, DayTimeFrame,
        IntraDayCandle, IntraDayCandlesRequest, IntraDayCandlesResponse, IntraDayTimeFrame,
        TimeFrame,
    };

    // Domain types — securities
    pub use crate::domain::securities::{
        SecuritiesRequest, SecuritiesResponse, Security, SecurityStore,
    };

    // Domain types — portfolio
    pub use crate::domain::portfolio::{
        Currency, Money, PortfolioRequest, PortfolioResponse, Position,
    };

    // Domain types — orders
    pub use crate::domain::order::{
        CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, GetOrdersRequest,
        NewOrderResponse, Order, OrderBuilder, OrdersResponse,
    };

    // Domain types — stops
    pub use crate::domain::stop::{
        CancelStopRequest, CancelStopResponse, CreateStopRequest, GetStopsRequest, NewStopResponse,
        Stop, StopBuilder, StopLoss, StopsResponse, TakeProfit,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP session + high-level client
    pub use crate::client::{
        CandlesClient, FinamClient, FinamClientBuilder, OrdersClient, PortfolioClient,
        SecuritiesClient, StopsClient,
    };
    pub use crate::http::{FinamHttp, SessionStatus};
}
