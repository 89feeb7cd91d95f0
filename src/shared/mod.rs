//! Shared wire vocabulary used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize with
//! the exact spellings the trade API uses on the wire, so they can be embedded
//! directly in request and response structs without conversion overhead.

pub mod serde_util;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Response envelope ───────────────────────────────────────────────────────

/// Structured error carried in the API response envelope.
///
/// `data` holds field-level validation details for rejected requests and is
/// left as raw JSON since its shape varies per endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct WebError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Response envelope shared by every endpoint.
///
/// Exactly one of `data`/`error` is populated on a structurally valid
/// response. Domain failures (bad client id, unknown instrument) arrive here
/// as a populated `error` and are returned to the caller as values, never
/// raised.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<WebError>,
}

impl<T> ApiResponse<T> {
    /// True when the envelope carries no error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// ─── FinamDecimal ────────────────────────────────────────────────────────────

/// The API's lossless price representation: an integer mantissa plus a
/// base-10 scale exponent. The value is `num × 10^-scale`, so
/// `num = 250655, scale = 3` reads as `250.655`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinamDecimal {
    pub num: i64,
    pub scale: u32,
}

impl FinamDecimal {
    pub fn new(num: i64, scale: u32) -> Self {
        Self { num, scale }
    }

    /// Exact decimal value. The API never sends scales anywhere near the
    /// 28-digit `Decimal` limit; larger scales are clamped rather than
    /// panicking on a malformed payload.
    pub fn value(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.num as i128, self.scale.min(28))
    }
}

impl From<FinamDecimal> for Decimal {
    fn from(d: FinamDecimal) -> Self {
        d.value()
    }
}

impl TryFrom<Decimal> for FinamDecimal {
    type Error = std::num::TryFromIntError;

    /// Fails when the normalized mantissa exceeds the wire format's `i64`.
    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        let normalized = d.normalize();
        Ok(Self {
            num: i64::try_from(normalized.mantissa())?,
            scale: normalized.scale(),
        })
    }
}

impl std::fmt::Display for FinamDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ─── Trade direction ─────────────────────────────────────────────────────────

/// Trade direction.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuySell {
    Buy,
    Sell,
}

impl std::fmt::Display for BuySell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuySell::Buy => write!(f, "Buy"),
            BuySell::Sell => write!(f, "Sell"),
        }
    }
}

// ─── Market ──────────────────────────────────────────────────────────────────

/// Market an instrument trades on.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Market {
    /// Moscow Exchange equities.
    Stock,
    /// Moscow Exchange derivatives.
    Forts,
    /// Saint Petersburg Exchange.
    Spbex,
    /// US equities.
    Mma,
    /// Moscow Exchange FX.
    Ets,
    /// Moscow Exchange bonds.
    Bonds,
    /// Moscow Exchange options.
    Options,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Stock => "Stock",
            Market::Forts => "Forts",
            Market::Spbex => "Spbex",
            Market::Mma => "Mma",
            Market::Ets => "Ets",
            Market::Bonds => "Bonds",
            Market::Options => "Options",
        }
    }
}

impl std::str::FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Stock" => Ok(Market::Stock),
            "Forts" => Ok(Market::Forts),
            "Spbex" => Ok(Market::Spbex),
            "Mma" => Ok(Market::Mma),
            "Ets" => Ok(Market::Ets),
            "Bonds" => Ok(Market::Bonds),
            "Options" => Ok(Market::Options),
            other => Err(format!("unknown market: {other}")),
        }
    }
}

// ─── PriceSign ───────────────────────────────────────────────────────────────

/// Admissible price class of an instrument.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSign {
    /// Price information not set (fresh IPOs, post-outage states).
    Unspecified,
    /// Strictly positive prices (equities, funds).
    Positive,
    /// Zero or positive (suspended instruments, zero-coupon bonds).
    NonNegative,
    /// Any sign (futures, options).
    Any,
}

impl PriceSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSign::Unspecified => "Unspecified",
            PriceSign::Positive => "Positive",
            PriceSign::NonNegative => "NonNegative",
            PriceSign::Any => "Any",
        }
    }
}

impl std::str::FromStr for PriceSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unspecified" => Ok(PriceSign::Unspecified),
            "Positive" => Ok(PriceSign::Positive),
            "NonNegative" => Ok(PriceSign::NonNegative),
            "Any" => Ok(PriceSign::Any),
            other => Err(format!("unknown price sign: {other}")),
        }
    }
}

// ─── Order execution property ────────────────────────────────────────────────

/// Handling of the unfilled remainder of a partially executed order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Property {
    /// Remainder queued on the exchange.
    #[default]
    PutInQueue,
    /// Remainder withdrawn from trading.
    CancelBalance,
    /// Fill completely and immediately or not at all.
    ImmOrCancel,
}

// ─── Order condition ─────────────────────────────────────────────────────────

/// Trigger kind of a conditional order.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderConditionType {
    /// Best bid.
    Bid,
    /// Best bid, or a trade at the given price or higher.
    BidOrLast,
    /// Best ask.
    Ask,
    /// Best ask, or a trade at the given price or lower.
    AskOrLast,
    /// Submit to the exchange at a fixed time; `time` must be set.
    Time,
    /// Margin coverage below the given level.
    CovDown,
    /// Margin coverage above the given level.
    CovUp,
    /// Market trade at the given price or higher.
    LastUp,
    /// Market trade at the given price or lower.
    LastDown,
}

/// Conditional-order trigger attached to a create-order request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OrderCondition {
    #[serde(rename = "type")]
    pub kind: OrderConditionType,
    pub price: Decimal,
    #[serde(
        default,
        with = "serde_util::utc_second_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<DateTime<Utc>>,
}

// ─── Validity window ─────────────────────────────────────────────────────────

/// Expiry policy kind of an order or stop.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderValidBeforeType {
    /// Valid until the end of the trading session.
    #[default]
    TillEndSession,
    /// Valid until explicitly cancelled.
    TillCancelled,
    /// Valid until a fixed time; `time` must be set.
    ExactTime,
}

/// Time-based expiry policy of an order or stop.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OrderValidBefore {
    #[serde(rename = "type")]
    pub kind: OrderValidBeforeType,
    #[serde(
        default,
        with = "serde_util::utc_second_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<DateTime<Utc>>,
}

// ─── Statuses ────────────────────────────────────────────────────────────────

/// Order lifecycle status as reported by the API.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Accepted by the broker server; a transaction id is assigned.
    None,
    /// Accepted by the exchange; an order number is assigned.
    Active,
    /// Fully executed.
    Matched,
    /// Cancelled by the user or the exchange.
    Cancelled,
}

/// Stop-order lifecycle status.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStatus {
    Active,
    Executed,
    Cancelled,
}

// ─── Stop quantities and prices ──────────────────────────────────────────────

/// Unit of a stop-leg quantity.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityUnits {
    Percent,
    #[default]
    Lots,
}

/// Quantity of a stop leg: a value plus its unit.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StopQuantity {
    pub value: Decimal,
    #[serde(default)]
    pub units: QuantityUnits,
}

impl StopQuantity {
    pub fn lots(value: Decimal) -> Self {
        Self {
            value,
            units: QuantityUnits::Lots,
        }
    }

    pub fn percent(value: Decimal) -> Self {
        Self {
            value,
            units: QuantityUnits::Percent,
        }
    }
}

/// Unit of a stop-leg price refinement.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPriceUnits {
    Percent,
    #[default]
    Pips,
}

/// Price refinement of a take-profit leg: a value plus its unit.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StopPrice {
    pub value: Decimal,
    #[serde(default)]
    pub units: StopPriceUnits,
}

impl StopPrice {
    pub fn pips(value: Decimal) -> Self {
        Self {
            value,
            units: StopPriceUnits::Pips,
        }
    }

    pub fn percent(value: Decimal) -> Self {
        Self {
            value,
            units: StopPriceUnits::Percent,
        }
    }
}
