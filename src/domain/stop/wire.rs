//! Wire types for the stops endpoint.
//!
//! List and cancel requests travel on the query channel (PascalCase aliases,
//! string booleans); creation posts a JSON body (camelCase aliases, native
//! booleans). The stop-loss and take-profit leg shapes are identical in both
//! directions, so one pair of types covers requests and responses.

use crate::shared::{
    serde_util, ApiResponse, BuySell, Market, OrderValidBefore, StopPrice, StopQuantity,
    StopStatus,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Legs ────────────────────────────────────────────────────────────────────

/// Stop-loss leg. A zero `price` together with `market_price = true` executes
/// at market once the activation price is crossed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopLoss {
    #[serde(rename = "activationPrice")]
    pub activation_price: Decimal,
    pub price: Decimal,
    #[serde(rename = "marketPrice", default)]
    pub market_price: bool,
    pub quantity: StopQuantity,
    /// Guard time in seconds the condition must hold before triggering.
    #[serde(default)]
    pub time: i64,
    #[serde(rename = "useCredit", default)]
    pub use_credit: bool,
}

impl StopLoss {
    /// Market-execution stop-loss.
    pub fn market(activation_price: Decimal, quantity: StopQuantity) -> Self {
        Self {
            activation_price,
            price: Decimal::ZERO,
            market_price: true,
            quantity,
            time: 0,
            use_credit: true,
        }
    }

    /// Limit-execution stop-loss at `price`.
    pub fn limit(activation_price: Decimal, price: Decimal, quantity: StopQuantity) -> Self {
        Self {
            activation_price,
            price,
            market_price: false,
            quantity,
            time: 0,
            use_credit: true,
        }
    }
}

/// Take-profit leg with optional trailing correction and protective spread.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TakeProfit {
    #[serde(rename = "activationPrice")]
    pub activation_price: Decimal,
    #[serde(rename = "correctionPrice", default, skip_serializing_if = "Option::is_none")]
    pub correction_price: Option<StopPrice>,
    #[serde(rename = "spreadPrice", default, skip_serializing_if = "Option::is_none")]
    pub spread_price: Option<StopPrice>,
    #[serde(rename = "marketPrice", default)]
    pub market_price: bool,
    pub quantity: StopQuantity,
    /// Guard time in seconds the condition must hold before triggering.
    #[serde(default)]
    pub time: i64,
    #[serde(rename = "useCredit", default)]
    pub use_credit: bool,
}

impl TakeProfit {
    /// Market-execution take-profit.
    pub fn market(activation_price: Decimal, quantity: StopQuantity) -> Self {
        Self {
            activation_price,
            correction_price: None,
            spread_price: None,
            market_price: true,
            quantity,
            time: 0,
            use_credit: true,
        }
    }

    /// Trailing correction offset from the tracked extremum.
    pub fn correction(mut self, correction_price: StopPrice) -> Self {
        self.correction_price = Some(correction_price);
        self
    }

    /// Protective spread around the execution price.
    pub fn spread(mut self, spread_price: StopPrice) -> Self {
        self.spread_price = Some(spread_price);
        self
    }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Query-channel request for the stop list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetStopsRequest {
    #[serde(rename = "ClientId")]
    pub client_id: String,
    #[serde(rename = "IncludeExecuted", with = "serde_util::bool_str")]
    pub include_executed: bool,
    #[serde(rename = "IncludeCanceled", with = "serde_util::bool_str")]
    pub include_canceled: bool,
    #[serde(rename = "IncludeActive", with = "serde_util::bool_str")]
    pub include_active: bool,
}

impl GetStopsRequest {
    /// All statuses included.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            include_executed: true,
            include_canceled: true,
            include_active: true,
        }
    }
}

/// Query-channel request cancelling one stop by its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CancelStopRequest {
    #[serde(rename = "ClientId")]
    pub client_id: String,
    #[serde(rename = "StopId")]
    pub stop_id: i64,
}

/// JSON-body request creating a stop. Built by [`super::StopBuilder`]; both
/// legs are optional and the API accepts a stop with neither.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateStopRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "buySell")]
    pub buy_sell: BuySell,
    #[serde(rename = "stopLoss", default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<StopLoss>,
    #[serde(rename = "takeProfit", default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<TakeProfit>,
    /// Expiry of the linked FORTS order.
    #[serde(
        rename = "expirationDate",
        default,
        with = "serde_util::utc_second_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Exchange number of the linked active order.
    #[serde(rename = "linkOrder")]
    pub link_order: i64,
    #[serde(rename = "validBefore", default, skip_serializing_if = "Option::is_none")]
    pub valid_before: Option<OrderValidBefore>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// A stop as reported by the API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Stop {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "buySell")]
    pub buy_sell: BuySell,
    pub status: StopStatus,
    #[serde(rename = "stopId")]
    pub stop_id: i64,
    pub market: Market,
    /// Exchange number of the order produced by execution; zero until then.
    #[serde(rename = "orderNo", default)]
    pub order_no: i64,
    /// Trade that executed the stop; zero until executed.
    #[serde(rename = "tradeNo", default)]
    pub trade_no: i64,
    #[serde(rename = "linkOrder", default)]
    pub link_order: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Tracked local extremum for the take-profit leg.
    #[serde(rename = "takeProfitExtremum", default)]
    pub take_profit_extremum: Decimal,
    /// Current correction level for the take-profit leg.
    #[serde(rename = "takeProfitLevel", default)]
    pub take_profit_level: Decimal,
    #[serde(rename = "stopLoss", default)]
    pub stop_loss: Option<StopLoss>,
    #[serde(rename = "takeProfit", default)]
    pub take_profit: Option<TakeProfit>,
    #[serde(rename = "validBefore", default)]
    pub valid_before: Option<OrderValidBefore>,
    #[serde(rename = "expirationDate", default, with = "serde_util::utc_second_opt")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(rename = "acceptedAt", default, with = "serde_util::utc_second_opt")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(rename = "canceledAt", default, with = "serde_util::utc_second_opt")]
    pub canceled_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct StopsData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewStopData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(rename = "stopId")]
    pub stop_id: i64,
    #[serde(rename = "securityCode", default)]
    pub security_code: Option<String>,
    #[serde(rename = "securityBoard", default)]
    pub security_board: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CancelStopData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(rename = "stopId")]
    pub stop_id: i64,
}

pub type StopsResponse = ApiResponse<StopsData>;
pub type NewStopResponse = ApiResponse<NewStopData>;
pub type CancelStopResponse = ApiResponse<CancelStopData>;
