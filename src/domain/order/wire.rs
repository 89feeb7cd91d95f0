//! Wire types for the orders endpoint.
//!
//! List and cancel requests travel on the query channel (PascalCase aliases,
//! string booleans); creation posts a JSON body (camelCase aliases, native
//! booleans).

use crate::shared::{
    serde_util, ApiResponse, BuySell, Market, OrderCondition, OrderStatus, OrderValidBefore,
    Property,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Query-channel request for the order list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GetOrdersRequest {
    #[serde(rename = "ClientId")]
    pub client_id: String,
    #[serde(rename = "IncludeMatched", with = "serde_util::bool_str")]
    pub include_matched: bool,
    #[serde(rename = "IncludeCanceled", with = "serde_util::bool_str")]
    pub include_canceled: bool,
    #[serde(rename = "IncludeActive", with = "serde_util::bool_str")]
    pub include_active: bool,
}

impl GetOrdersRequest {
    /// All statuses included.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            include_matched: true,
            include_canceled: true,
            include_active: true,
        }
    }
}

/// Query-channel request cancelling one order by its transaction id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    #[serde(rename = "ClientId")]
    pub client_id: String,
    #[serde(rename = "TransactionId")]
    pub transaction_id: i64,
}

/// JSON-body request creating an order. Built by [`super::OrderBuilder`];
/// an absent `price` makes it a market order, a present `condition` a
/// conditional one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "buySell")]
    pub buy_sell: BuySell,
    /// Order volume, in lots.
    pub quantity: i64,
    #[serde(rename = "useCredit")]
    pub use_credit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub property: Property,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<OrderCondition>,
    #[serde(rename = "validBefore", default, skip_serializing_if = "Option::is_none")]
    pub valid_before: Option<OrderValidBefore>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// An order as reported by the API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Order {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "buySell")]
    pub buy_sell: BuySell,
    pub status: OrderStatus,
    /// Exchange-assigned id; zero until the exchange accepts the order.
    #[serde(rename = "orderNo", default)]
    pub order_no: i64,
    /// Broker-side correlation id; used to cancel the order.
    #[serde(rename = "transactionId")]
    pub transaction_id: i64,
    pub market: Market,
    /// Zero for market orders.
    #[serde(default)]
    pub price: Option<Decimal>,
    pub quantity: i64,
    /// Unfilled remainder, in lots; zero once fully matched.
    pub balance: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub condition: Option<OrderCondition>,
    #[serde(rename = "validBefore", default)]
    pub valid_before: Option<OrderValidBefore>,
    #[serde(rename = "createdAt", default, with = "serde_util::utc_second_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "acceptedAt", default, with = "serde_util::utc_second_opt")]
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct OrdersData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewOrderData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(rename = "transactionId")]
    pub transaction_id: i64,
    #[serde(rename = "securityCode", default)]
    pub security_code: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CancelOrderData {
    #[serde(rename = "clientId", default)]
    pub client_id: Option<String>,
    #[serde(rename = "transactionId")]
    pub transaction_id: i64,
}

pub type OrdersResponse = ApiResponse<OrdersData>;
pub type NewOrderResponse = ApiResponse<NewOrderData>;
pub type CancelOrderResponse = ApiResponse<CancelOrderData>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::OrderConditionType;
    use std::str::FromStr;

    #[test]
    fn get_orders_query_uses_string_booleans() {
        let mut req = GetOrdersRequest::new("D12345");
        req.include_canceled = false;
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ClientId"], "D12345");
        assert_eq!(json["IncludeMatched"], "true");
        assert_eq!(json["IncludeCanceled"], "false");
    }

    #[test]
    fn create_order_body_uses_native_booleans() {
        let req = CreateOrderRequest {
            client_id: "D12345".into(),
            security_board: "TQBR".into(),
            security_code: "SBER".into(),
            buy_sell: BuySell::Buy,
            quantity: 2,
            use_credit: false,
            price: Some(Decimal::from_str("250.65").unwrap()),
            property: Property::PutInQueue,
            condition: None,
            valid_before: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["useCredit"], serde_json::Value::Bool(false));
        assert_eq!(json["buySell"], "Buy");
        // Absent optionals are omitted, not sent as null.
        assert!(json.get("condition").is_none());
        assert!(json.get("validBefore").is_none());
    }

    #[test]
    fn create_order_roundtrip_preserves_identity() {
        let req = CreateOrderRequest {
            client_id: "D12345".into(),
            security_board: "TQBR".into(),
            security_code: "SBER".into(),
            buy_sell: BuySell::Sell,
            quantity: 5,
            use_credit: true,
            price: None,
            property: Property::ImmOrCancel,
            condition: Some(OrderCondition {
                kind: OrderConditionType::LastUp,
                price: Decimal::from_str("251").unwrap(),
                time: None,
            }),
            valid_before: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: CreateOrderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn new_order_envelope_decodes_without_error_field() {
        // NewOrderData has no Default impl; the envelope must not need one.
        let raw = r#"{"data": {"clientId": "D12345", "transactionId": 42, "securityCode": "SBER"}}"#;
        let resp: NewOrderResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.data.unwrap().transaction_id, 42);

        let raw = r#"{"error": {"code": "FORBIDDEN", "message": "no access", "data": null}}"#;
        let resp: CancelOrderResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.is_ok());
        assert!(resp.data.is_none());
    }

    #[test]
    fn order_decodes_from_response_aliases() {
        let raw = r#"{
            "clientId": "D12345", "securityBoard": "TQBR", "securityCode": "SBER",
            "buySell": "Buy", "status": "Active", "orderNo": 1000001,
            "transactionId": 42, "market": "Stock", "price": "250.65",
            "quantity": 2, "balance": 2, "createdAt": "2024-03-15T10:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.status, OrderStatus::Active);
        assert_eq!(order.transaction_id, 42);
        assert_eq!(order.price.unwrap().to_string(), "250.65");
        assert!(order.accepted_at.is_none());
    }
}
