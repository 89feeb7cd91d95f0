//! Wire types for the portfolio endpoint.
//!
//! The request travels on the query channel: its booleans serialize as the
//! literal strings `"true"`/`"false"` under the API's dotted `Content.*`
//! aliases.

use crate::shared::{serde_util, ApiResponse, Market};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio snapshot request. The `include_*` toggles select which sections
/// the API computes; everything defaults to on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortfolioRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "Content.IncludeCurrencies", with = "serde_util::bool_str")]
    pub include_currencies: bool,
    #[serde(rename = "Content.IncludeMoney", with = "serde_util::bool_str")]
    pub include_money: bool,
    #[serde(rename = "Content.IncludePositions", with = "serde_util::bool_str")]
    pub include_positions: bool,
    #[serde(rename = "Content.IncludeMaxBuySell", with = "serde_util::bool_str")]
    pub include_max_buy_sell: bool,
}

impl PortfolioRequest {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            include_currencies: true,
            include_money: true,
            include_positions: true,
            include_max_buy_sell: true,
        }
    }
}

/// Which sections the snapshot actually carries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(rename = "includeCurrencies")]
    pub include_currencies: bool,
    #[serde(rename = "includeMoney")]
    pub include_money: bool,
    #[serde(rename = "includePositions")]
    pub include_positions: bool,
    #[serde(rename = "includeMaxBuySell")]
    pub include_max_buy_sell: bool,
}

/// Position in a single instrument.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Position {
    #[serde(rename = "securityCode", default)]
    pub security_code: String,
    pub market: Market,
    /// Current position, units.
    pub balance: i64,
    #[serde(rename = "currentPrice")]
    pub current_price: Decimal,
    pub equity: Decimal,
    #[serde(rename = "averagePrice")]
    pub average_price: Decimal,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "accumulatedProfit")]
    pub accumulated_profit: Decimal,
    #[serde(rename = "todayProfit")]
    pub today_profit: Decimal,
    #[serde(rename = "unrealizedProfit")]
    pub unrealized_profit: Decimal,
    pub profit: Decimal,
    /// Zero unless `include_max_buy_sell` was requested.
    #[serde(rename = "maxBuy")]
    pub max_buy: i64,
    #[serde(rename = "maxSell")]
    pub max_sell: i64,
    #[serde(rename = "priceCurrency", default)]
    pub price_currency: String,
    #[serde(rename = "averagePriceCurrency", default)]
    pub average_price_currency: String,
    #[serde(rename = "averageRate")]
    pub average_rate: Decimal,
}

/// Currency row of the portfolio.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    pub balance: Decimal,
    #[serde(rename = "crossRate")]
    pub cross_rate: Decimal,
    pub equity: Decimal,
    #[serde(rename = "unrealizedProfit")]
    pub unrealized_profit: Decimal,
}

/// Money position on a single market.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Money {
    pub market: Market,
    #[serde(default)]
    pub currency: Option<String>,
    pub balance: Decimal,
}

/// Portfolio snapshot.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioData {
    #[serde(rename = "clientId", default)]
    pub client_id: String,
    pub content: Content,
    /// Current portfolio valuation.
    pub equity: Decimal,
    /// Opening portfolio valuation.
    pub balance: Decimal,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub money: Vec<Money>,
}

pub type PortfolioResponse = ApiResponse<PortfolioData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_booleans_serialize_as_strings_with_dotted_aliases() {
        let mut req = PortfolioRequest::new("D12345");
        req.include_max_buy_sell = false;
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["clientId"], "D12345");
        assert_eq!(json["Content.IncludeCurrencies"], "true");
        assert_eq!(json["Content.IncludeMaxBuySell"], "false");
    }

    #[test]
    fn snapshot_decodes_with_empty_sections() {
        let raw = r#"{
            "data": {
                "clientId": "D12345",
                "content": {
                    "includeCurrencies": false, "includeMoney": false,
                    "includePositions": false, "includeMaxBuySell": false
                },
                "equity": "1500.25",
                "balance": "1400"
            },
            "error": null
        }"#;
        let resp: PortfolioResponse = serde_json::from_str(raw).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.equity.to_string(), "1500.25");
        assert!(data.positions.is_empty());
    }
}
