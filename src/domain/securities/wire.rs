//! Wire types for the securities endpoint.

use crate::shared::{ApiResponse, Market, PriceSign};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Instrument filter. Both fields optional; combined with AND when both
/// given, no filter returns the full instrument list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SecuritiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seccode: Option<String>,
}

impl SecuritiesRequest {
    pub fn new(board: Option<&str>, seccode: Option<&str>) -> Self {
        Self {
            board: board.map(str::to_owned),
            seccode: seccode.map(str::to_owned),
        }
    }
}

/// A tradable instrument, uniquely identified by (code, board).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Security {
    pub code: String,
    pub board: String,
    pub market: Market,
    /// Number of digits in the fractional part of the price.
    pub decimals: i32,
    #[serde(rename = "lotSize")]
    pub lot_size: i64,
    /// Minimum price step, in units of `10^-decimals`.
    #[serde(rename = "minStep")]
    pub min_step: i64,
    pub currency: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub properties: i64,
    #[serde(rename = "timeZoneName")]
    pub time_zone_name: String,
    /// Value of one price point for a single instrument, excluding accrued
    /// interest.
    #[serde(rename = "bpCost")]
    pub bp_cost: Decimal,
    #[serde(rename = "accruedInterest")]
    pub accrued_interest: Decimal,
    #[serde(rename = "priceSign")]
    pub price_sign: PriceSign,
    pub ticker: String,
    #[serde(rename = "lotDivider")]
    pub lot_divider: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SecuritiesData {
    #[serde(default)]
    pub securities: Vec<Security>,
}

pub type SecuritiesResponse = ApiResponse<SecuritiesData>;

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_security_json() -> &'static str {
        r#"{
            "code": "SBER",
            "board": "TQBR",
            "market": "Stock",
            "decimals": 2,
            "lotSize": 10,
            "minStep": 1,
            "currency": "RUB",
            "shortName": "Sberbank",
            "properties": 1634,
            "timeZoneName": "Russian Standard Time",
            "bpCost": "10.5",
            "accruedInterest": "0",
            "priceSign": "Positive",
            "ticker": "SBER",
            "lotDivider": 1
        }"#
    }

    #[test]
    fn security_decodes_camel_case_aliases() {
        let sec: Security = serde_json::from_str(sample_security_json()).unwrap();
        assert_eq!(sec.code, "SBER");
        assert_eq!(sec.lot_size, 10);
        assert_eq!(sec.market, Market::Stock);
        assert_eq!(sec.price_sign, PriceSign::Positive);
        assert_eq!(sec.bp_cost.to_string(), "10.5");
    }

    #[test]
    fn filter_omits_absent_fields() {
        let req = SecuritiesRequest::new(None, Some("SBER"));
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("board").is_none());
        assert_eq!(json["seccode"], "SBER");
    }
}
