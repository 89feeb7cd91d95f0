//! Wire types for candle requests and responses.
//!
//! Candle requests travel on the query channel; interval bounds use the
//! API's dotted aliases (`Interval.From`, `Interval.To`, `Interval.Count`).
//! Interval constraints are enforced by the request constructors, before any
//! transport: day/week spans at most 365 days, intraday at most 30, and
//! `count` within `1..=500`.

use crate::error::ValidationError;
use crate::shared::{serde_util, ApiResponse, FinamDecimal};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ─── Timeframes ──────────────────────────────────────────────────────────────

/// Any supported timeframe; dispatches to the day or intraday endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    M1,
    M5,
    M15,
    H1,
    D1,
    W1,
}

impl TimeFrame {
    /// True for timeframes served by the day-candles endpoint.
    pub fn is_day(&self) -> bool {
        matches!(self, TimeFrame::D1 | TimeFrame::W1)
    }

    /// Splits into the per-endpoint timeframe vocabularies.
    pub(crate) fn split(self) -> Split {
        match self {
            TimeFrame::D1 => Split::Day(DayTimeFrame::D1),
            TimeFrame::W1 => Split::Day(DayTimeFrame::W1),
            TimeFrame::M1 => Split::Intraday(IntraDayTimeFrame::M1),
            TimeFrame::M5 => Split::Intraday(IntraDayTimeFrame::M5),
            TimeFrame::M15 => Split::Intraday(IntraDayTimeFrame::M15),
            TimeFrame::H1 => Split::Intraday(IntraDayTimeFrame::H1),
        }
    }
}

pub(crate) enum Split {
    Day(DayTimeFrame),
    Intraday(IntraDayTimeFrame),
}

/// Timeframes of the day-candles endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTimeFrame {
    D1,
    W1,
}

/// Timeframes of the intraday-candles endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntraDayTimeFrame {
    M1,
    M5,
    M15,
    H1,
}

// ─── Requests ────────────────────────────────────────────────────────────────

const MAX_COUNT: i64 = 500;
const MAX_DAY_SPAN_DAYS: i64 = 365;
const MAX_INTRADAY_SPAN_DAYS: i64 = 30;

fn check_count(count: Option<i64>) -> Result<(), ValidationError> {
    match count {
        Some(n) if !(1..=MAX_COUNT).contains(&n) => Err(ValidationError::CountOutOfRange(n)),
        _ => Ok(()),
    }
}

/// Request for candles with a daily or weekly timeframe.
///
/// Either an explicit `from`/`to` interval or a `count` anchored to one bound
/// may be given; the API resolves the combination.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayCandlesRequest {
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "timeFrame")]
    pub time_frame: DayTimeFrame,
    #[serde(rename = "Interval.From", skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(rename = "Interval.To", skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(rename = "Interval.Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl DayCandlesRequest {
    pub fn new(
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        time_frame: DayTimeFrame,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        count: Option<i64>,
    ) -> Result<Self, ValidationError> {
        check_count(count)?;
        if let (Some(from), Some(to)) = (from, to) {
            if (to - from).num_days() > MAX_DAY_SPAN_DAYS {
                return Err(ValidationError::DayIntervalTooWide);
            }
        }
        Ok(Self {
            security_board: security_board.into(),
            security_code: security_code.into(),
            time_frame,
            from,
            to,
            count,
        })
    }
}

/// Request for candles with an intraday timeframe.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IntraDayCandlesRequest {
    #[serde(rename = "securityBoard")]
    pub security_board: String,
    #[serde(rename = "securityCode")]
    pub security_code: String,
    #[serde(rename = "timeFrame")]
    pub time_frame: IntraDayTimeFrame,
    #[serde(
        rename = "Interval.From",
        with = "serde_util::utc_second_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<DateTime<Utc>>,
    #[serde(
        rename = "Interval.To",
        with = "serde_util::utc_second_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<DateTime<Utc>>,
    #[serde(rename = "Interval.Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl IntraDayCandlesRequest {
    pub fn new(
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        time_frame: IntraDayTimeFrame,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        count: Option<i64>,
    ) -> Result<Self, ValidationError> {
        check_count(count)?;
        if let (Some(from), Some(to)) = (from, to) {
            if (to - from).num_days() > MAX_INTRADAY_SPAN_DAYS {
                return Err(ValidationError::IntradayIntervalTooWide);
            }
        }
        Ok(Self {
            security_board: security_board.into(),
            security_code: security_code.into(),
            time_frame,
            from,
            to,
            count,
        })
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

/// One daily/weekly candle. Prices use the mantissa/scale wire decimal.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DayCandle {
    pub date: NaiveDate,
    pub open: FinamDecimal,
    pub close: FinamDecimal,
    pub high: FinamDecimal,
    pub low: FinamDecimal,
    pub volume: i64,
}

/// One intraday candle.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IntraDayCandle {
    #[serde(with = "serde_util::utc_second")]
    pub timestamp: DateTime<Utc>,
    pub open: FinamDecimal,
    pub close: FinamDecimal,
    pub high: FinamDecimal,
    pub low: FinamDecimal,
    pub volume: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DayCandlesData {
    #[serde(default)]
    pub candles: Vec<DayCandle>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct IntraDayCandlesData {
    #[serde(default)]
    pub candles: Vec<IntraDayCandle>,
}

pub type DayCandlesResponse = ApiResponse<DayCandlesData>;
pub type IntraDayCandlesResponse = ApiResponse<IntraDayCandlesData>;

/// Result of the timeframe-dispatching candle lookup: the endpoint (and so
/// the candle shape) follows from the requested [`TimeFrame`].
#[derive(Debug, Clone, PartialEq)]
pub enum CandlesResponse {
    Day(DayCandlesResponse),
    Intraday(IntraDayCandlesResponse),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_interval_over_365_days_rejected() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let err = DayCandlesRequest::new("TQBR", "SBER", DayTimeFrame::D1, Some(from), Some(to), None)
            .unwrap_err();
        assert_eq!(err, ValidationError::DayIntervalTooWide);
    }

    #[test]
    fn day_interval_of_exactly_365_days_accepted() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(
            DayCandlesRequest::new("TQBR", "SBER", DayTimeFrame::D1, Some(from), Some(to), None)
                .is_ok()
        );
    }

    #[test]
    fn intraday_interval_over_30_days_rejected() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 2, 5, 10, 0, 0).unwrap();
        let err = IntraDayCandlesRequest::new(
            "TQBR",
            "SBER",
            IntraDayTimeFrame::M5,
            Some(from),
            Some(to),
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::IntradayIntervalTooWide);
    }

    #[test]
    fn count_bounds_enforced() {
        for bad in [0, 501, -3] {
            let err = DayCandlesRequest::new("TQBR", "SBER", DayTimeFrame::D1, None, None, Some(bad))
                .unwrap_err();
            assert_eq!(err, ValidationError::CountOutOfRange(bad));
        }
        assert!(
            DayCandlesRequest::new("TQBR", "SBER", DayTimeFrame::D1, None, None, Some(500)).is_ok()
        );
    }

    #[test]
    fn day_request_query_aliases() {
        let req = DayCandlesRequest::new(
            "TQBR",
            "SBER",
            DayTimeFrame::W1,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            None,
            Some(10),
        )
        .unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["securityBoard"], "TQBR");
        assert_eq!(json["timeFrame"], "W1");
        assert_eq!(json["Interval.From"], "2024-01-01");
        assert_eq!(json["Interval.Count"], 10);
        assert!(json.get("Interval.To").is_none());
    }

    #[test]
    fn candle_decodes_wire_decimals() {
        let raw = r#"{"date":"2024-03-15","open":{"num":25065,"scale":2},
                      "close":{"num":25165,"scale":2},"high":{"num":25265,"scale":2},
                      "low":{"num":24965,"scale":2},"volume":1200}"#;
        let candle: DayCandle = serde_json::from_str(raw).unwrap();
        assert_eq!(candle.open.value().to_string(), "250.65");
        assert_eq!(candle.volume, 1200);
    }
}
