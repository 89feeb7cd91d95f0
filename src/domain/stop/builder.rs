//! Construction of create-stop payloads.
//!
//! Legs are attached as already-shaped [`StopLoss`] and [`TakeProfit`]
//! values; the builder contributes the validity-window rule and warns when a
//! stop is submitted with no legs at all, which the API accepts as an inert
//! order.

use crate::domain::order::builder::build_valid_before;
use crate::domain::stop::wire::{CreateStopRequest, StopLoss, TakeProfit};
use crate::error::ValidationError;
use crate::shared::{BuySell, OrderValidBeforeType};
use chrono::{DateTime, Utc};

/// Builder for [`CreateStopRequest`].
#[derive(Debug, Clone)]
pub struct StopBuilder {
    client_id: String,
    security_board: String,
    security_code: String,
    buy_sell: BuySell,
    link_order: i64,
    stop_loss: Option<StopLoss>,
    take_profit: Option<TakeProfit>,
    expiration_date: Option<DateTime<Utc>>,
    valid_before: Option<OrderValidBeforeType>,
    valid_before_time: Option<DateTime<Utc>>,
}

impl StopBuilder {
    pub fn new(
        client_id: impl Into<String>,
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        buy_sell: BuySell,
        link_order: i64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            security_board: security_board.into(),
            security_code: security_code.into(),
            buy_sell,
            link_order,
            stop_loss: None,
            take_profit: None,
            expiration_date: None,
            valid_before: None,
            valid_before_time: None,
        }
    }

    pub fn stop_loss(mut self, leg: StopLoss) -> Self {
        self.stop_loss = Some(leg);
        self
    }

    pub fn take_profit(mut self, leg: TakeProfit) -> Self {
        self.take_profit = Some(leg);
        self
    }

    /// Expiry of the linked FORTS order.
    pub fn expiration_date(mut self, date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Attach a validity window. `ExactTime` windows also need
    /// [`valid_before_time`](Self::valid_before_time).
    pub fn valid_before(mut self, kind: OrderValidBeforeType) -> Self {
        self.valid_before = Some(kind);
        self
    }

    /// Expiry time for an `ExactTime` window, UTC.
    pub fn valid_before_time(mut self, time: DateTime<Utc>) -> Self {
        self.valid_before_time = Some(time);
        self
    }

    pub fn build(self) -> Result<CreateStopRequest, ValidationError> {
        let valid_before = build_valid_before(self.valid_before, self.valid_before_time)?;

        if self.stop_loss.is_none() && self.take_profit.is_none() {
            tracing::warn!(
                security = %self.security_code,
                "stop order has neither a stop-loss nor a take-profit leg"
            );
        }

        Ok(CreateStopRequest {
            client_id: self.client_id,
            security_board: self.security_board,
            security_code: self.security_code,
            buy_sell: self.buy_sell,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            expiration_date: self.expiration_date,
            link_order: self.link_order,
            valid_before,
        })
    }
}
