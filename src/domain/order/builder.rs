//! Construction of create-order payloads from flat optional parameters.
//!
//! The builder owns the required-together rules so they fail before any
//! network call: a condition always carries its trigger price, a `Time`
//! condition must carry a trigger time, and an `ExactTime` validity window
//! must carry its expiry time.

use crate::domain::order::wire::CreateOrderRequest;
use crate::error::ValidationError;
use crate::shared::{
    BuySell, OrderCondition, OrderConditionType, OrderValidBefore, OrderValidBeforeType, Property,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Builder for [`CreateOrderRequest`].
///
/// Without a price the order is a market order; with a price it is a limit
/// order; adding a condition makes it conditional.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    client_id: String,
    security_board: String,
    security_code: String,
    buy_sell: BuySell,
    quantity: i64,
    use_credit: bool,
    price: Option<Decimal>,
    property: Property,
    condition: Option<(OrderConditionType, Decimal)>,
    condition_time: Option<DateTime<Utc>>,
    valid_before: Option<OrderValidBeforeType>,
    valid_before_time: Option<DateTime<Utc>>,
}

impl OrderBuilder {
    pub fn new(
        client_id: impl Into<String>,
        security_board: impl Into<String>,
        security_code: impl Into<String>,
        buy_sell: BuySell,
        quantity: i64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            security_board: security_board.into(),
            security_code: security_code.into(),
            buy_sell,
            quantity,
            use_credit: true,
            price: None,
            property: Property::PutInQueue,
            condition: None,
            condition_time: None,
            valid_before: None,
            valid_before_time: None,
        }
    }

    /// Execution price; leave unset for a market order.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Margin trading flag (unavailable on the derivatives market).
    pub fn use_credit(mut self, use_credit: bool) -> Self {
        self.use_credit = use_credit;
        self
    }

    /// Handling of a partially filled remainder.
    pub fn property(mut self, property: Property) -> Self {
        self.property = property;
        self
    }

    /// Attach a trigger condition. `Time` conditions also need
    /// [`condition_time`](Self::condition_time).
    pub fn condition(mut self, kind: OrderConditionType, price: Decimal) -> Self {
        self.condition = Some((kind, price));
        self
    }

    /// Trigger time for a `Time` condition, UTC.
    pub fn condition_time(mut self, time: DateTime<Utc>) -> Self {
        self.condition_time = Some(time);
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

    pub fn build(self) -> Result<CreateOrderRequest, ValidationError> {
        let condition = match self.condition {
            Some((kind, price)) => {
                if kind == OrderConditionType::Time && self.condition_time.is_none() {
                    return Err(ValidationError::ConditionTimeMissing);
                }
                Some(OrderCondition {
                    kind,
                    price,
                    time: self.condition_time,
                })
            }
            None => None,
        };

        let valid_before = build_valid_before(self.valid_before, self.valid_before_time)?;

        Ok(CreateOrderRequest {
            client_id: self.client_id,
            security_board: self.security_board,
            security_code: self.security_code,
            buy_sell: self.buy_sell,
            quantity: self.quantity,
            use_credit: self.use_credit,
            price: self.price,
            property: self.property,
            condition,
            valid_before,
        })
    }
}

/// Shared by the order and stop builders: an `ExactTime` window without a
/// time is invalid, any other kind ignores the time argument.
pub(crate) fn build_valid_before(
    kind: Option<OrderValidBeforeType>,
    time: Option<DateTime<Utc>>,
) -> Result<Option<OrderValidBefore>, ValidationError> {
    match kind {
        Some(OrderValidBeforeType::ExactTime) if time.is_none() => {
            Err(ValidationError::ValidBeforeTimeMissing)
        }
        Some(kind) => Ok(Some(OrderValidBefore { kind, time })),
        None => Ok(None),
    }
}
