//! Order domain — limit, market and conditional orders.

pub mod builder;
pub mod client;
pub mod wire;

pub use builder::OrderBuilder;
pub use client::Orders;
pub use wire::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, GetOrdersRequest, NewOrderResponse,
    Order, OrdersResponse,
};
