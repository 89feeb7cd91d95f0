//! Orders sub-client.

use crate::client::FinamClient;
use crate::domain::order::wire::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, GetOrdersRequest,
    NewOrderResponse, OrdersResponse,
};
use crate::error::SdkError;
use crate::network::API_PREFIX;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a FinamClient,
}

impl<'a> Orders<'a> {
    /// List orders for an account, filtered by status flags.
    pub async fn list(&self, request: &GetOrdersRequest) -> Result<OrdersResponse, SdkError> {
        let path = format!("{API_PREFIX}/orders");
        Ok(self.client.http.get(&path, request).await?)
    }

    /// Submit a new order.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<NewOrderResponse, SdkError> {
        let path = format!("{API_PREFIX}/orders");
        Ok(self.client.http.post(&path, request).await?)
    }

    /// Cancel an active order by transaction id.
    pub async fn cancel(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, SdkError> {
        let path = format!("{API_PREFIX}/orders");
        Ok(self.client.http.delete(&path, request).await?)
    }
}
