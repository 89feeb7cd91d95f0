//! Candles sub-client.

use crate::client::FinamClient;
use crate::domain::candles::wire::{
    DayCandlesRequest, DayCandlesResponse, IntraDayCandlesRequest, IntraDayCandlesResponse,
};
use crate::error::SdkError;
use crate::network::API_PREFIX;

/// Sub-client for candle history.
pub struct Candles<'a> {
    pub(crate) client: &'a FinamClient,
}

impl<'a> Candles<'a> {
    /// Fetch daily/weekly candles.
    pub async fn day(&self, request: &DayCandlesRequest) -> Result<DayCandlesResponse, SdkError> {
        let path = format!("{API_PREFIX}/day-candles");
        Ok(self.client.http.get(&path, request).await?)
    }

    /// Fetch intraday candles.
    pub async fn intraday(
        &self,
        request: &IntraDayCandlesRequest,
    ) -> Result<IntraDayCandlesResponse, SdkError> {
        let path = format!("{API_PREFIX}/intraday-candles");
        Ok(self.client.http.get(&path, request).await?)
    }
}
