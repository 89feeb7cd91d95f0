//! Portfolio sub-client.

use crate::client::FinamClient;
use crate::domain::portfolio::wire::{PortfolioRequest, PortfolioResponse};
use crate::error::SdkError;
use crate::network::API_PREFIX;

/// Sub-client for portfolio snapshots.
pub struct Portfolio<'a> {
    pub(crate) client: &'a FinamClient,
}

impl<'a> Portfolio<'a> {
    pub async fn get(&self, request: &PortfolioRequest) -> Result<PortfolioResponse, SdkError> {
        let path = format!("{API_PREFIX}/portfolio");
        Ok(self.client.http.get(&path, request).await?)
    }
}
