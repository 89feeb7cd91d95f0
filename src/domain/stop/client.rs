//! Stops sub-client.

use crate::client::FinamClient;
use crate::domain::stop::wire::{
    CancelStopRequest, CancelStopResponse, CreateStopRequest, GetStopsRequest, NewStopResponse,
    StopsResponse,
};
use crate::error::SdkError;
use crate::network::API_PREFIX;

/// Sub-client for stop-order operations.
pub struct Stops<'a> {
    pub(crate) client: &'a FinamClient,
}

impl<'a> Stops<'a> {
    /// List stops for an account, filtered by status flags.
    pub async fn list(&self, request: &GetStopsRequest) -> Result<StopsResponse, SdkError> {
        let path = format!("{API_PREFIX}/stops");
        Ok(self.client.http.get(&path, request).await?)
    }

    /// Submit a new stop.
    pub async fn create(&self, request: &CreateStopRequest) -> Result<NewStopResponse, SdkError> {
        let path = format!("{API_PREFIX}/stops");
        Ok(self.client.http.post(&path, request).await?)
    }

    /// Cancel an active stop by id. Cancelling a stop leaves the linked
    /// order untouched.
    pub async fn cancel(&self, request: &CancelStopRequest) -> Result<CancelStopResponse, SdkError> {
        let path = format!("{API_PREFIX}/stops");
        Ok(self.client.http.delete(&path, request).await?)
    }
}
