//! Securities sub-client — cache-aside lookup over the local store.

use crate::client::FinamClient;
use crate::domain::securities::wire::{SecuritiesData, SecuritiesRequest, SecuritiesResponse};
use crate::error::SdkError;
use crate::network::API_PREFIX;
use crate::shared::ApiResponse;

/// Sub-client for instrument reference data.
pub struct Securities<'a> {
    pub(crate) client: &'a FinamClient,
}

impl<'a> Securities<'a> {
    /// Cache-aside lookup: the local store is consulted first and any
    /// non-empty match is returned without network I/O; a miss falls through
    /// to the API and persists what comes back.
    pub async fn get(&self, request: &SecuritiesRequest) -> Result<SecuritiesResponse, SdkError> {
        self.lookup(request, false).await
    }

    /// Forced remote fetch, bypassing the local store on the read side. The
    /// response still feeds the store.
    pub async fn get_from_api(
        &self,
        request: &SecuritiesRequest,
    ) -> Result<SecuritiesResponse, SdkError> {
        self.lookup(request, true).await
    }

    async fn lookup(
        &self,
        request: &SecuritiesRequest,
        from_api: bool,
    ) -> Result<SecuritiesResponse, SdkError> {
        let seccode = request.seccode.as_deref();
        let board = request.board.as_deref();

        if !from_api {
            if let Some(store) = &self.client.store {
                match store.find(seccode, board).await {
                    Ok(rows) if !rows.is_empty() => {
                        tracing::info!(count = rows.len(), "securities served from local store");
                        return Ok(ApiResponse {
                            data: Some(SecuritiesData { securities: rows }),
                            error: None,
                        });
                    }
                    Ok(_) => {}
                    // A broken store degrades to the remote path; the lookup
                    // itself must not fail because of persistence.
                    Err(e) => tracing::warn!(error = %e, "local store lookup failed"),
                }
            }
        }

        let path = format!("{API_PREFIX}/securities");
        let response: SecuritiesResponse = self.client.http.get(&path, request).await?;

        if let Some(store) = &self.client.store {
            if response.is_ok() {
                if let Some(data) = &response.data {
                    if !data.securities.is_empty() {
                        if let Err(e) = store.insert_ignore(&data.securities).await {
                            tracing::warn!(error = %e, "failed to persist securities");
                        }
                    }
                }
            }
        }

        Ok(response)
    }
}
