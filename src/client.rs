//! High-level client — `FinamClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the session lifecycle surface, and the flat
//! convenience methods that mirror the sub-client operations.

use crate::domain::candles::client::Candles;
use crate::domain::candles::wire::{
    self as candles_wire, CandlesResponse, DayCandlesRequest, DayCandlesResponse,
    IntraDayCandlesRequest, IntraDayCandlesResponse, TimeFrame,
};
use crate::domain::order::client::Orders;
use crate::domain::order::wire::{
    CancelOrderRequest, CancelOrderResponse, CreateOrderRequest, GetOrdersRequest,
    NewOrderResponse, OrdersResponse,
};
use crate::domain::portfolio::client::Portfolio;
use crate::domain::portfolio::wire::{PortfolioRequest, PortfolioResponse};
use crate::domain::securities::client::Securities;
use crate::domain::securities::store::SecurityStore;
use crate::domain::securities::wire::{SecuritiesRequest, SecuritiesResponse};
use crate::domain::stop::client::Stops;
use crate::domain::stop::wire::{
    CancelStopRequest, CancelStopResponse, CreateStopRequest, GetStopsRequest, NewStopResponse,
    StopsResponse,
};
use crate::error::{AuthError, SdkError};
use crate::http::{FinamHttp, SessionStatus};
use crate::network::{API_PREFIX, DEFAULT_API_URL};

use sqlx::SqlitePool;

// Re-export sub-client types for convenience.
pub use crate::domain::candles::client::Candles as CandlesClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;
pub use crate::domain::securities::client::Securities as SecuritiesClient;
pub use crate::domain::stop::client::Stops as StopsClient;

/// The primary entry point for the Finam SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.candles()`, `client.orders()`, etc. Requests flow through a shared
/// session that must be opened with [`connect`](Self::connect) (or
/// [`start_session`](Self::start_session)) before any call.
pub struct FinamClient {
    pub(crate) http: FinamHttp,
    /// Local instrument cache; `None` disables the cache-aside path.
    pub(crate) store: Option<SecurityStore>,
}

impl FinamClient {
    pub fn builder(token: impl Into<String>) -> FinamClientBuilder {
        FinamClientBuilder::new(token)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn securities(&self) -> Securities<'_> {
        Securities { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn stops(&self) -> Stops<'_> {
        Stops { client: self }
    }

    // ── Session lifecycle ────────────────────────────────────────────────

    /// Validate the token, initialize the store, and open the shared
    /// session, all concurrently; then warm the instrument cache with a full
    /// securities fetch when a store is configured.
    pub async fn connect(&self) -> Result<(), SdkError> {
        tracing::info!(url = %self.http.base_url(), "connecting");
        let (token, _, session) = tokio::join!(
            self.check_token(),
            async {
                if let Some(store) = &self.store {
                    // A store that fails to initialize degrades the client to
                    // remote-only lookups; it must not block the session.
                    if let Err(e) = store.init().await {
                        tracing::warn!(error = %e, "security store init failed");
                    }
                }
            },
            self.http.start(),
        );
        token?;
        session?;

        if self.store.is_some() {
            // Cache-aside on purpose: a reconnect against a populated store
            // must not re-poll the full instrument list.
            self.securities()
                .get(&SecuritiesRequest::new(None, None))
                .await?;
            tracing::info!("instrument cache warmed");
        }
        Ok(())
    }

    /// Close the shared session. Requests made afterwards fail fast until a
    /// new session is started.
    pub async fn disconnect(&self) {
        self.http.stop().await;
    }

    /// Open the shared session without the token check or cache warm-up.
    pub async fn start_session(&self) -> Result<(), SdkError> {
        Ok(self.http.start().await?)
    }

    /// Alias of [`disconnect`](Self::disconnect).
    pub async fn close_session(&self) {
        self.http.stop().await;
    }

    pub async fn session_status(&self) -> SessionStatus {
        self.http.status().await
    }

    /// Validate the access token against the API on a disposable session.
    /// The shared session is untouched either way.
    pub async fn check_token(&self) -> Result<(), SdkError> {
        let path = format!("{API_PREFIX}/access-tokens/check");
        if self.http.probe(&path).await? {
            tracing::info!("access token accepted");
            Ok(())
        } else {
            Err(AuthError::TokenRejected.into())
        }
    }

    // ── Flat convenience methods ─────────────────────────────────────────

    /// Fetch candles for any timeframe, dispatching to the day or intraday
    /// endpoint. Day-endpoint requests keep only the date part of the
    /// interval bounds.
    pub async fn get_candles(
        &self,
        security_board: &str,
        security_code: &str,
        time_frame: TimeFrame,
        from: Option<chrono::DateTime<chrono::Utc>>,
        to: Option<chrono::DateTime<chrono::Utc>>,
        count: Option<i64>,
    ) -> Result<CandlesResponse, SdkError> {
        match time_frame.split() {
            candles_wire::Split::Day(tf) => {
                let request = DayCandlesRequest::new(
                    security_board,
                    security_code,
                    tf,
                    from.map(|dt| dt.date_naive()),
                    to.map(|dt| dt.date_naive()),
                    count,
                )?;
                Ok(CandlesResponse::Day(self.candles().day(&request).await?))
            }
            candles_wire::Split::Intraday(tf) => {
                let request = IntraDayCandlesRequest::new(
                    security_board,
                    security_code,
                    tf,
                    from,
                    to,
                    count,
                )?;
                Ok(CandlesResponse::Intraday(
                    self.candles().intraday(&request).await?,
                ))
            }
        }
    }

    pub async fn get_day_candles(
        &self,
        request: &DayCandlesRequest,
    ) -> Result<DayCandlesResponse, SdkError> {
        self.candles().day(request).await
    }

    pub async fn get_intraday_candles(
        &self,
        request: &IntraDayCandlesRequest,
    ) -> Result<IntraDayCandlesResponse, SdkError> {
        self.candles().intraday(request).await
    }

    /// Cache-aside instrument lookup; see [`Securities::get`].
    pub async fn get_securities(
        &self,
        board: Option<&str>,
        seccode: Option<&str>,
    ) -> Result<SecuritiesResponse, SdkError> {
        self.securities()
            .get(&SecuritiesRequest::new(board, seccode))
            .await
    }

    pub async fn get_portfolio(
        &self,
        request: &PortfolioRequest,
    ) -> Result<PortfolioResponse, SdkError> {
        self.portfolio().get(request).await
    }

    /// List every order of the account regardless of status.
    pub async fn get_orders(&self, client_id: &str) -> Result<OrdersResponse, SdkError> {
        self.orders().list(&GetOrdersRequest::new(client_id)).await
    }

    /// Submit an order payload assembled by [`crate::OrderBuilder`].
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<NewOrderResponse, SdkError> {
        self.orders().create(request).await
    }

    pub async fn cancel_order(
        &self,
        client_id: &str,
        transaction_id: i64,
    ) -> Result<CancelOrderResponse, SdkError> {
        self.orders()
            .cancel(&CancelOrderRequest {
                client_id: client_id.into(),
                transaction_id,
            })
            .await
    }

    /// List every stop of the account regardless of status.
    pub async fn get_stops(&self, client_id: &str) -> Result<StopsResponse, SdkError> {
        self.stops().list(&GetStopsRequest::new(client_id)).await
    }

    /// Submit a stop payload assembled by [`crate::StopBuilder`].
    pub async fn create_stop(
        &self,
        request: &CreateStopRequest,
    ) -> Result<NewStopResponse, SdkError> {
        self.stops().create(request).await
    }

    pub async fn cancel_stop(
        &self,
        client_id: &str,
        stop_id: i64,
    ) -> Result<CancelStopResponse, SdkError> {
        self.stops()
            .cancel(&CancelStopRequest {
                client_id: client_id.into(),
                stop_id,
            })
            .await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FinamClientBuilder {
    token: String,
    base_url: String,
    pool: Option<SqlitePool>,
}

impl FinamClientBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_API_URL.to_string(),
            pool: None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Back the securities sub-client with a local SQLite cache.
    pub fn security_store(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn build(self) -> Result<FinamClient, SdkError> {
        Ok(FinamClient {
            http: FinamHttp::new(&self.base_url, &self.token)?,
            store: self.pool.map(SecurityStore::new),
        })
    }
}
