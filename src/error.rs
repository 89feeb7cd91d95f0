//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// `Transport` is fatal: the shared session is torn down as a side effect and
/// every later request fails with `NoSession` until the caller starts a new
/// one. Domain-level API errors are not represented here; they travel inside
/// the response envelope as values.
#[derive(Error, Debug)]
pub enum HttpError {
    /// No active session. Call `start_session` (or `connect`) first.
    #[error("no active client session")]
    NoSession,

    /// Network-level failure or a non-200 response without a JSON body.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The API rejected the access token on the check endpoint.
    #[error("access token rejected by the API")]
    TokenRejected,
}

/// Local request-construction failures, surfaced before any network call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("day candle interval cannot exceed 365 days")]
    DayIntervalTooWide,

    #[error("intraday candle interval cannot exceed 30 days")]
    IntradayIntervalTooWide,

    #[error("candle count must be within 1..=500, got {0}")]
    CountOutOfRange(i64),

    #[error("condition type Time requires a condition time")]
    ConditionTimeMissing,

    #[error("valid-before type ExactTime requires a time")]
    ValidBeforeTimeMissing,
}
