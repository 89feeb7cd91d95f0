//! Network constants.

/// Production trade API host.
pub const DEFAULT_API_URL: &str = "https://trade-api.finam.ru";

/// Common path prefix of the public API.
pub const API_PREFIX: &str = "/public/api/v1";

/// Header carrying the access token on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";
