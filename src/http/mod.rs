//! HTTP session layer.

mod session;

pub use session::{FinamHttp, SessionStatus};
