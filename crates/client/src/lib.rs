//! HTTP adapter for the marketplace admin API.
//!
//! Owns the bearer-token client, the endpoint calls, the persisted session
//! record and the request-generation guard used by list pages.

pub mod api;
pub mod config;
pub mod http;
pub mod request_guard;
pub mod session;

pub use config::config;
pub use http::{build_query, decode_response, ApiClient};
pub use request_guard::{RequestGuard, Ticket};
pub use session::{MemoryStore, Session, SessionStore, TOKEN_KEY, USER_KEY};
