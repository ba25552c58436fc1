//! Mechlink Client Package
//!
//! Typed REST client and action dispatcher for the Mechlink marketplace
//! backend. Carries the session credential, serializes action bodies,
//! interprets responses, and applies lifecycle transitions only after the
//! backend confirms them.

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod session;

// Re-export commonly used types
pub use api::{JobsPage, RequestTab};
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use session::{Session, SessionStore};
