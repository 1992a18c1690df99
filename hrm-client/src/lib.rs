//! HRM Client - workflow layer for the HR backend
//!
//! The pieces every screen of the HR app shares: a typed resource
//! client over the REST API, generic list and form view-models,
//! the session holder, and a sequential saga executor for the
//! create-then-assign submissions.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod saga;
pub mod session;
pub mod workflows;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionHolder};

// Re-export shared types for convenience
pub use shared::client::{ChangePasswordQuery, SignInRequest};
pub use shared::models;
