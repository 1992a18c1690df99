//! Shared types for the HRM client
//!
//! Wire records exchanged with the HR backend, auth DTOs used by the
//! client, and the date arithmetic contract forms depend on.

pub mod client;
pub mod duration;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
