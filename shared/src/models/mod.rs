//! Data models
//!
//! Records exchanged verbatim with the HR backend. Wire field names
//! that differ from Rust convention (`salaryPerYear`, `membersNo`,
//! `tenantId`, the `attendance` status field) are preserved through
//! serde renames. The backend enforces no invariants on these shapes
//! beyond what its endpoints accept.

pub mod attendance;
pub mod common;
pub mod complaint;
pub mod contract;
pub mod employee;
pub mod job;
pub mod project;
pub mod team;
pub mod user;

// Re-exports
pub use attendance::*;
pub use common::*;
pub use complaint::*;
pub use contract::*;
pub use employee::*;
pub use job::*;
pub use project::*;
pub use team::*;
pub use user::*;
