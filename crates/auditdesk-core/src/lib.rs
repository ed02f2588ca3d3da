//! AuditDesk Core: domain models, repository traits and the query
//! engine shared by every AuditDesk crate.

#[macro_use]
mod macros;

pub mod error;
pub mod models;
pub mod query;
pub mod repository;

pub use error::{AuditDeskError, AuditDeskResult};
