//! AuditDesk Store: the static, read-only event store.
//!
//! This crate provides:
//! - The bundled dataset and its integrity checks ([`Dataset`])
//! - An in-memory implementation of every `auditdesk-core` read
//!   repository ([`MemoryStore`])
//! - A recording export sink that keeps emitted export records for the
//!   life of the process ([`RecordingExportSink`])

mod dataset;
mod error;
mod memory;
mod sink;

pub use dataset::{Dataset, SEED_DATASET};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sink::RecordingExportSink;
