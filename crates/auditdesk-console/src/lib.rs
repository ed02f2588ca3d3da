//! AuditDesk Console: the dashboard shell, per-view filter state and
//! export intent recording.

pub mod config;
pub mod error;
pub mod export;
pub mod router;
pub mod views;

pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use export::{ExportIntent, ExportService};
pub use router::{Dashboard, DashboardView, DeepLink, ViewContent};
