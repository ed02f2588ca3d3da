//! Domain models for AuditDesk.
//!
//! Every record shape here is read-only for the life of the process.
//! Records are produced by an external event pipeline; AuditDesk only
//! reads them.

pub mod access_log;
pub mod actor;
pub mod alert;
pub mod audit;
pub mod classification;
pub mod export;
pub mod ip_policy;
pub mod lifecycle;
pub mod session;

labeled_enum! {
    /// Whether the recorded action succeeded.
    pub enum Outcome {
        Success => ("success", "Success"),
        Failure => ("failure", "Failure"),
    }
}

labeled_enum! {
    /// Which client produced a log record.
    pub enum LogSource {
        DesktopApp => ("desktop-app", "Desktop App"),
        AdminPortal => ("admin-portal", "Admin Portal"),
    }
}
