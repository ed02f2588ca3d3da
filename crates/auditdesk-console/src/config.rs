//! Console configuration.

use auditdesk_core::models::export::ExportFormat;
use chrono::Duration;

use crate::error::ConsoleError;

/// Configuration for the dashboard console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Longest accepted export justification, in characters (default: 2000).
    pub max_justification_len: usize,
    /// Format used when an export intent does not name one (default: CSV).
    pub default_export_format: ExportFormat,
    /// Inactivity after which an active session is flagged idle
    /// (default: 900 = 15 minutes).
    pub session_idle_timeout_secs: u64,
    /// Log level used when `RUST_LOG` is not set (default: `info`).
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_justification_len: 2000,
            default_export_format: ExportFormat::Csv,
            session_idle_timeout_secs: 900,
            log_level: "info".into(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from `AUDITDESK_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConsoleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConsoleError> {
        let defaults = Self::default();

        let max_justification_len = match lookup("AUDITDESK_MAX_JUSTIFICATION_LEN") {
            Some(v) => v.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or(
                ConsoleError::InvalidConfig {
                    key: "AUDITDESK_MAX_JUSTIFICATION_LEN",
                    value: v,
                },
            )?,
            None => defaults.max_justification_len,
        };

        let default_export_format = match lookup("AUDITDESK_EXPORT_FORMAT") {
            Some(v) => v.parse().map_err(|_| ConsoleError::InvalidConfig {
                key: "AUDITDESK_EXPORT_FORMAT",
                value: v,
            })?,
            None => defaults.default_export_format,
        };

        let session_idle_timeout_secs = match lookup("AUDITDESK_SESSION_IDLE_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|_| ConsoleError::InvalidConfig {
                    key: "AUDITDESK_SESSION_IDLE_TIMEOUT_SECS",
                    value: v,
                })?,
            None => defaults.session_idle_timeout_secs,
        };

        let log_level = lookup("AUDITDESK_LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            max_justification_len,
            default_export_format,
            session_idle_timeout_secs,
            log_level,
        })
    }

    pub fn session_idle_timeout(&self) -> Duration {
        i64::try_from(self.session_idle_timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}
