//! Export intent recording.
//!
//! An export is never generated here. Accepting an intent validates the
//! justification, snapshots the filtered view it refers to, and appends
//! exactly one [`ExportRecord`] to the configured sink.

use auditdesk_core::error::AuditDeskResult;
use auditdesk_core::models::actor::Actor;
use auditdesk_core::models::audit::AuditEvent;
use auditdesk_core::models::export::{ExportFormat, ExportRecord};
use auditdesk_core::query::AuditEventFilter;
use auditdesk_core::repository::{AuditEventRepository, ExportRecordSink};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

/// A request to export the audit view selected by `filter`.
#[derive(Debug, Clone)]
pub struct ExportIntent {
    /// Current actor, as supplied by the authentication context.
    pub actor: Actor,
    pub justification: String,
    pub filter: AuditEventFilter,
    /// `None` uses the configured default format.
    pub format: Option<ExportFormat>,
}

/// Export intent recorder.
///
/// Generic over the repository and sink so the console has no
/// dependency on any particular store.
pub struct ExportService<R: AuditEventRepository, K: ExportRecordSink> {
    repo: R,
    sink: K,
    config: ConsoleConfig,
}

impl<R: AuditEventRepository, K: ExportRecordSink> ExportService<R, K> {
    pub fn new(repo: R, sink: K, config: ConsoleConfig) -> Self {
        Self { repo, sink, config }
    }

    /// Check a justification and return it trimmed.
    pub fn validate_justification(&self, raw: &str) -> Result<String, ConsoleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConsoleError::EmptyJustification);
        }
        if trimmed.chars().count() > self.config.max_justification_len {
            return Err(ConsoleError::JustificationTooLong {
                max: self.config.max_justification_len,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Validate `intent` and record it.
    ///
    /// On rejection nothing reaches the sink.
    pub async fn record_intent(&self, intent: ExportIntent) -> AuditDeskResult<ExportRecord> {
        let purpose = match self.validate_justification(&intent.justification) {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "Export intent rejected");
                return Err(e.into());
            }
        };

        let rows = self.repo.list_audit_events(intent.filter.clone()).await?;

        let record = ExportRecord {
            id: Uuid::new_v4(),
            actor: intent.actor,
            row_count: rows.len() as u64,
            purpose,
            format: intent.format.unwrap_or(self.config.default_export_format),
            filter: intent.filter,
            rows_digest: digest_rows(&rows),
            recorded_at: Utc::now(),
        };

        self.sink.append(record.clone()).await?;

        info!(
            export_id = %record.id,
            row_count = record.row_count,
            "Export intent accepted"
        );

        Ok(record)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

/// SHA-256 over the row ids in view order, URL-safe base64 without padding.
pub fn digest_rows(rows: &[AuditEvent]) -> String {
    let mut hasher = Sha256::new();
    for row in rows {
        hasher.update(row.id.as_bytes());
        hasher.update(b"\n");
    }
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}
