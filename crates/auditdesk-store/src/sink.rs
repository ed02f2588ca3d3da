//! Simulated export record sink.

use std::sync::Arc;

use auditdesk_core::error::AuditDeskResult;
use auditdesk_core::models::export::ExportRecord;
use auditdesk_core::repository::ExportRecordSink;
use tokio::sync::Mutex;
use tracing::info;

/// Keeps appended export records in memory for the life of the process.
///
/// Nothing is persisted. A deployment wires the external audit pipeline
/// in behind [`ExportRecordSink`] instead.
#[derive(Debug, Clone, Default)]
pub struct RecordingExportSink {
    records: Arc<Mutex<Vec<ExportRecord>>>,
}

impl RecordingExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub async fn records(&self) -> Vec<ExportRecord> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

impl ExportRecordSink for RecordingExportSink {
    async fn append(&self, record: ExportRecord) -> AuditDeskResult<()> {
        info!(
            export_id = %record.id,
            actor = record.actor.user_id.as_deref().unwrap_or("-"),
            row_count = record.row_count,
            format = %record.format,
            "Export intent recorded"
        );
        self.records.lock().await.push(record);
        Ok(())
    }
}
