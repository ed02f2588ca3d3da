//! AuditDesk entry point. Renders one dashboard view of the bundled dataset as JSON.
//!
//! Usage: `auditdesk [VIEW | DEEP-LINK]`, e.g. `auditdesk session-controls`
//! or `auditdesk /desktop-app`. With no argument the audit log is shown.

use anyhow::Context;
use auditdesk_console::{ConsoleConfig, Dashboard, DashboardView};
use auditdesk_store::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting AuditDesk...");

    let store = MemoryStore::seeded()?;
    let mut dashboard = Dashboard::new(config);

    if let Some(arg) = std::env::args().nth(1) {
        if dashboard.open_deep_link(&arg).is_none() {
            let view: DashboardView = arg.parse()?;
            dashboard.select(view);
        }
    }

    let content = dashboard.render(&store).await?;
    println!("{}", serde_json::to_string_pretty(&content)?);

    tracing::info!(view = dashboard.active().slug(), "AuditDesk finished.");
    Ok(())
}
