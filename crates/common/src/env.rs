//! Environment/runtime helpers
//!
//! Sanity checks for the directories the server expects at startup.

use tracing::warn;

/// Warn when the static asset directory (or the workflow page inside it) is missing.
/// The server still starts; `/workflow.html` will 404.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
        return Ok(());
    }
    let page = format!("{frontend_dir}/workflow.html");
    if tokio::fs::metadata(&page).await.is_err() {
        warn!(%page, "workflow page not found; /workflow will redirect to a 404");
    }
    Ok(())
}
