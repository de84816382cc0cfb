//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the data directory used by file-backed stores exists.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if data_dir.trim().is_empty() {
        warn!("empty data directory configured; falling back to the working directory");
        return Ok(());
    }
    if tokio::fs::metadata(data_dir).await.is_ok() {
        debug!(%data_dir, "data directory present");
        return Ok(());
    }
    tokio::fs::create_dir_all(Path::new(data_dir))
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}
