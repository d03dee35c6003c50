//! Environment/runtime helpers
//!
//! Directory checks run once at startup, before the database is opened.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Create `primary` (and parents). If that fails, create and return
/// `fallback` instead; only a failure on both aborts startup.
pub async fn ensure_dir_with_fallback(primary: &str, fallback: &str) -> anyhow::Result<PathBuf> {
    match tokio::fs::create_dir_all(primary).await {
        Ok(()) => {
            info!(dir = %primary, "instance directory ready");
            Ok(Path::new(primary).to_path_buf())
        }
        Err(e) => {
            warn!(dir = %primary, %fallback, error = %e, "cannot create instance directory; using fallback");
            tokio::fs::create_dir_all(fallback)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {primary} or fallback {fallback}: {e}"))?;
            Ok(Path::new(fallback).to_path_buf())
        }
    }
}
