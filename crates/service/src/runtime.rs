//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate resolves the
//! instance directory through the service layer.

use std::path::PathBuf;

/// Create the instance directory, falling back to `fallback` if needed.
pub async fn ensure_instance_dir(primary: &str, fallback: &str) -> anyhow::Result<PathBuf> {
    common::env::ensure_dir_with_fallback(primary, fallback).await
}
