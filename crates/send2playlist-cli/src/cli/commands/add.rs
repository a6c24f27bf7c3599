//! `send2playlist add <url>...` – append titles of the given URLs to the playlist.

use anyhow::Result;
use send2playlist_core::config::PlaylistConfig;
use send2playlist_core::pipeline::Pipeline;
use std::path::PathBuf;

/// Runs the batch pipeline. Fails (exit status 1) when no line was written.
pub fn run_add(urls: &[String], playlist: Option<PathBuf>) -> Result<()> {
    let cfg = PlaylistConfig::resolve(playlist)?;
    tracing::debug!("resolved config: {:?}", cfg);

    let pipeline = Pipeline::new(cfg);
    let report = pipeline.run(urls)?;

    for (entry, reason) in report.skipped() {
        tracing::debug!(source = %entry.source, "not added: {}", reason);
    }
    println!(
        "Added {} of {} to {}",
        report.added_count(),
        urls.len(),
        pipeline.config().playlist_path.display()
    );
    Ok(())
}
