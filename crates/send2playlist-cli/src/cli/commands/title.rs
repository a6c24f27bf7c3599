//! `send2playlist title <url>` – print one URL's cleaned title.

use anyhow::{Context, Result};
use send2playlist_core::config::PlaylistConfig;
use send2playlist_core::pipeline::Pipeline;

pub fn run_title(url: &str) -> Result<()> {
    let pipeline = Pipeline::new(PlaylistConfig::for_lookup());
    let title = pipeline
        .lookup_title(url)
        .with_context(|| format!("could not get a title for {url}"))?;
    println!("{title}");
    Ok(())
}
