//! Batch pipeline: normalize → fetch/extract → clean → suffix/placeholder
//! filter → one playlist append.
//!
//! URLs are processed one at a time, in order. Per-URL failures (no title,
//! placeholder title, fetch errors) skip that URL only; the batch fails only
//! when nothing is left to write or the final append fails.

mod filter;
mod report;

pub use filter::{judge_title, strip_site_suffix, TitleVerdict, PLACEHOLDER_TITLE, SITE_SUFFIX};
pub use report::{BatchReport, SkipReason, UrlOutcome, UrlReport};

use crate::clean::clean_title;
use crate::config::PlaylistConfig;
use crate::extract::{self, ExtractError};
use crate::fetch_page::{CurlFetcher, PageFetcher};
use crate::playlist::{self, PlaylistLine};
use crate::url_model;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// No URL in the batch produced a line; the playlist was not touched.
    #[error("no playlist lines to write ({attempted} url(s) tried)")]
    EmptyResult { attempted: usize },
    /// Appending to the playlist failed.
    #[error("failed to append to playlist {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct Pipeline<F = CurlFetcher> {
    config: PlaylistConfig,
    fetcher: F,
}

impl Pipeline<CurlFetcher> {
    /// Pipeline fetching pages over HTTP with libcurl.
    pub fn new(config: PlaylistConfig) -> Self {
        let fetcher = CurlFetcher::new(&config);
        Self { config, fetcher }
    }
}

impl<F: PageFetcher> Pipeline<F> {
    pub fn with_fetcher(config: PlaylistConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Fetches `url` (already normalized) and returns its cleaned,
    /// suffix-stripped title. The placeholder rule is not applied here.
    pub fn cleaned_title(&self, url: &str) -> Result<String, ExtractError> {
        let extracted = extract::fetch_title(&self.fetcher, url)?;
        let cleaned = clean_title(&extracted.compose());
        Ok(strip_site_suffix(&cleaned).to_string())
    }

    /// Normalizes and resolves the title of a single URL without touching the playlist.
    pub fn lookup_title(&self, source: &str) -> Result<String, ExtractError> {
        let url = url_model::normalize(source);
        self.cleaned_title(&url)
    }

    /// Runs one URL through every stage except the append.
    pub fn process_url(&self, source: &str) -> UrlReport {
        let url = url_model::normalize(source);
        let outcome = match extract::fetch_title(&self.fetcher, &url) {
            Ok(extracted) => match judge_title(&clean_title(&extracted.compose())) {
                TitleVerdict::Keep(title) => {
                    UrlOutcome::Added(PlaylistLine::new(title, url.clone()))
                }
                TitleVerdict::PlaceholderTitle => {
                    UrlOutcome::Skipped(SkipReason::PlaceholderTitle)
                }
            },
            Err(ExtractError::NoTitle(cause)) => UrlOutcome::Skipped(SkipReason::NoTitle(cause)),
            Err(ExtractError::Transport(e)) => {
                UrlOutcome::Skipped(SkipReason::Transport(e.to_string()))
            }
        };

        match &outcome {
            UrlOutcome::Added(line) => {
                tracing::debug!(url = %url, title = %line.title, "title resolved")
            }
            UrlOutcome::Skipped(reason @ SkipReason::Transport(_)) => {
                tracing::warn!(url = %url, "skipping url: {}", reason)
            }
            UrlOutcome::Skipped(reason) => tracing::info!(url = %url, "skipping url: {}", reason),
        }

        UrlReport {
            source: source.to_string(),
            url,
            outcome,
        }
    }

    /// Processes `urls` in order and appends every surviving line to the
    /// playlist in one write.
    ///
    /// Returns [`PipelineError::EmptyResult`] without touching the file when no
    /// URL produced a line.
    pub fn run<S: AsRef<str>>(&self, urls: &[S]) -> Result<BatchReport, PipelineError> {
        let report = BatchReport {
            entries: urls.iter().map(|u| self.process_url(u.as_ref())).collect(),
        };

        if report.added_count() == 0 {
            return Err(PipelineError::EmptyResult {
                attempted: urls.len(),
            });
        }

        let path = &self.config.playlist_path;
        let written = playlist::append_lines(path, report.lines()).map_err(|source| {
            PipelineError::Write {
                path: path.clone(),
                source,
            }
        })?;
        tracing::info!(
            written,
            skipped = report.skipped().count(),
            playlist = %path.display(),
            "appended to playlist"
        );

        Ok(report)
    }
}
