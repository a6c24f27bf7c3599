//! Per-URL outcomes of a batch run.

use crate::extract::NoTitleCause;
use crate::playlist::PlaylistLine;
use std::fmt;

/// Why a URL produced no playlist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Title pattern missing or body not decodable.
    NoTitle(NoTitleCause),
    /// The page carried only the placeholder title.
    PlaceholderTitle,
    /// Fetch failed (curl error or non-2xx status).
    Transport(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTitle(cause) => write!(f, "no title: {cause}"),
            SkipReason::PlaceholderTitle => write!(f, "placeholder title (video unavailable)"),
            SkipReason::Transport(msg) => write!(f, "fetch failed: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    Added(PlaylistLine),
    Skipped(SkipReason),
}

/// Outcome for one input URL.
#[derive(Debug, Clone)]
pub struct UrlReport {
    /// URL as given by the caller.
    pub source: String,
    /// URL after normalization (what was fetched and stored).
    pub url: String,
    pub outcome: UrlOutcome,
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<UrlReport>,
}

impl BatchReport {
    /// Lines that made it into the playlist, in input order.
    pub fn lines(&self) -> impl Iterator<Item = &PlaylistLine> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            UrlOutcome::Added(line) => Some(line),
            UrlOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&UrlReport, &SkipReason)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            UrlOutcome::Skipped(reason) => Some((e, reason)),
            UrlOutcome::Added(_) => None,
        })
    }

    pub fn added_count(&self) -> usize {
        self.lines().count()
    }
}
