use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// File name of the playlist under the XDG data home (`~/.local/share/playlist`).
pub const PLAYLIST_FILE_NAME: &str = "playlist";

/// Browser-like user agent; some sites answer 403 to bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Settings for one pipeline run. Built from defaults plus CLI overrides and
/// passed explicitly into the pipeline; nothing below reads the environment.
#[derive(Debug, Clone)]
pub struct PlaylistConfig {
    /// Playlist file that lines are appended to.
    pub playlist_path: PathBuf,
    /// Value of the `User-Agent` header sent with every page request.
    pub user_agent: String,
    /// Maximum time to establish the connection.
    pub connect_timeout: Duration,
    /// Maximum time for the whole request, body included.
    pub timeout: Duration,
}

impl PlaylistConfig {
    /// Config with the given playlist path and default network settings.
    pub fn with_playlist(playlist_path: impl Into<PathBuf>) -> Self {
        Self {
            playlist_path: playlist_path.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }

    /// Network settings only, for title lookups that never write a playlist.
    /// Does not touch the environment, so it works without a home directory.
    pub fn for_lookup() -> Self {
        Self::with_playlist(PathBuf::new())
    }

    /// Resolve the config for a run: `playlist_override` wins, otherwise the
    /// default per-user playlist path is used.
    pub fn resolve(playlist_override: Option<PathBuf>) -> Result<Self> {
        let playlist_path = match playlist_override {
            Some(path) => path,
            None => default_playlist_path()?,
        };
        Ok(Self::with_playlist(playlist_path))
    }
}

/// Default playlist location: `$XDG_DATA_HOME/playlist` (`~/.local/share/playlist`).
pub fn default_playlist_path() -> Result<PathBuf> {
    let xdg_dirs =
        xdg::BaseDirectories::new().context("could not locate the user's data directory")?;
    Ok(xdg_dirs.get_data_home().join(PLAYLIST_FILE_NAME))
}
