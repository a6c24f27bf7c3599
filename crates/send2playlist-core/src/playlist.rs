//! Playlist file: one `"<title> - <url>"` line per entry, append-only.
//!
//! No escaping and no uniqueness: duplicates and unsorted entries are fine.
//! Concurrent writers to the same file are not coordinated.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// One playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistLine {
    pub title: String,
    pub url: String,
}

impl PlaylistLine {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Formats as `"<title> - <url>"`, without the trailing newline.
impl fmt::Display for PlaylistLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.url)
    }
}

/// Appends `lines` to the playlist at `path` in a single write, in order.
///
/// Creates the file (and its parent directory) if missing. The file is closed
/// before returning, on success and on error. Returns the number of lines written.
pub fn append_lines<'a, I>(path: &Path, lines: I) -> io::Result<usize>
where
    I: IntoIterator<Item = &'a PlaylistLine>,
{
    let mut buf = String::new();
    let mut count = 0usize;
    for line in lines {
        buf.push_str(&line.to_string());
        buf.push('\n');
        count += 1;
    }
    if count == 0 {
        return Ok(0);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(buf.as_bytes())?;
    file.flush()?;
    Ok(count)
}
