//! Music directory scanning.
//!
//! `scan` walks an input directory, keeps files whose extension is a known
//! music or song-sheet format, and groups them into `Song`s by file stem. Two
//! files such as `Wagon_Wheel.chopro` and `wagon_wheel.pdf` become a single
//! song with two downloadable files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{GenlistError, Result};

/// Extensions (lowercase, no dot) recognized as part of a song.
pub const MUSIC_EXTENSIONS: &[&str] = &[
    "chopro", "cho", "crd", "pro", "chordpro", "pdf", "txt", "mp3", "m4a", "wav", "ogg", "flac",
    "mid", "midi", "urltxt",
];

/// A directory containing this file is skipped along with everything below it.
pub const HIDE_MARKER: &str = ".hide";

/// Which entries the scanner leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    /// Include every recognized file.
    None,
    /// Skip dot-files, dot-directories, and directories holding a `.hide` marker.
    #[default]
    Hidden,
}

/// One downloadable file belonging to a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongFile {
    /// Path relative to the scanned root.
    pub path: PathBuf,
    /// Lowercase extension, e.g. `pdf`.
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub files: Vec<SongFile>,
}

/// Scan `root` and return its songs sorted by title.
///
/// # Errors
/// `InputNotFound` if `root` does not exist, `InputNotDirectory` if it is not
/// a directory, `Io` if the root itself cannot be listed. Entries below the
/// root that cannot be read are skipped with a warning.
pub fn scan(root: &Path, filter: Filter) -> Result<Vec<Song>> {
    if !root.exists() {
        return Err(GenlistError::InputNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(GenlistError::InputNotDirectory(root.to_path_buf()));
    }
    fs::read_dir(root)?;

    // keyed by lowercase stem
    let mut grouped: BTreeMap<String, Song> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || keep_entry(e, filter));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(walk_error_into_io(e).into()),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = music_kind(entry.path()) else {
            continue;
        };
        let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
            continue;
        };
        let rel = entry
            .path()
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| entry.path().to_path_buf());
        debug!(path = %rel.display(), kind = %kind, "found music file");

        grouped
            .entry(stem.to_lowercase())
            .or_insert_with(|| Song {
                title: title_from_stem(stem),
                files: Vec::new(),
            })
            .files
            .push(SongFile { path: rel, kind });
    }

    let mut songs: Vec<Song> = grouped.into_values().collect();
    for song in &mut songs {
        song.files
            .sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.path.cmp(&b.path)));
    }
    songs.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
    debug!(songs = songs.len(), root = %root.display(), "scan complete");
    Ok(songs)
}

/// Lowercase extension of `path` if it is a recognized music format.
pub fn music_kind(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    MUSIC_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Turn a file stem into a display title: underscores become spaces.
pub fn title_from_stem(stem: &str) -> String {
    stem.replace('_', " ").trim().to_string()
}

fn walk_error_into_io(e: walkdir::Error) -> io::Error {
    let msg = e.to_string();
    e.into_io_error().unwrap_or_else(|| io::Error::other(msg))
}

fn keep_entry(entry: &DirEntry, filter: Filter) -> bool {
    match filter {
        Filter::None => true,
        Filter::Hidden => {
            let hidden = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with('.'));
            if hidden {
                return false;
            }
            !(entry.file_type().is_dir() && entry.path().join(HIDE_MARKER).exists())
        }
    }
}
