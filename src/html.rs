//! HTML rendering for song lists.
//!
//! The page lives in `templates/song_list.html` and is compiled by askama, so
//! every interpolated value is HTML-escaped by the template engine. `render`
//! only flattens songs into template rows and builds percent-encoded links.
//! Nothing here touches the filesystem, so tests and benches call it directly.

use std::path::{Component, Path};

use askama::Template;

use crate::scan::Song;

/// Presentation options for `render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page title and heading.
    pub title: String,
    /// Prefix each row with its 1-based position.
    pub line_numbers: bool,
    /// Prefix for every link, normally the input directory as given on the
    /// command line.
    pub link_base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: "Music List".to_string(),
            line_numbers: true,
            link_base: String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "song_list.html")]
struct SongListTemplate<'a> {
    title: &'a str,
    line_numbers: bool,
    rows: Vec<SongRow<'a>>,
}

struct SongRow<'a> {
    number: usize,
    title: &'a str,
    search_key: String,
    links: Vec<SongLink<'a>>,
}

struct SongLink<'a> {
    /// Already percent-encoded; contains only unreserved characters, `%` and `/`.
    href: String,
    kind: &'a str,
}

/// Render `songs` as a complete HTML document.
///
/// # Errors
/// Propagates askama render failures (in practice only formatter errors).
pub fn render(songs: &[Song], options: &RenderOptions) -> askama::Result<String> {
    let rows = songs
        .iter()
        .enumerate()
        .map(|(idx, song)| SongRow {
            number: idx + 1,
            title: &song.title,
            search_key: song.title.to_lowercase(),
            links: song
                .files
                .iter()
                .map(|file| SongLink {
                    href: link_for(&options.link_base, &file.path),
                    kind: &file.kind,
                })
                .collect(),
        })
        .collect();

    SongListTemplate {
        title: &options.title,
        line_numbers: options.line_numbers,
        rows,
    }
    .render()
}

/// Build a `/`-separated, percent-encoded link to `rel` under `base`.
pub fn link_for(base: &str, rel: &Path) -> String {
    let mut segments: Vec<String> = base
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();
    for comp in rel.components() {
        if let Component::Normal(part) = comp {
            segments.push(urlencoding::encode(&part.to_string_lossy()).into_owned());
        }
    }
    let joined = segments.join("/");
    if base.starts_with('/') {
        format!("/{}", joined)
    } else {
        joined
    }
}
