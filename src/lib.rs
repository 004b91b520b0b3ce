//! Genlist library crate
//!
//! This crate provides the core functionality for the `genlist` CLI, which
//! turns a directory of music files into a searchable HTML song list, and for
//! the `genlist-demo` harness that drives it. It is organized into small
//! modules: `scan` (directory walking and grouping), `html` (page rendering),
//! `harness` (scenario runner), `error`, and `logging`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the `genlist` binary.
//! - `run_from_args()` — parse an explicit argument vector and generate.
//! - `run_with()` — generate from an already-built `GenlistConfig`.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod error;
pub mod harness;
pub mod html;
pub mod logging;
pub mod scan;

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;

pub use crate::error::{GenlistError, Result};
use crate::html::{RenderOptions, render};
use crate::scan::{Filter, scan};

/// Command-line surface of `genlist`. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(name = "genlist", author, version, about, long_about = None)]
struct Cli {
    /// Directory containing music files
    input: PathBuf,

    /// HTML file to write
    output: PathBuf,

    /// Do not prefix each song with its line number
    #[arg(long = "no-line-numbers", action = ArgAction::SetTrue)]
    no_line_numbers: bool,

    /// Which files to leave out: none, hidden
    #[arg(long = "filter", value_enum, default_value_t = Filter::Hidden)]
    filter: Filter,

    /// Page title
    #[arg(long = "title", default_value = "Music List")]
    title: String,
}

/// Everything `run_with` needs to produce one song list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenlistConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub line_numbers: bool,
    pub filter: Filter,
    pub title: String,
}

impl GenlistConfig {
    /// Config with default options: line numbers on, hidden files filtered.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        GenlistConfig {
            input: input.into(),
            output: output.into(),
            line_numbers: true,
            filter: Filter::default(),
            title: "Music List".to_string(),
        }
    }
}

impl Cli {
    fn into_config(self) -> GenlistConfig {
        GenlistConfig {
            input: self.input,
            output: self.output,
            line_numbers: !self.no_line_numbers,
            filter: self.filter,
            title: self.title,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub songs: usize,
    pub files: usize,
}

/// Parse a command-line-shaped vector (`[program, INPUT, OUTPUT, flags...]`).
///
/// # Errors
/// `InvalidOption` for an empty vector, unknown flags, or missing
/// positionals. Help and version requests also surface here as clap errors.
pub fn parse_args<I, T>(args: I) -> Result<GenlistConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(cli.into_config())
}

/// Scan `config.input`, render it, and write `config.output`.
///
/// Returns a `Summary` on success. The output file is only created once the
/// scan has succeeded, so a bad input directory never leaves an empty file
/// behind.
pub fn run_with(config: &GenlistConfig) -> Result<Summary> {
    let songs = scan(&config.input, config.filter)?;
    let options = RenderOptions {
        title: config.title.clone(),
        line_numbers: config.line_numbers,
        link_base: config.input.to_string_lossy().into_owned(),
    };
    let page = render(&songs, &options)?;

    let not_writable = |source| GenlistError::OutputNotWritable {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(not_writable)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(page.as_bytes()).map_err(not_writable)?;
    writer.flush().map_err(not_writable)?;

    let summary = Summary {
        output: config.output.clone(),
        songs: songs.len(),
        files: songs.iter().map(|s| s.files.len()).sum(),
    };
    info!(
        output = %summary.output.display(),
        songs = summary.songs,
        files = summary.files,
        line_numbers = config.line_numbers,
        "wrote song list"
    );
    Ok(summary)
}

/// Parse `args` and generate. This is the entry point the harness drives.
pub fn run_from_args<I, T>(args: I) -> Result<Summary>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = parse_args(args)?;
    run_with(&config)
}

/// Run the Genlist CLI.
///
/// Parses `std::env::args`, generates the song list, and prints a one-line
/// summary. Argument errors go through clap (usage on stderr, exit code 2;
/// `--help` and `--version` exit 0). Any other error is printed to stderr and
/// exits with code 1.
///
/// Example:
///
/// ```no_run
/// genlist_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    logging::init();
    match run_from_args(std::env::args_os()) {
        Ok(summary) => println!(
            "Wrote {} songs ({} files) to {}",
            summary.songs,
            summary.files,
            summary.output.display()
        ),
        Err(GenlistError::InvalidOption(e)) => e.exit(),
        Err(e) => {
            tracing::error!(kind = e.kind(), "generation failed");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cfg = parse_args(["genlist", "test_music", "out.html"]).unwrap();
        assert_eq!(cfg, GenlistConfig::new("test_music", "out.html"));
    }

    #[test]
    fn test_parse_no_line_numbers() {
        let cfg = parse_args([
            "genlist",
            "test_music",
            "out.html",
            "--no-line-numbers",
            "--filter",
            "none",
            "--title",
            "Tuesday Songs",
        ])
        .unwrap();
        assert!(!cfg.line_numbers);
        assert_eq!(cfg.filter, Filter::None);
        assert_eq!(cfg.title, "Tuesday Songs");
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        let err = parse_args(["genlist", "in", "out.html", "--bogus"]).unwrap_err();
        assert!(matches!(err, GenlistError::InvalidOption(_)));
    }

    #[test]
    fn test_parse_rejects_missing_output() {
        let err = parse_args(["genlist", "in"]).unwrap_err();
        assert_eq!(err.kind(), "invalid_option");
    }

    #[test]
    fn test_usage_errors_exit_with_clap_status() {
        let Err(GenlistError::InvalidOption(e)) = parse_args(["genlist", "in", "out.html", "-x"])
        else {
            panic!("expected a usage error");
        };
        assert_eq!(e.exit_code(), 2);

        let Err(GenlistError::InvalidOption(help)) = parse_args(["genlist", "--help"]) else {
            panic!("expected a help request");
        };
        assert_eq!(help.exit_code(), 0);
    }

    #[test]
    fn test_harness_reports_bad_flag_on_one_line() {
        let scenario = harness::Scenario::new(
            "bad flag",
            vec!["genlist".into(), "in".into(), "out.html".into(), "--bogus".into()],
            "out.html",
        );
        let mut buf = Vec::new();
        let outcome =
            harness::run_scenario(&scenario, &mut buf, &mut |args: &[String]| run_from_args(args))
                .unwrap();
        assert!(!outcome.is_generated());
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "bad flag\n✗ Error: invalid arguments: unexpected argument '--bogus' found\n"
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        let empty: [&str; 0] = [];
        assert!(parse_args(empty).is_err());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.html");
        let cfg = GenlistConfig::new(dir.path().join("missing"), &out);
        let err = run_with(&cfg).unwrap_err();
        assert!(matches!(err, GenlistError::InputNotFound(_)));
        assert!(!out.exists());
    }
}
