//! Error types shared by the scanner, renderer, and entry point.

use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenlistError>;

/// Everything that can go wrong while producing a song list.
#[derive(Debug, Error)]
pub enum GenlistError {
    #[error("input directory {} does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("input path {} is not a directory", .0.display())]
    InputNotDirectory(PathBuf),
    #[error("cannot write output {}: {source}", path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid arguments: {}", clap_summary(.0))]
    InvalidOption(#[from] clap::Error),
    #[error("failed to render song list: {0}")]
    Render(#[from] askama::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GenlistError {
    /// Short machine-friendly name of the variant, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            GenlistError::InputNotFound(_) => "input_not_found",
            GenlistError::InputNotDirectory(_) => "input_not_directory",
            GenlistError::OutputNotWritable { .. } => "output_not_writable",
            GenlistError::InvalidOption(_) => "invalid_option",
            GenlistError::Render(_) => "render",
            GenlistError::Io(_) => "io",
        }
    }
}

/// First line of a clap error without its `error: ` prefix.
///
/// clap renders usage and tips on following lines; those belong on a
/// terminal, not in a one-line status report.
fn clap_summary(e: &clap::Error) -> String {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            "help requested".to_string()
        }
        ErrorKind::DisplayVersion => "version requested".to_string(),
        _ => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default().trim();
            first.strip_prefix("error: ").unwrap_or(first).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};

    fn demo_command() -> Command {
        Command::new("genlist").arg(Arg::new("input").required(true))
    }

    #[test]
    fn input_not_found_names_the_path() {
        let e = GenlistError::InputNotFound(PathBuf::from("missing_dir"));
        assert_eq!(e.to_string(), "input directory missing_dir does not exist");
        assert_eq!(e.kind(), "input_not_found");
    }

    #[test]
    fn output_not_writable_keeps_source() {
        let e = GenlistError::OutputNotWritable {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("out.html"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn invalid_option_is_a_single_line() {
        let clap_err = demo_command()
            .try_get_matches_from(["genlist", "in", "--bogus"])
            .unwrap_err();
        let e = GenlistError::from(clap_err);
        let text = e.to_string();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text, "invalid arguments: unexpected argument '--bogus' found");
    }

    #[test]
    fn help_request_is_summarized() {
        let clap_err = demo_command()
            .try_get_matches_from(["genlist", "--help"])
            .unwrap_err();
        assert_eq!(
            GenlistError::from(clap_err).to_string(),
            "invalid arguments: help requested"
        );
    }
}
