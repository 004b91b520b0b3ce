//! Demo harness: generates the song list for `test_music` twice, with and
//! without line numbers, reporting each result. Always exits 0 once the
//! scenarios have run.
use std::io;

use clap::Parser;
use genlist_lib::harness::{default_scenarios, run_scenarios};
use genlist_lib::{logging, run_from_args};

/// Run the stock genlist scenarios and report each outcome.
#[derive(Parser, Debug)]
#[command(name = "genlist-demo", version, about, long_about = None)]
struct DemoCli {
    /// Directory containing music files
    #[arg(default_value = "test_music")]
    input: String,
}

fn main() {
    let cli = DemoCli::parse();
    logging::init();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_scenarios(&default_scenarios(&cli.input), &mut out, |args| {
        run_from_args(args)
    }) {
        eprintln!("warning: failed to write status: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_input() {
        let cli = DemoCli::try_parse_from(["genlist-demo"]).unwrap();
        assert_eq!(cli.input, "test_music");
    }

    #[test]
    fn test_custom_input() {
        let cli = DemoCli::try_parse_from(["genlist-demo", "songs"]).unwrap();
        assert_eq!(cli.input, "songs");
    }

    #[test]
    fn test_help_is_handled_by_demo() {
        let err = DemoCli::try_parse_from(["genlist-demo", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let err = DemoCli::try_parse_from(["genlist-demo", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
