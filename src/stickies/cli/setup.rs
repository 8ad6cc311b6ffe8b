use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stickies", bin_name = "stickies", version = get_version())]
#[command(
    about = "A sticky-notes board in your terminal",
    long_about = "Starts an in-memory sticky-notes board and reads one command per line. \
                  Notes are laid out in a 3-column grid and are gone when the session ends; \
                  use `export` to keep them."
)]
pub struct Cli {
    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Read session commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]...",
    help_template = "{usage-heading} {usage}\n\n{all-args}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a note, optionally with text (an empty line also adds one)
    #[command(alias = "n")]
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Note id
        id: u32,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Append text to a note, as if dropped onto it
    #[command(alias = "a")]
    Append {
        /// Note id
        id: u32,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Append the clipboard contents to a note
    Paste {
        /// Note id
        id: u32,
    },

    /// Move the note at one board position to another (positions start at 1)
    #[command(alias = "mv")]
    Move { from: usize, to: usize },

    /// Drag the note at one position to another, one cell at a time
    Drag { from: usize, to: usize },

    /// Delete notes by id
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Print the board
    #[command(aliases = ["ls", "list"])]
    Show,

    /// Export the board (.xlsx or .json; defaults to the configured export file)
    Export { path: Option<PathBuf> },

    /// Get or set configuration (export-file, export-format, sheet-name)
    Config {
        key: Option<String>,
        value: Option<String>,
    },

    /// Show this help
    #[command(alias = "?")]
    Help,

    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

/// Parses one session line. Text arguments are rejoined with single spaces.
pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
    let tokens = line.split_whitespace();
    SessionLine::try_parse_from(tokens).map(|parsed| parsed.command)
}

pub fn session_help() -> String {
    let mut cmd = SessionLine::command();
    cmd.render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_verifies() {
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn parses_add_with_and_without_text() {
        assert_eq!(
            parse_line("add").unwrap(),
            SessionCommand::Add { text: vec![] }
        );
        assert_eq!(
            parse_line("n buy  milk").unwrap(),
            SessionCommand::Add {
                text: vec!["buy".into(), "milk".into()]
            }
        );
    }

    #[test]
    fn edit_text_may_start_with_dash() {
        assert_eq!(
            parse_line("edit 2 - item").unwrap(),
            SessionCommand::Edit {
                id: 2,
                text: vec!["-".into(), "item".into()]
            }
        );
    }

    #[test]
    fn parses_moves_and_deletes() {
        assert_eq!(
            parse_line("mv 1 4").unwrap(),
            SessionCommand::Move { from: 1, to: 4 }
        );
        assert_eq!(
            parse_line("rm 3 5").unwrap(),
            SessionCommand::Delete { ids: vec![3, 5] }
        );
        assert!(parse_line("delete").is_err());
        assert!(parse_line("move one two").is_err());
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(parse_line("ls").unwrap(), SessionCommand::Show);
        assert_eq!(parse_line("q").unwrap(), SessionCommand::Quit);
        assert_eq!(parse_line("?").unwrap(), SessionCommand::Help);
    }

    #[test]
    fn unknown_command_fails() {
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn help_lists_commands() {
        let help = session_help();
        assert!(help.contains("drag"));
        assert!(help.contains("export"));
    }
}
