//! # CLI Layer
//!
//! The terminal session is **one possible UI client** for the board. It is the only place
//! that reads stdin, writes stdout/stderr, or decides exit codes.
//!
//! A session is a loop over lines. Each line is parsed by clap into a [`SessionCommand`],
//! dispatched to [`BoardApi`], and the returned `CmdResult` is printed. A failing line
//! prints its error and the session carries on; when commands come from a pipe or a
//! script, the session exits non-zero at the end if any line failed.
//!
//! An empty line adds a note, the same as double-clicking an empty spot on a board.

use super::render::{print_board, print_messages};
use super::setup::{parse_line, session_help, Cli, SessionCommand};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use log::{debug, warn};
use stickies::api::{BoardApi, ConfigAction, CmdResult};
use stickies::clipboard::get_from_clipboard;
use stickies::config::{BoardConfig, KEYS};
use stickies::error::{Result, StickiesError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

struct AppContext {
    api: BoardApi,
    interactive: bool,
}

/// What the session loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (reader, interactive): (Box<dyn BufRead>, bool) = match &cli.script {
        Some(path) => (Box::new(BufReader::new(File::open(path)?)), false),
        None => (Box::new(io::stdin().lock()), io::stdin().is_terminal()),
    };

    let mut ctx = init_context(&cli, interactive)?;
    if ctx.interactive {
        println!(
            "{}",
            "Sticky notes board. Type `help` for commands, `quit` to leave.".dimmed()
        );
    }

    let failures = session(&mut ctx, reader)?;
    if failures > 0 && !ctx.interactive {
        return Err(StickiesError::Api(format!(
            "{} session command(s) failed",
            failures
        )));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli, interactive: bool) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);

    let api = match config_dir {
        Some(dir) => BoardApi::open(dir)?,
        None => {
            warn!("no config directory available, using defaults");
            BoardApi::new(BoardConfig::default(), None)
        }
    };

    Ok(AppContext { api, interactive })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "stickies", "stickies").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Runs commands from `reader` until it is exhausted or `quit`. Returns the failure count.
fn session(ctx: &mut AppContext, mut reader: Box<dyn BufRead>) -> Result<usize> {
    let mut failures = 0;
    let mut buf = Vec::new();

    loop {
        if ctx.interactive {
            print!("{} ", ">".bold());
            io::stdout().flush()?;
        }

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                failures += 1;
                eprintln!("{} line is not valid UTF-8: {}", "Error:".red(), e);
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        debug!("session line: {:?}", trimmed);
        let command = if trimmed.is_empty() {
            SessionCommand::Add { text: vec![] }
        } else {
            match parse_line(trimmed) {
                Ok(command) => command,
                Err(e) => {
                    failures += 1;
                    eprintln!("{}", e.render().to_string().trim_end());
                    continue;
                }
            }
        };

        match dispatch(ctx, command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                failures += 1;
                eprintln!("{} {}", "Error:".red(), e);
            }
        }
    }

    Ok(failures)
}

fn dispatch(ctx: &mut AppContext, command: SessionCommand) -> Result<Flow> {
    match command {
        SessionCommand::Add { text } => {
            let text = if text.is_empty() {
                None
            } else {
                Some(text.join(" "))
            };
            let result = ctx.api.add_note(text)?;
            finish_change(ctx, result);
        }
        SessionCommand::Edit { id, text } => {
            let result = ctx.api.update_text(id, text.join(" "))?;
            finish_change(ctx, result);
        }
        SessionCommand::Append { id, text } => {
            // Dropped text is appended verbatim; words typed here need a separator
            let needs_space = ctx
                .api
                .board()
                .get(id)
                .is_some_and(|n| !n.text.is_empty() && !n.text.ends_with(char::is_whitespace));
            let dropped = if needs_space {
                format!(" {}", text.join(" "))
            } else {
                text.join(" ")
            };
            let result = ctx.api.append_text(id, &dropped)?;
            finish_change(ctx, result);
        }
        SessionCommand::Paste { id } => {
            let dropped = get_from_clipboard()?;
            let result = ctx.api.append_text(id, &dropped)?;
            finish_change(ctx, result);
        }
        SessionCommand::Move { from, to } => {
            let result = ctx.api.move_note(from, to)?;
            finish_change(ctx, result);
        }
        SessionCommand::Drag { from, to } => {
            let result = ctx.api.drag_note(from, to)?;
            finish_change(ctx, result);
        }
        SessionCommand::Delete { ids } => {
            let result = ctx.api.delete_notes(&ids)?;
            finish_change(ctx, result);
        }
        SessionCommand::Show => {
            let result = ctx.api.list_notes()?;
            print_board(&result.listed_notes);
            print_messages(&result.messages);
        }
        SessionCommand::Export { path } => {
            let result = ctx.api.export_notes(path.as_deref())?;
            print_messages(&result.messages);
        }
        SessionCommand::Config { key, value } => handle_config(ctx, key, value)?,
        SessionCommand::Help => print!("{}", session_help()),
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Prints the outcome of a board change, and the board itself when a person is watching.
fn finish_change(ctx: &AppContext, result: CmdResult) {
    print_messages(&result.messages);
    if ctx.interactive && !result.has_problems() {
        print_board(ctx.api.notes());
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
