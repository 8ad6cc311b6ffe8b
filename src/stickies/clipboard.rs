//! Reading text from the system clipboard.
//!
//! The terminal has no drag-and-drop, so the session's `paste` command stands in for
//! dropping text onto a note: whatever is on the clipboard gets appended to the note.

use crate::error::{Result, StickiesError};
use std::process::Command;

#[cfg(target_os = "macos")]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[("pbpaste", &[])];

#[cfg(target_os = "linux")]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];

#[cfg(target_os = "windows")]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[("powershell", &["-command", "Get-Clipboard"])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[];

/// Reads the clipboard, trying each platform tool in turn.
pub fn get_from_clipboard() -> Result<String> {
    if PASTE_COMMANDS.is_empty() {
        return Err(StickiesError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = String::new();
    for (program, args) in PASTE_COMMANDS {
        match Command::new(program).args(*args).output() {
            Ok(output) if output.status.success() => {
                let text = String::from_utf8_lossy(&output.stdout);
                return Ok(normalize_dropped_text(&text));
            }
            Ok(output) => last_error = format!("{} exited with {}", program, output.status),
            Err(e) => last_error = format!("Failed to run {}: {}", program, e),
        }
    }

    Err(StickiesError::Api(format!(
        "Could not read clipboard ({})",
        last_error
    )))
}

/// Normalizes line endings of text dropped onto a note.
pub fn normalize_dropped_text(text: &str) -> String {
    text.replace("\r\n", "\n")
}
