use colored::Colorize;
use stickies::api::{CmdMessage, MessageLevel};
use stickies::model::{Note, GRID_COLUMNS};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CELL_WIDTH: usize = 28;
const TEXT_LINES: usize = 4;
const GUTTER: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_board(notes: &[Note]) {
    print!("{}", render_board(notes));
}

/// Renders notes as a grid of boxed cells, `GRID_COLUMNS` per row.
///
/// Each cell shows the note's board position (used by `move`/`drag`), its title, and up
/// to `TEXT_LINES` wrapped lines of text.
pub(super) fn render_board(notes: &[Note]) -> String {
    if notes.is_empty() {
        return format!("{}\n", "(no notes)".dimmed());
    }

    let border = format!("+{}+", "-".repeat(CELL_WIDTH - 2));
    let mut out = String::new();

    for (row_index, row) in notes.chunks(GRID_COLUMNS).enumerate() {
        let cells: Vec<Vec<String>> = row
            .iter()
            .enumerate()
            .map(|(i, note)| cell_lines(row_index * GRID_COLUMNS + i + 1, note))
            .collect();

        push_row(&mut out, &vec![border.clone(); cells.len()]);
        for line in 0..TEXT_LINES + 1 {
            let parts: Vec<String> = cells.iter().map(|c| c[line].clone()).collect();
            push_row(&mut out, &parts);
        }
        push_row(&mut out, &vec![border.clone(); cells.len()]);
    }

    out
}

fn push_row(out: &mut String, parts: &[String]) {
    out.push_str(parts.join(GUTTER).trim_end());
    out.push('\n');
}

fn cell_lines(position: usize, note: &Note) -> Vec<String> {
    let inner = CELL_WIDTH - 4;
    let mut lines = Vec::with_capacity(TEXT_LINES + 1);

    let heading = format!("#{} {}", position, note.title());
    lines.push(boxed(&heading, inner, |s| s.bold().to_string()));

    let mut body = wrap_to_width(&note.text, inner);
    if body.len() > TEXT_LINES {
        body.truncate(TEXT_LINES);
        let last = truncate_to_width(&format!("{}…", body[TEXT_LINES - 1]), inner);
        body[TEXT_LINES - 1] = last;
    }
    body.resize(TEXT_LINES, String::new());

    for line in body {
        lines.push(boxed(&line, inner, |s| s.to_string()));
    }
    lines
}

fn boxed(content: &str, inner: usize, style: impl Fn(&str) -> String) -> String {
    let padding = inner.saturating_sub(content.width());
    format!("| {}{} |", style(content), " ".repeat(padding))
}

/// Wraps text on existing line breaks, then hard-wraps each line at `width` columns.
pub(super) fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for c in source.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        lines.push(current);
    }
    lines
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
