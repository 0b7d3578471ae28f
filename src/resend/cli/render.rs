//! Turning `CmdResult`s into terminal output.
//!
//! Plain mode: the key table (if any) followed by the messages, colored by
//! level. `--json` mode: the whole result as one JSON document. Everything
//! goes to stdout; errors are printed by [`super::exit`].

use colored::Colorize;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use resend::commands::{CmdMessage, CmdResult, KeyListing, MessageLevel};

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let line = match m.level {
                MessageLevel::Info => m.content.dimmed().to_string(),
                MessageLevel::Success => format!("Success: {}", m.content).green().to_string(),
                MessageLevel::Warning => m.content.yellow().to_string(),
                MessageLevel::Error => format!("Error: {}", m.content).red().to_string(),
            };
            format!("{line}\n")
        })
        .collect()
}

pub fn render_key_table(keys: &[KeyListing]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Token").add_attribute(Attribute::Bold),
            Cell::new("Selected").add_attribute(Attribute::Bold),
        ]);

    for key in keys {
        let selected = if key.selected {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![Cell::new(&key.name), Cell::new(&key.token), selected]);
    }

    table.to_string()
}

pub fn render_json(result: &CmdResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

pub fn print_result(result: &CmdResult, json: bool) {
    if json {
        println!("{}", render_json(result));
        return;
    }
    if !result.listed_keys.is_empty() {
        println!("{}", render_key_table(&result.listed_keys));
    }
    let messages = render_messages(&result.messages);
    if !messages.is_empty() {
        print!("{messages}");
    }
}

/// True when the result reports a failure the process should exit 1 for.
pub fn has_errors(result: &CmdResult) -> bool {
    result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Error)
}
