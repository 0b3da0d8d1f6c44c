// ============================================================================
// mp3rip-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Every user-facing line is built here so the symbols and colors stay
// consistent. Functions return `String`s instead of printing, which lets the
// interaction flow write them to any `Write` handle (stdout in the binary, a
// buffer in tests).
//
// Colors come from `console`, which disables them automatically when stdout
// is not a terminal or NO_COLOR is set.
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

// ---- External crate imports ----
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

// ---- Standard library imports ----
use std::fmt::Display;
use std::time::Duration;

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const WARNING_SYMBOL: &str = "!";
    pub const PROCESSING_SYMBOL: &str = "»";
    pub const HINT_SYMBOL: &str = "›";

    pub const BANNER_TITLE: &str = "Video to Audio Converter";
    pub const BANNER_RULE: &str = "==========================================";

    pub const STATUS_INDENT: &str = "  ";
    pub const STATUS_LABEL_WIDTH: usize = 8;

    pub const SPINNER_TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    pub const SPINNER_TICK_MS: u64 = 120;
}

use styling::*;

// ============================================================================
// TERMINAL COMPONENTS
// ============================================================================

/// The session banner, one entry per line.
pub fn banner() -> [String; 3] {
    [
        style(BANNER_RULE).cyan().to_string(),
        style(BANNER_TITLE).cyan().bold().to_string(),
        style(BANNER_RULE).cyan().to_string(),
    ]
}

pub fn success(message: impl Display) -> String {
    format!("{} {}", style(SUCCESS_SYMBOL).green().bold(), style(message).green())
}

pub fn error(message: impl Display) -> String {
    format!("{} {}", style(ERROR_SYMBOL).red().bold(), style(message).red())
}

pub fn warning(message: impl Display) -> String {
    format!("{} {}", style(WARNING_SYMBOL).yellow().bold(), style(message).yellow())
}

/// A step in progress, e.g. "» Working in: /videos".
pub fn processing(message: impl Display) -> String {
    format!("{} {}", style(PROCESSING_SYMBOL).cyan(), message)
}

/// Secondary guidance shown below an error or warning.
pub fn hint(message: impl Display) -> String {
    format!("{}{} {}", STATUS_INDENT, style(HINT_SYMBOL).dim(), style(message).dim())
}

/// An aligned `label: value` line with the value in bold.
pub fn status(label: &str, value: impl Display) -> String {
    format!(
        "{}{:<width$} {}",
        STATUS_INDENT,
        format!("{label}:"),
        style(value).bold(),
        width = STATUS_LABEL_WIDTH + 1
    )
}

/// A numbered menu line, e.g. "   3. clip.mp4 (12.3 MB)".
pub fn menu_item(number: usize, label: impl Display) -> String {
    format!("{}{}. {}", STATUS_INDENT, style(format!("{number:>2}")).bold(), label)
}

/// The text of an interactive question.
pub fn question(text: &str) -> String {
    style(text).bold().to_string()
}

pub fn farewell() -> String {
    style("Goodbye!").cyan().to_string()
}

/// Starts a spinner on stderr for the duration of a conversion.
///
/// indicatif hides the spinner when stderr is not a terminal.
pub fn start_spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        pb.set_style(spinner_style.tick_chars(SPINNER_TICKS));
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    pb
}
