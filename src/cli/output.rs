//! CLI output formatting helpers.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Dual-format command output, selected by the global `--json` flag.
pub trait CommandOutput {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(data: &T, json_mode: bool) {
    if json_mode {
        println!("{}", data.to_json());
    } else {
        println!("{}", data.to_human());
    }
}

/// Spinner shown while an oracle request is in flight.
pub fn oracle_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn section_title(text: &str) -> String {
    style(text).bold().cyan().to_string()
}

pub fn dim(text: &str) -> String {
    style(text).dim().to_string()
}

pub fn error_line(text: &str) -> String {
    format!("{} {}", style("✗").red().bold(), style(text).red())
}

pub fn notice_line(text: &str) -> String {
    format!("{} {}", style("!").yellow().bold(), text)
}

pub fn success_line(text: &str) -> String {
    format!("{} {}", style("✓").green().bold(), text)
}
