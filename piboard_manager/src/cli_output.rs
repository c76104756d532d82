//! Terminal formatting for board reports.

use colored::*;

const WARN_MARK: &str = "\u{26a0}";

/// Flag a detection problem, e.g. an unreadable info file or unknown board
pub fn warn(msg: &str) {
    println!("{} {}", WARN_MARK.yellow(), msg);
}

/// Title line above a group of board or core fields
pub fn header(msg: &str) {
    println!("{}", msg.cyan().bold());
}

/// One `Label: value` row of a report, indented under its header
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", format!("{}:", label).dimmed(), value);
}
