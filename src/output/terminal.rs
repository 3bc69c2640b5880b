//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::HostStatus;
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Status colored by how it affects the wizard.
pub fn colored_status(status: HostStatus) -> ColoredString {
    let text = status.as_str();
    match status {
        HostStatus::Known | HostStatus::Installed => text.green(),
        HostStatus::Insufficient | HostStatus::PendingForInput | HostStatus::Disconnected => {
            text.yellow()
        }
        HostStatus::Error | HostStatus::Cancelled => text.on_red(),
        _ => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_colored_status_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(colored_status(HostStatus::Error).to_string(), "error");
        assert_eq!(colored_status(HostStatus::Known).to_string(), "known");
    }
}
