//! CI output channel formatting.
//!
//! The workflow runner parses one `name::value` record per line, so the
//! multi-line report is folded onto a single line before printing.

/// Replacement for `\n` in workflow output records, so multiline values
/// survive the single-line channel.
const NEWLINE_SENTINEL: &str = "%0A";

/// Escape embedded newlines with the workflow sentinel.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', NEWLINE_SENTINEL)
}

/// Format a single-line workflow output record.
pub fn set_output_record(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, escape_newlines(value))
}
