//! Commit-message transformation, classification and report rendering.

pub mod category;
pub mod entry;
pub mod links;
pub mod report;

pub use category::{Category, classify_issue};
pub use entry::{ChangelogEntry, build_entry, collect_entries};
pub use links::{rewrite_issue_key, rewrite_pr_refs};
pub use report::Report;
