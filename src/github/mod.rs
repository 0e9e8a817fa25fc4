//! GitHub API operations using octocrab.

pub mod compare;

pub use compare::{RawCommit, fetch_compare_commits};
