//! Issue-key and pull-request link rewriting.

use regex_lite::Regex;

/// Rewrite a leading issue key into a markdown link.
///
/// Returns the rewritten line and the raw key, or the line unchanged and
/// `None` when no key is found. The key must sit at the very start of the
/// line: one uppercase letter, then uppercase letters/digits, a hyphen, then
/// digits (`ABC-123`, `AB12-7`).
///
/// A line that is nothing but a bare alphanumeric token of 1-10 characters,
/// optionally with a single trailing hyphen, is never treated as a key.
/// That guard keeps short acronym-like lines out of the tracker even when
/// they happen to fit the key shape.
pub fn rewrite_issue_key(line: &str, tracker_base_url: &str) -> (String, Option<String>) {
    let bare_token = Regex::new(r"^[A-Za-z0-9]{1,10}-?$").unwrap();
    if bare_token.is_match(line) {
        return (line.to_string(), None);
    }

    let key_pattern = Regex::new(r"^[A-Z][A-Z0-9]+-[0-9]+").unwrap();
    match key_pattern.find(line) {
        Some(m) => {
            let key = m.as_str();
            let rewritten = format!(
                "[{key}]({tracker_base_url}/browse/{key}){rest}",
                rest = &line[m.end()..]
            );
            (rewritten, Some(key.to_string()))
        }
        None => (line.to_string(), None),
    }
}

/// Rewrite every `(#123)` pull-request reference into an explicit link.
///
/// Links must be explicit, because when changelogs of several repositories
/// are combined into one release, relative references would point at the
/// wrong repo or not be links at all.
pub fn rewrite_pr_refs(text: &str, repo: &str) -> String {
    let pr_pattern = Regex::new(r"\(#([0-9]+)\)").unwrap();
    pr_pattern
        .replace_all(text, |caps: &regex_lite::Captures| {
            let number = &caps[1];
            format!("([#{number}](https://github.com/{repo}/pull/{number}))")
        })
        .into_owned()
}
