//! Grouped markdown report rendering.

use crate::changelog::category::Category;
use crate::changelog::entry::ChangelogEntry;

/// The final changelog: a header line plus three ordered buckets.
#[derive(Debug, Clone)]
pub struct Report {
    header: String,
    improvements: Vec<String>,
    bugs: Vec<String>,
    miscellaneous: Vec<String>,
}

impl Report {
    /// Partition entries into buckets, preserving their relative order.
    pub fn new(
        repo: &str,
        previous_tag: &str,
        current_tag: &str,
        entries: Vec<ChangelogEntry>,
    ) -> Self {
        let mut report = Self {
            header: generate_header(repo, previous_tag, current_tag),
            improvements: Vec::new(),
            bugs: Vec::new(),
            miscellaneous: Vec::new(),
        };

        for entry in entries {
            match entry.category {
                Category::Improvement => report.improvements.push(entry.text),
                Category::Bug => report.bugs.push(entry.text),
                Category::Miscellaneous => report.miscellaneous.push(entry.text),
            }
        }

        report
    }

    /// True when no bucket has entries.
    pub fn is_empty(&self) -> bool {
        self.improvements.is_empty() && self.bugs.is_empty() && self.miscellaneous.is_empty()
    }

    /// Render the full markdown report.
    ///
    /// Header, blank line, then each non-empty bucket under its heading in
    /// fixed order (Improvements, Bugs, Miscellaneous). With nothing to
    /// report, the body is the literal `No significant changes.` line.
    pub fn render(&self) -> String {
        let mut out = self.header.clone();
        out.push_str("\n\n");

        if self.is_empty() {
            out.push_str("No significant changes.");
            return out;
        }

        let buckets = [
            (Category::Improvement.heading(), &self.improvements),
            (Category::Bug.heading(), &self.bugs),
            (Category::Miscellaneous.heading(), &self.miscellaneous),
        ];

        let sections: Vec<String> = buckets
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(heading, lines)| format!("### {}\n{}", heading, lines.join("\n")))
            .collect();

        out.push_str(&sections.join("\n\n"));
        out
    }
}

/// One line naming the repository and both tags, all linked.
fn generate_header(repo: &str, previous_tag: &str, current_tag: &str) -> String {
    format!(
        "[{repo}](https://github.com/{repo}) changes between \
         [{previous_tag}](https://github.com/{repo}/releases/tag/{previous_tag}) and \
         [{current_tag}](https://github.com/{repo}/releases/tag/{current_tag})"
    )
}
