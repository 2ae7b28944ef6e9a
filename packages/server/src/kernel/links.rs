//! Internal link insertion.
//!
//! Rewrites literal occurrences of already-published post titles into anchor
//! elements so new posts cross-link the existing ones.

use regex::{NoExpand, RegexBuilder};
use tracing::warn;

/// Title and published URL of an existing post, in the order the CMS
/// returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLink {
    pub title: String,
    pub url: String,
}

/// Wrap whole-word, case-insensitive occurrences of each known title in an
/// anchor pointing at its URL.
///
/// The replacement text uses the index's canonical title casing, not the
/// matched text. Titles are processed in index order; a title that is a
/// substring of an earlier insertion's anchor text will wrap again inside
/// it (see `test_later_title_can_wrap_inside_earlier_anchor`).
pub fn insert_internal_links(content: &str, links: &[PostLink]) -> String {
    let mut result = content.to_string();

    for link in links {
        if link.title.is_empty() {
            continue;
        }

        // `\b` only matches at a word/non-word transition, so it is anchored
        // on each side only when that edge of the title is a word character;
        // otherwise a title like "C++" could never match.
        let is_word_char = |c: char| c.is_alphanumeric() || c == '_';
        let mut pattern = String::new();
        if link.title.starts_with(is_word_char) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(&link.title));
        if link.title.ends_with(is_word_char) {
            pattern.push_str(r"\b");
        }

        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(e) => {
                warn!(title = %link.title, error = %e, "Skipping unmatchable post title");
                continue;
            }
        };

        let anchor = format!("<a href=\"{}\">{}</a>", link.url, link.title);
        result = re.replace_all(&result, NoExpand(&anchor)).into_owned();
    }

    result
}
