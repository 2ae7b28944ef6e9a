//! Boilerplate removal for raw blog content.
//!
//! LLM responses and copy-pasted drafts tend to carry the same filler
//! phrases; these are stripped by exact substring match before any other
//! processing.

/// Phrases removed from content wherever they occur. Matching is
/// case-sensitive and literal.
const UNWANTED_PHRASES: [&str; 2] = [
    "Here is the formatted blog post:",
    "Let me know if you need any further assistance!",
];

/// Remove known boilerplate phrases and trim surrounding whitespace.
pub fn clean_content(content: &str) -> String {
    let mut cleaned = content.to_string();
    for phrase in UNWANTED_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    cleaned.trim().to_string()
}
