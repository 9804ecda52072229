//! Content-based tag classification.
//!
//! Posts carry no tag field in the source JSON — tags are derived from the
//! text. Each known tag has a list of trigger keywords; a post gets the tag
//! iff any keyword appears as a substring of its lowercased title + content.
//!
//! This is a heuristic, not a precise classifier. Substring matching produces
//! false positives (a keyword embedded inside an unrelated word still
//! triggers), and that's accepted: recall over precision for a handful of
//! broad labels. Anything smarter (token boundaries, stemming) must keep
//! "any keyword substring present ⇒ tag present" so existing content keeps
//! its tags.
//!
//! The rule table is the single place to grow the tag universe.

use crate::store::Post;

/// One derived tag: stable identifier, display name, and the keywords that
/// trigger it.
pub struct TagRule {
    pub id: &'static str,
    pub display: &'static str,
    pub keywords: &'static [&'static str],
}

/// The full tag universe.
pub const RULES: &[TagRule] = &[TagRule {
    id: "cybersecurity",
    display: "Cybersecurity",
    keywords: &["vulnerability", "exploit"],
}];

/// Classify a post. Pure and total: never fails, returns zero or more tag
/// ids in rule-table order.
pub fn classify(post: &Post) -> Vec<&'static str> {
    let haystack = format!("{} {}", post.title, post.content).to_lowercase();
    RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.id)
        .collect()
}

/// Display name for a tag id. Unknown tags fall back to the raw identifier.
pub fn display_name(tag: &str) -> &str {
    RULES
        .iter()
        .find(|rule| rule.id == tag)
        .map(|rule| rule.display)
        .unwrap_or(tag)
}

/// Whether `tag` is a member of the known universe.
pub fn is_known(tag: &str) -> bool {
    RULES.iter().any(|rule| rule.id == tag)
}
