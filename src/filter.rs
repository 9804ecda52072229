//! Search and tag filtering over the post collection.
//!
//! [`apply`] is the whole engine: given the collection and a [`FilterState`],
//! return the sub-sequence of posts matching both the free-text query and the
//! selected tag. Pure, deterministic, order-preserving — each state change
//! recomputes the view from scratch, no incremental updates.
//!
//! A post is search-matched when the trimmed, lowercased query is a substring
//! of its title, excerpt, or content (any one suffices; empty query matches
//! everything). It is tag-matched when the selected tag is [`TAG_ALL`] or a
//! member of its derived tags. The result is exactly the posts that are both.

use crate::store::Post;
use crate::tags;

/// Tag selection meaning "no tag filter".
pub const TAG_ALL: &str = "all";

/// The user's current search query and tag selection.
///
/// Created once with [`FilterState::default`] and mutated by its single
/// owner on every input event; never shared, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query. Matched case-insensitively; may be empty.
    pub query: String,
    /// Selected tag id, or [`TAG_ALL`].
    pub tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            tag: TAG_ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(query: impl Into<String>, tag: impl Into<String>) -> Self {
        FilterState {
            query: query.into(),
            tag: tag.into(),
        }
    }
}

/// Reduce the collection to the posts matching `state`, in input order.
pub fn apply<'a>(posts: &'a [Post], state: &FilterState) -> Vec<&'a Post> {
    let query = state.query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| search_matched(post, &query) && tag_matched(post, &state.tag))
        .collect()
}

fn search_matched(post: &Post, query: &str) -> bool {
    query.is_empty()
        || post.title.to_lowercase().contains(query)
        || post.excerpt.to_lowercase().contains(query)
        || post.content.to_lowercase().contains(query)
}

fn tag_matched(post: &Post, tag: &str) -> bool {
    tag == TAG_ALL || tags::classify(post).contains(&tag)
}

/// The lowercased text a post is searched against. The listing page embeds
/// this on each card so the in-browser filter is a plain substring check
/// against text normalized here, with the same fields in the same order.
pub fn search_haystack(post: &Post) -> String {
    format!("{} {} {}", post.title, post.excerpt, post.content).to_lowercase()
}
