//! Post loading and lookup.
//!
//! The data source is a single JSON document: an array of post objects with
//! `id`, `title`, `date`, `excerpt`, and `content` fields, all strings. The
//! document is loaded once per build and never mutated afterwards; its array
//! order is the display order (newest first, by convention of whoever edits
//! the file).
//!
//! There is deliberately no schema validation beyond "it parses": missing
//! fields deserialize as empty strings and flow through rendering as-is.
//! `date` is a display string, never parsed as a calendar date. Post ids are
//! assumed unique but never enforced — on duplicates, lookup returns the
//! first match.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup failure for the post detail view. Both variants render the same
/// error page; the message differs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("No post ID specified")]
    MissingId,
    #[error("Blog post not found")]
    UnknownId(String),
}

/// A single blog article: metadata plus an HTML body.
///
/// `content` is a markup-bearing string. It is used both for rendering and
/// for search/classification, so tag markup leaks into the search haystack —
/// accepted, searches are over prose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
}

/// The full in-memory post collection, in source-file order.
pub type PostCollection = Vec<Post>;

/// How many related articles the detail page shows.
pub const RELATED_LIMIT: usize = 3;

/// Load the post collection from a JSON file.
pub fn load(path: &Path) -> Result<PostCollection, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let posts: PostCollection = serde_json::from_str(&raw)?;
    Ok(posts)
}

/// Look up a post by id. First match wins on duplicate ids.
pub fn find<'a>(posts: &'a [Post], id: Option<&str>) -> Result<&'a Post, NotFoundError> {
    let id = id.filter(|s| !s.is_empty()).ok_or(NotFoundError::MissingId)?;
    posts
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| NotFoundError::UnknownId(id.to_string()))
}

/// Related articles for a post: the first [`RELATED_LIMIT`] posts in
/// collection order, excluding the post itself. No similarity scoring,
/// collection order already approximates recency.
pub fn related<'a>(posts: &'a [Post], current_id: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.id != current_id)
        .take(RELATED_LIMIT)
        .collect()
}
