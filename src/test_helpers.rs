//! Shared test fixtures for the emberlog test suite.
//!
//! Provides post builders and a small canned collection so tests don't each
//! hand-assemble `Post` values.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let posts = sample_posts();
//! assert_eq!(posts[0].id, "zero-day-autopsy");
//!
//! let p = post_with_content("a", "Title", "<p>body</p>");
//! assert_eq!(p.excerpt, "");
//! ```

use crate::store::Post;

// =========================================================================
// Post builders
// =========================================================================

/// A post with only id and title set; the remaining fields stay empty,
/// matching what deserialization yields for sparse JSON entries.
pub fn post(id: &str, title: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        ..Post::default()
    }
}

/// A post with id, title, and authored HTML content.
pub fn post_with_content(id: &str, title: &str, content: &str) -> Post {
    Post {
        content: content.to_string(),
        ..post(id, title)
    }
}

// =========================================================================
// Canned collection
// =========================================================================

/// Four fully-populated posts in a fixed order. The first one carries a
/// classifier keyword so tag-dependent tests have at least one hit.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "zero-day-autopsy".to_string(),
            title: "Autopsy of a Zero-Day".to_string(),
            date: "March 3, 2025".to_string(),
            excerpt: "Tracing an exploit from crash dump to patched binary.".to_string(),
            content: "<p>The vulnerability hid in a length check that trusted \
                      the attacker's header.</p>"
                .to_string(),
        },
        Post {
            id: "sourdough-logbook".to_string(),
            title: "A Sourdough Logbook".to_string(),
            date: "March 18, 2025".to_string(),
            excerpt: "Twelve weeks of feeding the same jar of flour paste.".to_string(),
            content: "<p>The starter doubled overnight once the kitchen warmed up.</p>"
                .to_string(),
        },
        Post {
            id: "static-site-pipeline".to_string(),
            title: "Rebuilding the Site Pipeline".to_string(),
            date: "April 2, 2025".to_string(),
            excerpt: "Swapping a pile of shell scripts for one binary.".to_string(),
            content: "<p>Every page now renders from the same template pass.</p>".to_string(),
        },
        Post {
            id: "desk-setup-notes".to_string(),
            title: "Desk Setup Notes".to_string(),
            date: "April 20, 2025".to_string(),
            excerpt: "Small changes that made long days at the keyboard easier.".to_string(),
            content: "<p>The monitor arm mattered more than the chair did.</p>".to_string(),
        },
    ]
}
