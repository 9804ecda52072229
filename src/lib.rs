//! # emberlog
//!
//! A minimal static site generator for a personal blog and homepage. One
//! JSON file of posts in, one directory of plain HTML out: a hash-routed
//! homepage, a searchable article listing, and a page per post.
//!
//! # Architecture
//!
//! Three steps, with the pure logic kept out of the rendering layer so it
//! is testable without a filesystem or an HTML parser:
//!
//! ```text
//! 1. Load      blog-posts.json + pages/*.md  →  posts and sections in memory
//! 2. Derive    classification, filtering, reading time, TOC  (pure)
//! 3. Render    maud templates  →  dist/ (homepage, listing, post pages)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Post collection: JSON loading, id lookup, related articles |
//! | [`tags`] | Keyword-based tag classification and display names |
//! | [`filter`] | Search + tag filtering over the collection |
//! | [`reading`] | Reading-time estimation (listing and detail speeds) |
//! | [`toc`] | Table-of-contents extraction with anchor injection |
//! | [`router`] | Fragment-based page routing for the homepage |
//! | [`pages`] | Homepage section bodies from markdown files |
//! | [`share`] | Share-intent URL builders |
//! | [`contact`] | Contact-form POST to the configured mail endpoint |
//! | [`config`] | Flat `config.toml` loading with stock defaults |
//! | [`render`] | Maud templates for every generated page |
//! | [`site`] | Build orchestration — renders and writes the site |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Derived tags
//!
//! Posts carry no tag field. Tags are computed from the text by substring
//! matching against per-tag trigger keywords — a deliberately crude
//! classifier that never needs the content format to change when the tag
//! universe grows. See [`tags`] for the accepted trade-offs.
//!
//! ## Maud over template engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked templates, auto-escaped interpolation, no template files to ship.
//! Post bodies are the single `PreEscaped` pass-through since they are
//! authored HTML.
//!
//! ## Filtering happens in Rust, twice removed from the browser
//!
//! The listing page's live search runs in the browser, but the matching
//! semantics live here: cards are stamped with precomputed `data-search`
//! and `data-tags` attributes, so the embedded script is one substring
//! check with no duplicated normalization or classification logic.
//!
//! ## Degraded states over broken builds
//!
//! An unreadable post collection doesn't fail the build; the blog pages
//! render their "unable to load" state instead, and the CLI reports the
//! underlying error. A typo in the post file should never take down the
//! rest of the site.

pub mod config;
pub mod contact;
pub mod filter;
pub mod output;
pub mod pages;
pub mod reading;
pub mod render;
pub mod router;
pub mod share;
pub mod site;
pub mod store;
pub mod tags;
pub mod toc;

#[cfg(test)]
pub(crate) mod test_helpers;
