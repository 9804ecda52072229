//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout. Entities follow a
//! two-level pattern: a header line with a positional index and title, then
//! indented context lines (`Date:`, `Tags:`).

use crate::filter::FilterState;
use crate::reading::{self, LIST_WPM};
use crate::render;
use crate::site::BuildSummary;
use crate::store::Post;
use crate::tags;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn post_lines(index: usize, post: &Post, out: &mut Vec<String>) {
    out.push(format!(
        "{} {} ({} min read)",
        format_index(index),
        post.title,
        reading::reading_time(&post.content, LIST_WPM)
    ));
    if !post.date.is_empty() {
        out.push(format!("    Date: {}", post.date));
    }
    let post_tags = tags::classify(post);
    if !post_tags.is_empty() {
        let names: Vec<&str> = post_tags.iter().map(|t| tags::display_name(t)).collect();
        out.push(format!("    Tags: {}", names.join(", ")));
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(posts: &[Post]) -> Vec<String> {
    let mut out = Vec::new();
    out.push("Posts".to_string());
    if posts.is_empty() {
        out.push(format!("    {}", render::NO_POSTS));
        return out;
    }
    for (idx, post) in posts.iter().enumerate() {
        post_lines(idx + 1, post, &mut out);
    }
    let tagged = posts.iter().filter(|p| !tags::classify(p).is_empty()).count();
    out.push(String::new());
    out.push(format!("{} posts, {} tagged", posts.len(), tagged));
    out
}

pub fn print_check_output(posts: &[Post]) {
    for line in format_check_output(posts) {
        println!("{line}");
    }
}

// ============================================================================
// search
// ============================================================================

pub fn format_search_output(results: &[&Post], total: usize, state: &FilterState) -> Vec<String> {
    let mut out = Vec::new();
    if results.is_empty() {
        out.push(render::NO_MATCHES.to_string());
        return out;
    }
    for (idx, post) in results.iter().enumerate() {
        post_lines(idx + 1, post, &mut out);
    }
    out.push(String::new());
    let criteria = match (state.query.trim().is_empty(), state.tag.as_str()) {
        (true, crate::filter::TAG_ALL) => String::new(),
        (false, crate::filter::TAG_ALL) => format!(" for \"{}\"", state.query.trim()),
        (true, tag) => format!(" tagged {tag}"),
        (false, tag) => format!(" for \"{}\" tagged {tag}", state.query.trim()),
    };
    out.push(format!(
        "{} of {} articles match{criteria}",
        results.len(),
        total
    ));
    out
}

pub fn print_search_output(results: &[&Post], total: usize, state: &FilterState) {
    for line in format_search_output(results, total, state) {
        println!("{line}");
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut out = Vec::new();
    for path in &summary.written {
        out.push(path.clone());
    }
    out.push(String::new());
    if let Some(err) = &summary.load_error {
        out.push(format!("Warning: posts not loaded ({err})"));
        out.push("Built degraded blog pages".to_string());
    }
    out.push(format!(
        "Generated {} pages ({} posts)",
        summary.written.len(),
        summary.post_count
    ));
    out
}

pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{line}");
    }
}
