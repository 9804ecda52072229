//! Reading-time estimation.
//!
//! Word count splits on single spaces, an approximation rather than real
//! tokenization. Markup and runs of whitespace inflate the count slightly.
//!
//! The two views use different speeds: 200 wpm on listing cards, 150 wpm on
//! the article page. The mismatch shipped long ago and is kept on purpose so
//! published estimates don't shift under existing posts.

/// Words per minute used for listing cards.
pub const LIST_WPM: usize = 200;

/// Words per minute used for the article detail page.
pub const DETAIL_WPM: usize = 150;

/// Approximate word count: segments between single spaces. Empty content
/// counts as one word (one empty segment), matching the historical behavior.
pub fn word_count(content: &str) -> usize {
    content.split(' ').count()
}

/// Estimated minutes to read `content` at `wpm`, rounded up. Never zero.
pub fn reading_time(content: &str, wpm: usize) -> usize {
    word_count(content).div_ceil(wpm)
}
