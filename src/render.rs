//! HTML rendering.
//!
//! All pages are generated with [maud](https://maud.lambda.xyz/) — type-safe
//! compile-time templates with automatic escaping, same trade as hand-writing
//! HTML but checked by the compiler. Post bodies are the one exception: they
//! are authored HTML and pass through `PreEscaped`.
//!
//! ## Generated Pages
//!
//! - **Homepage** (`/index.html`): the five hash-routed sections with one
//!   visible at a time; section bodies come from `content/pages/*.md`
//! - **Listing** (`/blog/index.html`): featured article plus the card grid,
//!   with the search box and tag chips
//! - **Article pages** (`/blog/posts/{id}.html`): full body, reading time,
//!   tag badges, table of contents, share links, related articles
//! - **Error page** (`/404.html`): the single degraded state for unknown
//!   article URLs
//!
//! ## Where the logic lives
//!
//! Rendering is a thin projection. Classification, filtering, reading time,
//! TOC extraction and routing are computed by their own modules and this one
//! only formats the results. The listing's live search works the same way:
//! each card carries `data-search` and `data-tags` attributes precomputed by
//! [`filter::search_haystack`] and [`tags::classify`], so the embedded
//! JavaScript never re-implements the predicate — it does one substring
//! check against Rust-normalized text.
//!
//! ## Empty states
//!
//! Three distinct ones, with distinct wording: an empty collection ("No
//! posts available"), a filter with no matches ("No articles found matching
//! your search."), and a failed post load ("Unable to load blog posts.").

use crate::config::SiteConfig;
use crate::filter;
use crate::reading::{self, DETAIL_WPM, LIST_WPM};
use crate::router::PageId;
use crate::share;
use crate::store::{self, Post};
use crate::tags;
use crate::toc;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Shown when the active filter matches no posts.
pub const NO_MATCHES: &str = "No articles found matching your search.";
/// Shown when the collection itself is empty.
pub const NO_POSTS: &str = "No posts available";

// ============================================================================
// Document scaffold
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS_STATIC)) }
            }
            body class=[body_class] {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Masthead shared by the blog pages: site title linking home, plus a
/// back link into the given target.
fn blog_header(config: &SiteConfig, back_href: &str, back_label: &str) -> Markup {
    html! {
        header.site-header {
            a.masthead href=(back_href) { (config.title) }
            a.nav-link href=(back_href) { (back_label) }
        }
    }
}

fn min_read(content: &str, wpm: usize) -> String {
    format!("{} min read", reading::reading_time(content, wpm))
}

fn post_meta(post: &Post, wpm: usize) -> Markup {
    html! {
        div.post-meta {
            span.post-date { "📅 " (post.date) }
            span.post-read-time { "⏱️ " (min_read(&post.content, wpm)) }
        }
    }
}

// ============================================================================
// Listing page
// ============================================================================

/// Renders a single post card for the listing grid.
///
/// The `data-search` / `data-tags` attributes feed the in-browser filter;
/// they hold exactly what [`filter::apply`] would match against.
fn post_card(post: &Post) -> Markup {
    let tags = tags::classify(post).join(" ");
    html! {
        a.post-card
            href={ "posts/" (post.id) ".html" }
            data-search=(filter::search_haystack(post))
            data-tags=(tags)
        {
            h3.post-title { (post.title) }
            (post_meta(post, LIST_WPM))
            p.post-excerpt { (post.excerpt) }
            span.read-more-btn { "Read More →" }
        }
    }
}

fn featured_card(post: &Post) -> Markup {
    html! {
        div.featured-post {
            div.featured-badge { "⭐ Featured Article" }
            h3.post-title { (post.title) }
            (post_meta(post, LIST_WPM))
            p.post-excerpt { (post.excerpt) }
            a.read-more-btn href={ "posts/" (post.id) ".html" } { "Read Full Article →" }
        }
    }
}

/// Renders the card grid for an already-filtered sequence, or the no-match
/// state when it is empty. Kept separate from [`listing`] so filter results
/// can be rendered (and tested) without the page chrome.
pub fn cards(filtered: &[&Post]) -> Markup {
    html! {
        @if filtered.is_empty() {
            div.no-results { (NO_MATCHES) }
        } @else {
            @for post in filtered {
                (post_card(post))
            }
        }
    }
}

/// Renders the tag filter chips: "All" plus the full tag universe.
fn tag_chips() -> Markup {
    html! {
        div.tag-filters {
            button.tag-filter.active data-tag=(filter::TAG_ALL) { "All" }
            @for rule in tags::RULES {
                button.tag-filter data-tag=(rule.id) { (rule.display) }
            }
        }
    }
}

/// Renders the blog listing page.
pub fn listing(config: &SiteConfig, posts: &[Post]) -> Markup {
    let all = filter::apply(posts, &filter::FilterState::default());
    let content = html! {
        (blog_header(config, "../index.html", "← Home"))
        main.blog-page {
            div.blog-controls {
                input #searchInput.search-input type="search"
                    placeholder="Search articles..." autocomplete="off";
                (tag_chips())
                div.blog-stats {
                    span id="totalPosts" class="stat-number" { (posts.len()) }
                    span.stat-label { " articles" }
                }
            }
            @if posts.is_empty() {
                div.loading { (NO_POSTS) }
            } @else {
                @if let Some(latest) = posts.first() {
                    (featured_card(latest))
                }
                div #postsGrid.posts-grid {
                    (cards(&all))
                }
            }
        }
    };
    base_document(&format!("{} Blog", config.title), None, content)
}

/// Renders the degraded listing shown when the post collection failed to
/// load. Replaces the grid entirely — no stale or partial content.
pub fn listing_error(config: &SiteConfig) -> Markup {
    let content = html! {
        (blog_header(config, "../index.html", "← Home"))
        main.blog-page {
            div.error-message {
                h3 { "Oops! Something went wrong" }
                p { "Unable to load blog posts. Please try again later." }
            }
        }
    };
    base_document(&format!("{} Blog", config.title), None, content)
}

// ============================================================================
// Article page
// ============================================================================

/// Renders the article page for `requested_id`, or the error page when the
/// id is missing or unknown.
pub fn post_page(config: &SiteConfig, posts: &[Post], requested_id: Option<&str>) -> Markup {
    match store::find(posts, requested_id) {
        Ok(post) => article(config, posts, post),
        Err(err) => error_page(config, &err.to_string()),
    }
}

fn article(config: &SiteConfig, posts: &[Post], post: &Post) -> Markup {
    // ≥3 headings: anchor ids go into the body and the TOC links to them.
    let (body, toc_entries) = match toc::build(&post.content) {
        Some((anchored, entries)) => (anchored, Some(entries)),
        None => (post.content.clone(), None),
    };
    let post_tags = tags::classify(post);
    let related = store::related(posts, &post.id);
    let share_url = config.absolute_url(&format!("blog/posts/{}.html", post.id));

    let content = html! {
        (blog_header(config, "../index.html", "← Back to blog"))
        main.article-page {
            article {
                header.article-header {
                    h1.post-title { (post.title) }
                    (post_meta(post, DETAIL_WPM))
                    @if !post_tags.is_empty() {
                        div.post-tags {
                            @for tag in &post_tags {
                                span.tag { (tags::display_name(tag)) }
                            }
                        }
                    }
                }
                @if let Some(entries) = &toc_entries {
                    (toc_block(entries))
                }
                div.article-content {
                    (PreEscaped(&body))
                }
            }
            @if let Some(url) = &share_url {
                (share_row(url, &post.title, &config.author))
            }
            (related_block(&related))
        }
    };
    base_document(
        &format!(
            "{} ({}) - {} Blog",
            post.title,
            min_read(&post.content, DETAIL_WPM),
            config.title
        ),
        Some("article-view"),
        content,
    )
}

fn toc_block(entries: &[toc::TocEntry]) -> Markup {
    html! {
        div.table-of-contents {
            h4 { "Table of Contents" }
            ul {
                @for entry in entries {
                    li class={ "toc-h" (entry.level) } {
                        a href={ "#" (entry.id) } { (entry.text) }
                    }
                }
            }
        }
    }
}

fn share_row(post_url: &str, title: &str, author: &str) -> Markup {
    html! {
        div.share-row {
            a.share-btn.twitter href=(share::twitter(post_url, title, author))
                target="_blank" rel="noopener" { "Share on Twitter" }
            a.share-btn.linkedin href=(share::linkedin(post_url))
                target="_blank" rel="noopener" { "Share on LinkedIn" }
            button.share-btn.copy data-url=(post_url) { "Copy Link" }
        }
    }
}

fn related_block(related: &[&Post]) -> Markup {
    html! {
        aside.related-posts {
            @if related.is_empty() {
                p.related-empty { "No related posts available." }
            } @else {
                h4 { "Related Articles" }
                @for post in related {
                    a.related-post href={ (post.id) ".html" } {
                        div.related-post-title { (post.title) }
                        div.related-post-date { (post.date) }
                    }
                }
            }
        }
    }
}

/// Renders the single error display state: short message, link back to the
/// listing. Used for unknown article URLs (and served as `404.html`).
/// Links are relative to the site root, where `404.html` lives, so a site
/// served from a subdirectory stays navigable.
pub fn error_page(config: &SiteConfig, message: &str) -> Markup {
    let content = html! {
        header.site-header {
            a.masthead href="index.html" { (config.title) }
        }
        main.article-page {
            div.error-message {
                h2 { "Oops! Something went wrong" }
                p { (message) }
                a.nav-link href="blog/index.html" { "← Back to blog" }
            }
        }
    };
    base_document(&format!("{} Blog", config.title), None, content)
}

// ============================================================================
// Homepage
// ============================================================================

/// Renders the hash-routed homepage. `active` is the initially visible
/// section (the router's resolution of the current fragment — for static
/// output that is the default page; the embedded script re-resolves from
/// `location.hash` on load).
pub fn home(
    config: &SiteConfig,
    sections: &crate::pages::Sections,
    posts: Result<&[Post], &str>,
    active: PageId,
) -> Markup {
    let content = html! {
        header.site-header {
            span.masthead { (config.title) }
            nav.site-nav {
                @for page in PageId::ALL {
                    button.nav-button.active[page == active] data-page=(page.fragment()) {
                        (page.title())
                    }
                }
            }
        }
        main data-default-page=(PageId::DEFAULT.fragment()) {
            @for page in PageId::ALL {
                section.page.active[page == active] id=(page.fragment()) {
                    @match page {
                        PageId::Blog => { (blog_section(posts)) }
                        PageId::Contact => { (contact_section(config, sections.body(page))) }
                        _ => { (PreEscaped(sections.body(page))) }
                    }
                }
            }
        }
    };
    base_document(&config.title, Some("home"), content)
}

/// The homepage blog teaser: the three most recent posts plus a link into
/// the full listing. Shows the degraded state when the load failed.
fn blog_section(posts: Result<&[Post], &str>) -> Markup {
    html! {
        h2 { "Blog" }
        @match posts {
            Err(_) => {
                div.error-message {
                    h3 { "Oops! Something went wrong" }
                    p { "Unable to load blog posts. Please try again later." }
                }
            }
            Ok([]) => {
                div.loading { (NO_POSTS) }
            }
            Ok(posts) => {
                div.recent-posts {
                    @for post in posts.iter().take(3) {
                        a.related-post href={ "blog/posts/" (post.id) ".html" } {
                            div.related-post-title { (post.title) }
                            div.related-post-date { (post.date) }
                        }
                    }
                }
                a.read-more-btn href="blog/index.html" { "View all articles →" }
            }
        }
    }
}

fn contact_section(config: &SiteConfig, body: &str) -> Markup {
    html! {
        (PreEscaped(body))
        @if !config.contact_endpoint.is_empty() {
            form #contact-form data-endpoint=(config.contact_endpoint) {
                input #contact-name name="name" type="text" placeholder="Name" required;
                input #contact-email name="email" type="email" placeholder="Email" required;
                input #contact-subject name="subject" type="text" placeholder="Subject" required;
                textarea #contact-message name="message" placeholder="Message" required {}
                button type="submit" { "Send Message" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Sections;
    use crate::test_helpers::{post_with_content, sample_posts};

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Ember".to_string(),
            author: "Jo Doe".to_string(),
            base_url: "https://blog.example.com".to_string(),
            contact_endpoint: "https://mail.example.com/contact".to_string(),
            ..SiteConfig::default()
        }
    }

    // =========================================================================
    // Listing
    // =========================================================================

    #[test]
    fn listing_renders_a_card_per_post() {
        let posts = sample_posts();
        let html = listing(&config(), &posts).into_string();
        for post in &posts {
            assert!(html.contains(&post.title));
            assert!(html.contains(&format!("posts/{}.html", post.id)));
        }
    }

    #[test]
    fn listing_features_the_first_post() {
        let posts = sample_posts();
        let html = listing(&config(), &posts).into_string();
        assert!(html.contains("Featured Article"));
        assert!(html.contains("Read Full Article"));
    }

    #[test]
    fn listing_shows_post_count() {
        let posts = sample_posts();
        let html = listing(&config(), &posts).into_string();
        assert!(html.contains(&format!(
            r#"<span id="totalPosts" class="stat-number">{}</span>"#,
            posts.len()
        )));
    }

    #[test]
    fn listing_empty_collection_says_no_posts() {
        let html = listing(&config(), &[]).into_string();
        assert!(html.contains(NO_POSTS));
        assert!(!html.contains(r#"id="postsGrid""#));
    }

    #[test]
    fn listing_cards_carry_search_and_tag_data() {
        let posts = vec![post_with_content(
            "sec",
            "Exploit Writeup",
            "<p>The vulnerability.</p>",
        )];
        let html = listing(&config(), &posts).into_string();
        assert!(html.contains(r#"data-tags="cybersecurity""#));
        assert!(html.contains("data-search="));
        assert!(html.contains("exploit writeup"));
    }

    #[test]
    fn listing_card_uses_list_reading_speed() {
        // 250 words: 2 min at 200 wpm.
        let body = vec!["w"; 250].join(" ");
        let posts = vec![post_with_content("a", "Long", &body)];
        let html = listing(&config(), &posts).into_string();
        assert!(html.contains("2 min read"));
    }

    #[test]
    fn cards_empty_filter_result_says_no_matches() {
        let html = cards(&[]).into_string();
        assert!(html.contains(NO_MATCHES));
    }

    #[test]
    fn listing_has_all_chip_and_universe_chips() {
        let html = listing(&config(), &sample_posts()).into_string();
        assert!(html.contains(r#"data-tag="all""#));
        assert!(html.contains(r#"data-tag="cybersecurity""#));
        assert!(html.contains(">Cybersecurity<"));
    }

    #[test]
    fn listing_error_replaces_grid_with_degraded_state() {
        let html = listing_error(&config()).into_string();
        assert!(html.contains("Unable to load blog posts"));
        assert!(!html.contains(r#"id="postsGrid""#));
    }

    // =========================================================================
    // Article page
    // =========================================================================

    #[test]
    fn article_uses_detail_reading_speed() {
        // 250 words: 2 min at 200 wpm but 2 min at 150 wpm too; 400 words
        // separates them (2 vs 3).
        let body = vec!["w"; 400].join(" ");
        let posts = vec![post_with_content("a", "Long", &body)];
        let html = post_page(&config(), &posts, Some("a")).into_string();
        assert!(html.contains("3 min read"));
    }

    #[test]
    fn article_title_includes_reading_time() {
        // 400 words: 3 min at the detail speed.
        let body = vec!["w"; 400].join(" ");
        let posts = vec![post_with_content("a", "Long", &body)];
        let html = post_page(&config(), &posts, Some("a")).into_string();
        assert!(html.contains("<title>Long (3 min read) - Ember Blog</title>"));
    }

    #[test]
    fn article_shows_tag_badges_with_display_names() {
        let posts = vec![post_with_content(
            "sec",
            "Exploit Writeup",
            "<p>Details.</p>",
        )];
        let html = post_page(&config(), &posts, Some("sec")).into_string();
        assert!(html.contains(r#"<span class="tag">Cybersecurity</span>"#));
    }

    #[test]
    fn article_embeds_raw_body_html() {
        let posts = vec![post_with_content(
            "a",
            "Post",
            "<p>Body with <em>markup</em>.</p>",
        )];
        let html = post_page(&config(), &posts, Some("a")).into_string();
        assert!(html.contains("<em>markup</em>"));
    }

    #[test]
    fn article_with_enough_headings_gets_a_toc() {
        let body = "<h2>One</h2><p>a</p><h2>Two</h2><p>b</p><h3>Two.1</h3><p>c</p>";
        let posts = vec![post_with_content("a", "Sectioned", body)];
        let html = post_page(&config(), &posts, Some("a")).into_string();
        assert!(html.contains("Table of Contents"));
        assert!(html.contains(r##"href="#heading-0""##));
        assert!(html.contains(r#"<h2 id="heading-0">One</h2>"#));
        assert!(html.contains(r#"class="toc-h3""#));
    }

    #[test]
    fn article_with_few_headings_has_no_toc() {
        let posts = vec![post_with_content("a", "Short", "<h2>Only</h2><p>a</p>")];
        let html = post_page(&config(), &posts, Some("a")).into_string();
        assert!(!html.contains("Table of Contents"));
    }

    #[test]
    fn article_lists_related_articles() {
        let posts = sample_posts();
        let html = post_page(&config(), &posts, Some(posts[1].id.as_str())).into_string();
        assert!(html.contains("Related Articles"));
        // First post is related, links are same-directory.
        assert!(html.contains(&format!(r#"href="{}.html""#, posts[0].id)));
    }

    #[test]
    fn article_without_siblings_says_no_related() {
        let posts = vec![post_with_content("solo", "Alone", "<p>body</p>")];
        let html = post_page(&config(), &posts, Some("solo")).into_string();
        assert!(html.contains("No related posts available."));
    }

    #[test]
    fn article_share_links_use_absolute_url() {
        let posts = sample_posts();
        let id = posts[0].id.as_str();
        let html = post_page(&config(), &posts, Some(id)).into_string();
        assert!(html.contains("twitter.com/intent/tweet"));
        assert!(html.contains("linkedin.com/sharing"));
        assert!(html.contains("blog.example.com"));
    }

    #[test]
    fn article_without_base_url_skips_share_row() {
        let mut cfg = config();
        cfg.base_url = String::new();
        let posts = sample_posts();
        let html = post_page(&cfg, &posts, Some(posts[0].id.as_str())).into_string();
        assert!(!html.contains("Share on Twitter"));
    }

    #[test]
    fn unknown_id_renders_error_page() {
        let posts = sample_posts();
        let html = post_page(&config(), &posts, Some("zzz")).into_string();
        assert!(html.contains("Oops! Something went wrong"));
        assert!(html.contains("Blog post not found"));
        assert!(html.contains("← Back to blog"));
    }

    #[test]
    fn error_page_links_are_root_relative() {
        let html = error_page(&config(), "Blog post not found").into_string();
        assert!(html.contains(r#"href="blog/index.html""#));
        assert!(html.contains(r#"href="index.html""#));
        assert!(!html.contains(r#"href="/blog/""#));
    }

    #[test]
    fn missing_id_renders_error_page_with_distinct_message() {
        let posts = sample_posts();
        let html = post_page(&config(), &posts, None).into_string();
        assert!(html.contains("No post ID specified"));
    }

    // =========================================================================
    // Homepage
    // =========================================================================

    #[test]
    fn home_renders_all_sections_with_one_active() {
        let posts = sample_posts();
        let html = home(&config(), &Sections::default(), Ok(posts.as_slice()), PageId::DEFAULT)
            .into_string();
        for page in PageId::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, page.fragment())));
        }
        assert_eq!(html.matches(r#"class="page active""#).count(), 1);
    }

    #[test]
    fn home_marks_active_nav_button() {
        let posts = sample_posts();
        let html = home(&config(), &Sections::default(), Ok(posts.as_slice()), PageId::Resume)
            .into_string();
        assert!(html.contains(r#"class="page active" id="resume""#));
    }

    #[test]
    fn home_blog_section_links_recent_posts() {
        let posts = sample_posts();
        let html = home(&config(), &Sections::default(), Ok(posts.as_slice()), PageId::DEFAULT)
            .into_string();
        assert!(html.contains(&format!("blog/posts/{}.html", posts[0].id)));
        assert!(html.contains("View all articles"));
    }

    #[test]
    fn home_blog_section_shows_load_error() {
        let html = home(
            &config(),
            &Sections::default(),
            Err("IO error"),
            PageId::DEFAULT,
        )
        .into_string();
        assert!(html.contains("Unable to load blog posts"));
        assert!(!html.contains("View all articles"));
    }

    #[test]
    fn home_contact_form_targets_endpoint() {
        let posts = sample_posts();
        let html = home(&config(), &Sections::default(), Ok(posts.as_slice()), PageId::DEFAULT)
            .into_string();
        assert!(html.contains(r#"data-endpoint="https://mail.example.com/contact""#));
        assert!(html.contains(r#"name="subject""#));
    }

    #[test]
    fn home_without_endpoint_omits_form() {
        let mut cfg = config();
        cfg.contact_endpoint = String::new();
        let posts = sample_posts();
        let html =
            home(&cfg, &Sections::default(), Ok(posts.as_slice()), PageId::DEFAULT).into_string();
        assert!(!html.contains(r#"<form id="contact-form""#));
    }

    #[test]
    fn home_escapes_untrusted_titles() {
        let mut posts = sample_posts();
        posts[0].title = "<script>alert('xss')</script>".to_string();
        let html = home(&config(), &Sections::default(), Ok(posts.as_slice()), PageId::DEFAULT)
            .into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn base_document_includes_doctype_and_assets() {
        let posts = sample_posts();
        let html = listing(&config(), &posts).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
    }
}
