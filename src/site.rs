//! Site assembly.
//!
//! Takes a content root and writes the finished site:
//!
//! ```text
//! dist/
//! ├── index.html              # hash-routed homepage
//! ├── 404.html                # error state for unknown article URLs
//! └── blog/
//!     ├── index.html          # listing with search and tag filters
//!     └── posts/{id}.html     # one page per post
//! ```
//!
//! A post collection that fails to load does not abort the build: the blog
//! pages render their degraded state instead, and the failure is carried in
//! the summary so the CLI can surface it. Config and filesystem errors do
//! abort; there is nothing sensible to publish without them.

use crate::config::{self, ConfigError};
use crate::render;
use crate::router::PageId;
use crate::store;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// What a build produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildSummary {
    /// Number of posts rendered (zero on load failure).
    pub post_count: usize,
    /// Site-relative paths written, in write order.
    pub written: Vec<String>,
    /// The post-load failure, when the blog was built degraded.
    pub load_error: Option<String>,
}

/// Build the site from `root` into `out_dir`.
pub fn build(root: &Path, out_dir: &Path) -> Result<BuildSummary, BuildError> {
    let config = config::load(root)?;
    let sections = crate::pages::load(root)?;
    let loaded = store::load(&root.join(&config.posts_file));

    fs::create_dir_all(out_dir.join("blog/posts"))?;

    let mut written = Vec::new();

    let load_error = loaded.as_ref().err().map(|err| err.to_string());
    let posts_view: Result<&[store::Post], &str> = match &loaded {
        Ok(posts) => Ok(posts.as_slice()),
        Err(_) => Err(load_error.as_deref().unwrap_or_default()),
    };

    write_page(
        out_dir,
        &mut written,
        "index.html",
        render::home(&config, &sections, posts_view, PageId::DEFAULT),
    )?;

    match posts_view {
        Ok(posts) => {
            write_page(
                out_dir,
                &mut written,
                "blog/index.html",
                render::listing(&config, posts),
            )?;
            for post in posts {
                let rel = format!("blog/posts/{}.html", post.id);
                write_page(
                    out_dir,
                    &mut written,
                    &rel,
                    render::post_page(&config, posts, Some(&post.id)),
                )?;
            }
        }
        Err(_) => {
            write_page(
                out_dir,
                &mut written,
                "blog/index.html",
                render::listing_error(&config),
            )?;
        }
    }

    write_page(
        out_dir,
        &mut written,
        "404.html",
        render::error_page(&config, "Blog post not found"),
    )?;

    Ok(BuildSummary {
        post_count: loaded.as_ref().map(|p| p.len()).unwrap_or(0),
        written,
        load_error,
    })
}

fn write_page(
    out_dir: &Path,
    written: &mut Vec<String>,
    rel: &str,
    markup: maud::Markup,
) -> std::io::Result<()> {
    fs::write(out_dir.join(rel), markup.into_string())?;
    written.push(rel.to_string());
    Ok(())
}
