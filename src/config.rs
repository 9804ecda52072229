//! Site configuration.
//!
//! One optional `config.toml` in the content root. No cascade, no layering —
//! the site is a single blog, so a flat file covers it. A missing file means
//! stock defaults; a present file overrides only the keys it sets.
//!
//! ```toml
//! # All keys optional — defaults shown
//! title = "Blog"                    # Site title, used in <title> and headers
//! author = "Anonymous"              # Byline used in share blurbs
//! base_url = ""                     # Absolute site URL for share links,
//!                                   # e.g. "https://blog.example.com"
//! contact_endpoint = ""             # Mail endpoint the contact form POSTs to
//! posts_file = "blog-posts.json"    # Post collection, relative to content root
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config.toml: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub base_url: String,
    pub contact_endpoint: String,
    pub posts_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "Blog".to_string(),
            author: "Anonymous".to_string(),
            base_url: String::new(),
            contact_endpoint: String::new(),
            posts_file: "blog-posts.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Absolute URL for a site-relative path, when `base_url` is set.
    /// Share links need absolute URLs; everything else stays relative.
    pub fn absolute_url(&self, rel: &str) -> Option<String> {
        if self.base_url.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            rel.trim_start_matches('/')
        ))
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file doesn't exist.
pub fn load(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

/// A documented stock `config.toml`, for the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    r#"# emberlog site configuration. All keys are optional; defaults shown.

# Site title, used in page <title>s and the masthead.
title = "Blog"

# Byline used in share blurbs ("... by <author>").
author = "Anonymous"

# Absolute site URL, used to build share links. Leave empty to disable
# share buttons.
# base_url = "https://blog.example.com"
base_url = ""

# Endpoint the contact form POSTs to. Leave empty to render the contact
# page without a form.
# contact_endpoint = "https://mail.example.com/contact"
contact_endpoint = ""

# Post collection file, relative to the content root.
posts_file = "blog-posts.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.title, "Blog");
        assert_eq!(config.posts_file, "blog-posts.json");
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "title = \"Notes\"\n").unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.posts_file, "blog-posts.json");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "title = [broken").unwrap();
        assert!(matches!(
            load(dir.path()).unwrap_err(),
            ConfigError::Toml(_)
        ));
    }

    #[test]
    fn stock_config_parses_back() {
        let config: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config.title, "Blog");
    }

    #[test]
    fn absolute_url_joins_without_doubled_slash() {
        let config = SiteConfig {
            base_url: "https://blog.example.com/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.absolute_url("/posts/a.html").as_deref(),
            Some("https://blog.example.com/posts/a.html")
        );
    }

    #[test]
    fn absolute_url_none_without_base() {
        let config = SiteConfig::default();
        assert!(config.absolute_url("posts/a.html").is_none());
    }
}
