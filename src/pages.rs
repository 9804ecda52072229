//! Homepage section bodies.
//!
//! Each homepage section (about, resume, portfolio, contact) can have a
//! markdown file in `content/pages/` named after its fragment —
//! `pages/about.md`, `pages/resume.md`, and so on. Files are converted to
//! HTML at build time; a missing file just means an empty section, not an
//! error. The blog section's body is generated from the post collection and
//! ignores any `pages/blog.md`.

use crate::router::PageId;
use pulldown_cmark::{Parser, html as md_html};
use std::path::Path;

/// Converted section bodies, one per [`PageId`], in [`PageId::ALL`] order.
#[derive(Debug, Default)]
pub struct Sections {
    bodies: [String; PageId::ALL.len()],
}

impl Sections {
    /// The rendered HTML body for `page`. Empty when no file was found.
    pub fn body(&self, page: PageId) -> &str {
        let idx = PageId::ALL.iter().position(|p| *p == page).unwrap_or(0);
        &self.bodies[idx]
    }
}

/// Read and convert all section files under `root/pages/`.
pub fn load(root: &Path) -> Result<Sections, std::io::Error> {
    let mut sections = Sections::default();
    for (idx, page) in PageId::ALL.into_iter().enumerate() {
        let path = root.join("pages").join(format!("{}.md", page.fragment()));
        if !path.exists() {
            continue;
        }
        let markdown = std::fs::read_to_string(&path)?;
        sections.bodies[idx] = to_html(&markdown);
    }
    Ok(sections)
}

fn to_html(markdown: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(markdown));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn section_file_converts_markdown() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(
            dir.path().join("pages/about.md"),
            "# Hi\n\nI write **code**.",
        )
        .unwrap();

        let sections = load(dir.path()).unwrap();
        let body = sections.body(PageId::About);
        assert!(body.contains("<h1>"));
        assert!(body.contains("<strong>code</strong>"));
    }

    #[test]
    fn missing_file_yields_empty_body() {
        let dir = TempDir::new().unwrap();
        let sections = load(dir.path()).unwrap();
        assert_eq!(sections.body(PageId::Resume), "");
    }

    #[test]
    fn sections_load_independently() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("pages/resume.md"), "Ten years of this.").unwrap();

        let sections = load(dir.path()).unwrap();
        assert!(sections.body(PageId::Resume).contains("Ten years"));
        assert_eq!(sections.body(PageId::About), "");
    }
}
