//! Table-of-contents extraction for article bodies.
//!
//! Long articles get a TOC built from their `<h2>` and `<h3>` headings.
//! Articles with fewer than [`MIN_HEADINGS`] headings get none — a TOC for
//! two sections is noise.
//!
//! Anchors are injected into the content itself: the Nth heading (in document
//! order) gains `id="heading-N"`, and the TOC links to those ids. Heading
//! text is extracted with simple angle-bracket stripping, not an HTML parser
//! — post bodies are authored HTML, not adversarial input. Headings are
//! assumed not to carry ids of their own.

/// Minimum heading count before a TOC is worth rendering.
pub const MIN_HEADINGS: usize = 3;

/// One TOC row: heading level (2 or 3), anchor id, and plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

struct Heading {
    /// Byte offset just past `<h2` / `<h3`, where the id attribute goes.
    inject_at: usize,
    level: u8,
    text: String,
}

/// Build a TOC for `content`.
///
/// Returns the content with anchor ids injected plus the TOC entries, or
/// `None` when the article has fewer than [`MIN_HEADINGS`] headings (content
/// is then used unmodified).
pub fn build(content: &str) -> Option<(String, Vec<TocEntry>)> {
    let headings = find_headings(content);
    if headings.len() < MIN_HEADINGS {
        return None;
    }

    let mut anchored = String::with_capacity(content.len() + headings.len() * 16);
    let mut entries = Vec::with_capacity(headings.len());
    let mut cursor = 0;

    for (index, heading) in headings.iter().enumerate() {
        let id = format!("heading-{index}");
        anchored.push_str(&content[cursor..heading.inject_at]);
        anchored.push_str(&format!(" id=\"{id}\""));
        cursor = heading.inject_at;
        entries.push(TocEntry {
            level: heading.level,
            id,
            text: heading.text.clone(),
        });
    }
    anchored.push_str(&content[cursor..]);

    Some((anchored, entries))
}

fn find_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut pos = 0;

    while let Some(rel) = content[pos..].find("<h") {
        let start = pos + rel;
        pos = start + 2;

        let rest = &content[start + 2..];
        let level = match rest.as_bytes().first() {
            Some(b'2') => 2,
            Some(b'3') => 3,
            _ => continue,
        };
        // Reject lookalikes such as <h2x> or <h20>.
        match rest.as_bytes().get(1) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') => {}
            _ => continue,
        }

        // End of the opening tag, then the matching closing tag.
        let Some(open_end) = rest[1..].find('>') else {
            break;
        };
        let text_start = start + 2 + 1 + open_end + 1;
        let closing = if level == 2 { "</h2>" } else { "</h3>" };
        let Some(close_rel) = content[text_start..].find(closing) else {
            continue;
        };

        let inner = &content[text_start..text_start + close_rel];
        headings.push(Heading {
            inject_at: start + 3,
            level,
            text: strip_tags(inner).trim().to_string(),
        });
        pos = text_start + close_rel + closing.len();
    }

    headings
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
