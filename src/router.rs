//! Fragment-based page routing for the single-page homepage.
//!
//! The homepage is one document holding a fixed set of sections (about,
//! resume, portfolio, blog, contact) of which exactly one is visible.
//! Which one is addressed by the URL fragment (`#resume`), so pages survive
//! reload and can be linked directly.
//!
//! [`Router`] is the state machine behind that: it owns "currently visible
//! page" and answers two events. `navigate` is a deliberate page switch (a
//! nav button); `on_fragment_change` is the browser reporting a fragment it
//! already changed (back/forward, hand-edited URL). Both converge on the same
//! transition, and each transition reports whether the fragment still needs
//! rewriting; already-matching fragments are left alone so a rewrite never
//! re-triggers the change notification that caused it.
//!
//! Unknown or empty fragments resolve to the default page rather than a
//! blank screen, and that resolution is idempotent.

use std::fmt;

/// The closed set of homepage pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    About,
    Resume,
    Portfolio,
    Blog,
    Contact,
}

impl PageId {
    /// All pages, in navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::About,
        PageId::Resume,
        PageId::Portfolio,
        PageId::Blog,
        PageId::Contact,
    ];

    /// Where invalid and empty fragments land.
    pub const DEFAULT: PageId = PageId::About;

    /// The URL fragment addressing this page.
    pub fn fragment(self) -> &'static str {
        match self {
            PageId::About => "about",
            PageId::Resume => "resume",
            PageId::Portfolio => "portfolio",
            PageId::Blog => "blog",
            PageId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            PageId::About => "About",
            PageId::Resume => "Resume",
            PageId::Portfolio => "Portfolio",
            PageId::Blog => "Blog",
            PageId::Contact => "Contact",
        }
    }

    pub fn from_fragment(fragment: &str) -> Option<PageId> {
        PageId::ALL
            .into_iter()
            .find(|page| page.fragment() == fragment)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

/// Resolve a raw fragment (with or without the leading `#`) to a page.
/// Unknown and empty fragments fall back to [`PageId::DEFAULT`].
pub fn resolve(fragment: &str) -> PageId {
    PageId::from_fragment(fragment.trim_start_matches('#')).unwrap_or(PageId::DEFAULT)
}

/// Result of a routing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The page now visible.
    pub page: PageId,
    /// Whether the location fragment must be rewritten to `page.fragment()`.
    /// False when it already matches; rewriting then would re-trigger the
    /// fragment-change notification.
    pub update_fragment: bool,
}

/// The "currently visible page" state machine.
#[derive(Debug)]
pub struct Router {
    current: PageId,
    /// The location fragment as last observed or written, `#` stripped.
    fragment: String,
}

impl Default for Router {
    fn default() -> Self {
        Router::new()
    }
}

impl Router {
    /// A router before any fragment has been seen, showing the default page.
    /// Feed the initial location through [`Router::on_fragment_change`].
    pub fn new() -> Self {
        Router {
            current: PageId::DEFAULT,
            fragment: String::new(),
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// Switch to `page` (a navigation control was activated).
    pub fn navigate(&mut self, page: PageId) -> Transition {
        self.current = page;
        let update_fragment = self.fragment != page.fragment();
        if update_fragment {
            self.fragment = page.fragment().to_string();
        }
        Transition {
            page,
            update_fragment,
        }
    }

    /// The browser changed the fragment underneath us (back/forward or a
    /// hand-typed URL). Re-enters the same transition as [`Router::navigate`];
    /// invalid fragments land on the default page and get rewritten.
    pub fn on_fragment_change(&mut self, fragment: &str) -> Transition {
        self.fragment = fragment.trim_start_matches('#').to_string();
        self.navigate(resolve(fragment))
    }
}
