//! Link audit over the delivered pages.
//!
//! Anchors are reported as published; nothing is rewritten. A dangling
//! target (`register.php` on the signup nav bar) is surfaced so the build
//! can warn about it.

use std::fmt;

use crate::{pages::Page, types::Href};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    /// `href=""`, the document itself.
    Empty,
    /// Points back at the page it appears on.
    Current,
    /// Points at another delivered page.
    Page(Page),
    /// Carries a scheme and leaves the site.
    External,
    /// No delivered page has this name.
    Dangling,
}

impl LinkStatus {
    pub fn classify(on: Page, href: &Href) -> Self {
        if href.is_empty() {
            return LinkStatus::Empty;
        }
        if href.is_external() {
            return LinkStatus::External;
        }
        match href.file_name().and_then(Page::from_file_name) {
            Some(target) if target == on => LinkStatus::Current,
            Some(target) => LinkStatus::Page(target),
            None => LinkStatus::Dangling,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub page: Page,
    pub label: String,
    pub href: Href,
    pub status: LinkStatus,
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" -> {}", self.page, self.label, self.href)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkReport {
    entries: Vec<LinkEntry>,
}

impl LinkReport {
    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn dangling(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == LinkStatus::Dangling)
    }

    pub fn is_clean(&self) -> bool {
        self.dangling().next().is_none()
    }
}

/// Classify every anchor of every given page.
pub fn audit(pages: &[Page]) -> LinkReport {
    let entries = pages
        .iter()
        .flat_map(|&page| {
            page.document()
                .anchors()
                .into_iter()
                .map(move |anchor| LinkEntry {
                    page,
                    status: LinkStatus::classify(page, &anchor.href),
                    label: anchor.label,
                    href: anchor.href,
                })
        })
        .collect();
    LinkReport { entries }
}
