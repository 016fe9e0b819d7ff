//! Top navigation bar: logo anchor, optional search field, link list.

use crate::{
    markup::{Markup, Render, element, start_tag},
    profile::SearchField,
    types::{Anchor, Href, Image, NavLink},
};

pub const LOGO_SRC: &str = "images/EPITA-white.svg";

/// Logo image wrapped in an anchor. Always the first child of `<nav>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Logo {
    pub href: Href,
    pub image: Image,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            href: Href::empty(),
            image: Image::new(LOGO_SRC, "nav-logo"),
        }
    }
}

impl Render for Logo {
    fn render(&self, out: &mut Markup) {
        let img = start_tag(
            "img",
            &[
                ("src", self.image.src.as_str()),
                ("alt", &self.image.alt),
                ("class", &self.image.class),
            ],
        );
        out.line(&format!(
            "{}{img}</a>",
            start_tag("a", &[("href", self.href.as_str())])
        ));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBar {
    pub logo: Logo,
    pub search: Option<SearchField>,
    pub links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            logo: Logo::default(),
            search: None,
            links,
        }
    }

    pub fn with_search(mut self, search: SearchField) -> Self {
        self.search = Some(search);
        self
    }

    /// Flag the links that point at `current` (a page file name).
    pub fn mark_active(mut self, current: &str) -> Self {
        for link in &mut self.links {
            link.active = link.href.file_name() == Some(current);
        }
        self
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        let logo = Anchor {
            label: String::new(),
            href: self.logo.href.clone(),
        };
        std::iter::once(logo)
            .chain(self.links.iter().map(|l| Anchor {
                label: l.label.clone(),
                href: l.href.clone(),
            }))
            .collect()
    }
}

impl Render for NavBar {
    fn render(&self, out: &mut Markup) {
        out.open("<nav>");
        out.push(&self.logo);
        if let Some(search) = &self.search {
            out.push(search);
        }
        out.open("<ul>");
        for link in &self.links {
            let anchor = element(
                "a",
                &[("href", link.href.as_str()), ("class", "nav-link")],
                &link.label,
            );
            out.line(&format!("<li>{anchor}</li>"));
        }
        out.close("</ul>");
        out.close("</nav>");
    }
}

#[cfg(test)]
mod tests;
