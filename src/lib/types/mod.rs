//! Shared value types for the page model.
//! Every value is a static literal built once per render and never mutated
//! afterwards.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

/// A link target as written in the markup, relative to the page.
///
/// The empty href is legal: the logo anchor links to the current document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Href(String);

impl Href {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().replace('\\', "/"))
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the target carries a scheme (`https://`, `mailto:`).
    pub fn is_external(&self) -> bool {
        self.0
            .split_once(':')
            .is_some_and(|(scheme, _)| !scheme.is_empty() && !scheme.contains('/'))
    }

    /// The path part, with any query string or fragment removed.
    pub fn path(&self) -> &str {
        let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
        &self.0[..end]
    }

    /// Last path segment, e.g. `login.php` for `./login.php#top`.
    pub fn file_name(&self) -> Option<&str> {
        self.path().rsplit('/').next().filter(|s| !s.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relative paths to internal content or assets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelPath(PathBuf);

impl RelPath {
    /// Accepts only paths that stay below the directory they are joined to.
    pub fn new(p: PathBuf) -> Option<Self> {
        let contained = p
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if p.as_os_str().is_empty() || !contained {
            None
        } else {
            Some(Self(p))
        }
    }

    /// Map a local asset href onto a relative filesystem path.
    pub fn from_href(href: &Href) -> Option<Self> {
        if href.is_external() {
            return None;
        }
        Self::new(PathBuf::from(href.path()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// `type` attribute of a form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Password,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Password => "password",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input of an auth form. The element id mirrors the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: InputKind,
    pub placeholder: String,
}

impl FormField {
    pub fn text(name: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Text,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn password(name: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: InputKind::Password,
            placeholder: placeholder.to_string(),
        }
    }
}

/// An entry of the navigation bar's link list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: Href,
    /// Set when the link targets the page it is rendered on.
    pub active: bool,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: Href::new(href),
            active: false,
        }
    }
}

/// A `<link rel="stylesheet">` in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stylesheet {
    pub href: Href,
    /// Emit `type="text/css"`.
    pub typed: bool,
}

impl Stylesheet {
    pub fn new(href: &str) -> Self {
        Self {
            href: Href::new(href),
            typed: false,
        }
    }

    pub fn typed(href: &str) -> Self {
        Self {
            href: Href::new(href),
            typed: true,
        }
    }
}

/// An `<img>` with its presentation class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub src: Href,
    pub alt: String,
    pub class: String,
}

impl Image {
    pub fn new(src: &str, class: &str) -> Self {
        Self {
            src: Href::new(src),
            alt: String::new(),
            class: class.to_string(),
        }
    }
}

/// Any anchor found in a document, collected for the link audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub label: String,
    pub href: Href,
}
