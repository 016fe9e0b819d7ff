//! Profile page content: the nav search field and the hero banner.
//!
//! Nothing here reads user data. The name and title are literals and the
//! search input is not attached to any handler.

use crate::{
    markup::{Markup, Render, element, start_tag},
    types::Image,
};

/// Path data of the 16x16 magnifying glass glyph.
const MAGNIFYING_GLASS_PATH: &str = "M6.3833 12.8767C7.76953 12.8767 9.04785 12.4285 10.0938 11.6814L14.0283 15.616C14.2109 15.7986 14.4517 15.8899 14.709 15.8899C15.2485 15.8899 15.6304 15.4749 15.6304 14.9436C15.6304 14.6946 15.5474 14.4539 15.3647 14.2795L11.4551 10.3616C12.2769 9.28247 12.7666 7.94604 12.7666 6.49341C12.7666 2.98218 9.89453 0.110107 6.3833 0.110107C2.88037 0.110107 0 2.97388 0 6.49341C0 10.0046 2.87207 12.8767 6.3833 12.8767ZM6.3833 11.4988C3.64404 11.4988 1.37793 9.23267 1.37793 6.49341C1.37793 3.75415 3.64404 1.48804 6.3833 1.48804C9.12256 1.48804 11.3887 3.75415 11.3887 6.49341C11.3887 9.23267 9.12256 11.4988 6.3833 11.4988Z";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const PROFILE_NAME: &str = "John Doe";
pub const PROFILE_TITLE: &str = "Software Engineer";
pub const PROFILE_PHOTO: &str = "images/profile-photo.png";
/// Heading left below the hero while the page is unfinished.
pub const PLACEHOLDER_HEADING: &str = "WTF IS HAPPENING";

/// Inline single-path SVG icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub size: u32,
    pub path: String,
    pub fill: String,
    pub fill_opacity: String,
    pub class: String,
}

impl Icon {
    pub fn magnifying_glass() -> Self {
        Self {
            size: 16,
            path: MAGNIFYING_GLASS_PATH.to_string(),
            fill: "#3C3C43".to_string(),
            fill_opacity: "0.6".to_string(),
            class: "magnifying-glass".to_string(),
        }
    }
}

impl Render for Icon {
    fn render(&self, out: &mut Markup) {
        let size = self.size.to_string();
        let view_box = format!("0 0 {size} {size}");
        out.open(&start_tag(
            "svg",
            &[
                ("xmlns", SVG_NS),
                ("width", &size),
                ("height", &size),
                ("viewBox", &view_box),
                ("fill", "none"),
                ("class", &self.class),
            ],
        ));
        // `<path>` is foreign content, so it needs the self-closing form.
        let path = start_tag(
            "path",
            &[
                ("d", &self.path),
                ("fill", &self.fill),
                ("fill-opacity", &self.fill_opacity),
            ],
        );
        out.line(&format!("{}/>", path.trim_end_matches('>')));
        out.close("</svg>");
    }
}

/// Text input with a leading icon, shown in the profile nav bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchField {
    pub placeholder: String,
    pub icon: Icon,
}

impl Default for SearchField {
    fn default() -> Self {
        Self {
            placeholder: "Search for people...".to_string(),
            icon: Icon::magnifying_glass(),
        }
    }
}

impl Render for SearchField {
    fn render(&self, out: &mut Markup) {
        out.open(r#"<div class="searchbar">"#);
        out.open(r#"<div class="magnifying-glass-icon-wrapper">"#);
        out.push(&self.icon);
        out.close("</div>");
        out.blank();
        out.open(r#"<div class="search-field">"#);
        out.line(&start_tag(
            "input",
            &[
                ("type", "text"),
                ("placeholder", &self.placeholder),
                ("class", "input-field"),
            ],
        ));
        out.close("</div>");
        out.close("</div>");
    }
}

/// Avatar, name and subtitle banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileHero {
    pub avatar: Image,
    pub name: String,
    pub subtitle: String,
}

impl Default for ProfileHero {
    fn default() -> Self {
        Self {
            avatar: Image::new(PROFILE_PHOTO, "profile-picture"),
            name: PROFILE_NAME.to_string(),
            subtitle: PROFILE_TITLE.to_string(),
        }
    }
}

impl Render for ProfileHero {
    fn render(&self, out: &mut Markup) {
        out.open(r#"<div class="profile-hero">"#);
        out.open(r#"<div class="profile-hero-content">"#);
        out.open(r#"<div class="profile-hero-image">"#);
        out.line(&start_tag(
            "img",
            &[
                ("src", self.avatar.src.as_str()),
                ("alt", &self.avatar.alt),
                ("class", &self.avatar.class),
            ],
        ));
        out.close("</div>");
        out.open(r#"<div class="profile-hero-text">"#);
        out.line(&element("h1", &[("class", "profile-hero-title")], &self.name));
        out.line(&element(
            "p",
            &[("class", "profile-hero-subtitle")],
            &self.subtitle,
        ));
        out.close("</div>");
        out.close("</div>");
        out.close("</div>");
    }
}

/// Everything inside `<body>` after the nav bar on the profile page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileBody {
    pub hero: ProfileHero,
    pub heading: String,
}

impl Default for ProfileBody {
    fn default() -> Self {
        Self {
            hero: ProfileHero::default(),
            heading: PLACEHOLDER_HEADING.to_string(),
        }
    }
}

impl Render for ProfileBody {
    fn render(&self, out: &mut Markup) {
        out.push(&self.hero);
        out.blank();
        out.line(&element("h1", &[], &self.heading));
    }
}
