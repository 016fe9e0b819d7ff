use crate::{
    form::AuthForm,
    markup::{Markup, Render, element, start_tag},
    nav::NavBar,
    profile::ProfileBody,
    types::{Anchor, Href, Stylesheet},
};

/// Page-specific content placed after the nav bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Form(AuthForm),
    Profile(ProfileBody),
}

impl Render for Body {
    fn render(&self, out: &mut Markup) {
        match self {
            Body::Form(form) => out.push(form),
            Body::Profile(profile) => out.push(profile),
        }
    }
}

/// A complete page: head metadata, nav chrome and body content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub stylesheets: Vec<Stylesheet>,
    pub nav: NavBar,
    pub body: Body,
}

impl Document {
    /// Every anchor in document order: nav first, then body links.
    pub fn anchors(&self) -> Vec<Anchor> {
        let mut anchors = self.nav.anchors();
        if let Body::Form(form) = &self.body {
            anchors.extend(form.anchors());
        }
        anchors
    }

    /// Stylesheets and images the page loads, in document order.
    pub fn assets(&self) -> Vec<Href> {
        let mut assets: Vec<Href> = self.stylesheets.iter().map(|s| s.href.clone()).collect();
        assets.push(self.nav.logo.image.src.clone());
        if let Body::Profile(profile) = &self.body {
            assets.push(profile.hero.avatar.src.clone());
        }
        assets
    }
}

impl Render for Document {
    fn render(&self, out: &mut Markup) {
        page_shell(out, &self.title, &self.stylesheets, |out| {
            out.push(&self.nav);
            out.blank();
            out.push(&self.body);
        });
    }
}

/// Basic HTML shell shared by pages.
pub fn page_shell(
    out: &mut Markup,
    title: &str,
    stylesheets: &[Stylesheet],
    body: impl FnOnce(&mut Markup),
) {
    out.line("<!DOCTYPE html>");
    out.line(r#"<html lang="en">"#);
    out.blank();
    out.open("<head>");
    out.line(r#"<meta charset="UTF-8">"#);
    out.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
    for sheet in stylesheets {
        let tag = if sheet.typed {
            start_tag(
                "link",
                &[
                    ("rel", "stylesheet"),
                    ("type", "text/css"),
                    ("href", sheet.href.as_str()),
                ],
            )
        } else {
            start_tag("link", &[("rel", "stylesheet"), ("href", sheet.href.as_str())])
        };
        out.line(&tag);
    }
    out.line(&element("title", &[], title));
    out.close("</head>");
    out.blank();
    out.open("<body>");
    body(out);
    out.close("</body>");
    out.blank();
    out.line("</html>");
}
