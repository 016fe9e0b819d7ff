//! The three delivered pages and the documents they are built from.

use std::fmt;

use crate::{
    config::{NORMALIZE_CSS, SITE_NAME},
    form::AuthForm,
    markup::Render,
    nav::NavBar,
    profile::{ProfileBody, SearchField},
    templates::{Body, Document},
    types::{NavLink, Stylesheet},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Login,
    Signup,
    Profile,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Login, Page::Signup, Page::Profile];

    /// File name the page is published under.
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Login => "login.php",
            Page::Signup => "signup.php",
            Page::Profile => "profile.php",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.file_name() == name)
    }

    pub fn title(self) -> String {
        match self {
            Page::Login => format!("{SITE_NAME} | Login"),
            Page::Signup => format!("{SITE_NAME} | Sign Up"),
            Page::Profile => "Profile".to_string(),
        }
    }

    fn stylesheets(self) -> Vec<Stylesheet> {
        match self {
            Page::Login | Page::Signup => vec![
                Stylesheet::new(NORMALIZE_CSS),
                Stylesheet::new("styles/login.css"),
            ],
            Page::Profile => vec![
                Stylesheet::typed(NORMALIZE_CSS),
                Stylesheet::new("styles/profile.css"),
            ],
        }
    }

    fn nav(self) -> NavBar {
        let nav = match self {
            Page::Login => NavBar::new(vec![
                NavLink::new("Login", "login.php"),
                NavLink::new("Sign up", "signup.php"),
            ]),
            // register.php is not delivered; kept as published and reported
            // by the link audit.
            Page::Signup => NavBar::new(vec![
                NavLink::new("Login", "login.php"),
                NavLink::new("Sign up", "register.php"),
            ]),
            Page::Profile => NavBar::new(vec![NavLink::new("Profile", "profile.php")])
                .with_search(SearchField::default()),
        };
        nav.mark_active(self.file_name())
    }

    fn body(self) -> Body {
        match self {
            Page::Login => Body::Form(AuthForm::login()),
            Page::Signup => Body::Form(AuthForm::signup()),
            Page::Profile => Body::Profile(ProfileBody::default()),
        }
    }

    pub fn document(self) -> Document {
        Document {
            title: self.title(),
            stylesheets: self.stylesheets(),
            nav: self.nav(),
            body: self.body(),
        }
    }

    pub fn render(self) -> String {
        self.document().to_html()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
