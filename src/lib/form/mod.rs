//! Login and signup forms.
//!
//! The `<form>` carries no `action` or `method`, so submitting it neither
//! navigates nor sends a request. Fields are never validated: signup does
//! not compare the two passwords.

use crate::{
    markup::{Markup, Render, element, start_tag},
    types::{Anchor, FormField, Href},
};

const FORM_COMMENT: &str = "<!-- Login Form -->";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormItem {
    Field(FormField),
    /// `<br>` between groups of inputs.
    Break,
}

/// "Don't have an account? Sign up" line under the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPrompt {
    pub text: String,
    pub link_label: String,
    pub href: Href,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    pub title: String,
    pub message: String,
    pub items: Vec<FormItem>,
    pub submit_label: String,
    pub prompt: FormPrompt,
}

impl AuthForm {
    pub fn login() -> Self {
        Self {
            title: "Login to Epibook".to_string(),
            message: "Nice to see you again!".to_string(),
            items: vec![
                FormItem::Field(FormField::text("email", "Email")),
                FormItem::Field(FormField::password("password", "Password")),
                FormItem::Break,
            ],
            submit_label: "Login".to_string(),
            prompt: FormPrompt {
                text: "Don't have an account?".to_string(),
                link_label: "Sign up".to_string(),
                href: Href::new("signup.php"),
            },
        }
    }

    pub fn signup() -> Self {
        Self {
            title: "Sign up for Epibook".to_string(),
            message: "Welcome to EPIbook!".to_string(),
            items: vec![
                FormItem::Field(FormField::text("first-name", "First Name")),
                FormItem::Field(FormField::text("last-name", "Last Name")),
                FormItem::Break,
                FormItem::Field(FormField::text("email", "Email")),
                FormItem::Field(FormField::password("password", "Password")),
                FormItem::Field(FormField::password("confirm-password", "Confirm Password")),
                FormItem::Break,
            ],
            // The signup button reads "Login" on the live page too.
            submit_label: "Login".to_string(),
            prompt: FormPrompt {
                text: "Already have an account?".to_string(),
                link_label: "Log in".to_string(),
                href: Href::new("login.php"),
            },
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.items.iter().filter_map(|item| match item {
            FormItem::Field(field) => Some(field),
            FormItem::Break => None,
        })
    }

    pub fn anchors(&self) -> Vec<Anchor> {
        vec![Anchor {
            label: self.prompt.link_label.clone(),
            href: self.prompt.href.clone(),
        }]
    }
}

impl Render for FormField {
    fn render(&self, out: &mut Markup) {
        out.line(&start_tag(
            "input",
            &[
                ("type", self.kind.as_str()),
                ("name", &self.name),
                ("id", &self.name),
                ("placeholder", &self.placeholder),
                ("class", "input"),
            ],
        ));
    }
}

impl Render for AuthForm {
    fn render(&self, out: &mut Markup) {
        out.line(FORM_COMMENT);
        out.open(r#"<form class="form">"#);
        out.line(&element("p", &[("class", "login-title")], &self.title));
        out.line(&element("p", &[("class", "login-message")], &self.message));
        for item in &self.items {
            match item {
                FormItem::Field(field) => out.push(field),
                FormItem::Break => out.line("<br>"),
            }
        }
        out.line(&element(
            "button",
            &[("type", "submit"), ("class", "button submit-button")],
            &self.submit_label,
        ));
        let link = element(
            "a",
            &[("href", self.prompt.href.as_str()), ("class", "login-link")],
            &self.prompt.link_label,
        );
        out.line(&format!(
            "{}{} {link}</p>",
            start_tag("p", &[("class", "login-message")]),
            crate::utils::escape_text(&self.prompt.text),
        ));
        out.close("</form>");
    }
}
