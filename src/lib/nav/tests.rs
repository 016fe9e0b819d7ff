use scraper::{Html, Selector};

use super::NavBar;
use crate::{markup::Render, profile::SearchField, types::NavLink};

fn auth_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Login", "login.php"),
        NavLink::new("Sign up", "signup.php"),
    ]
}

#[test]
fn logo_is_first_child() {
    for nav in [
        NavBar::new(auth_links()),
        NavBar::new(vec![NavLink::new("Profile", "profile.php")]).with_search(SearchField::default()),
    ] {
        let doc = Html::parse_fragment(&nav.to_html());
        let first = Selector::parse("nav > :first-child").unwrap();
        let first = doc.select(&first).next().unwrap();
        assert_eq!(first.value().name(), "a");
        assert_eq!(first.value().attr("href"), Some(""));
        let img = Selector::parse("img.nav-logo").unwrap();
        assert!(first.select(&img).next().is_some());
    }
}

#[test]
fn links_render_in_order() {
    let doc = Html::parse_fragment(&NavBar::new(auth_links()).to_html());
    let links = Selector::parse("nav ul li a.nav-link").unwrap();
    let rendered: Vec<(String, String)> = doc
        .select(&links)
        .map(|a| {
            (
                a.text().collect(),
                a.value().attr("href").unwrap_or_default().to_string(),
            )
        })
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("Login".to_string(), "login.php".to_string()),
            ("Sign up".to_string(), "signup.php".to_string()),
        ]
    );
}

#[test]
fn search_sits_between_logo_and_links() {
    let html = NavBar::new(vec![NavLink::new("Profile", "profile.php")])
        .with_search(SearchField::default())
        .to_html();
    let logo = html.find("nav-logo").unwrap();
    let search = html.find("searchbar").unwrap();
    let list = html.find("<ul>").unwrap();
    assert!(logo < search && search < list);
}

#[test]
fn mark_active_flags_matching_links_only() {
    let nav = NavBar::new(auth_links()).mark_active("signup.php");
    let active: Vec<_> = nav.links.iter().map(|l| l.active).collect();
    assert_eq!(active, vec![false, true]);
    assert!(!nav.to_html().contains("active"));
}

#[test]
fn anchors_start_with_logo() {
    let anchors = NavBar::new(auth_links()).anchors();
    assert_eq!(anchors.len(), 3);
    assert!(anchors[0].href.is_empty());
    assert_eq!(anchors[2].href.as_str(), "signup.php");
}
