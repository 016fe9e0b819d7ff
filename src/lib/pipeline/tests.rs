use std::{
    fs,
    path::{Path, PathBuf},
};

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use scraper::{Html, Selector};
use tempfile::TempDir;
use walkdir::WalkDir;

use super::{BuildOptions, build_at};
use crate::{config::OUTPUT_DIR, pages::Page};

fn seed(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn seed_assets(root: &Path) {
    seed(root, "styles/normalize.css", "html { line-height: 1.15; }\n");
    seed(root, "styles/login.css", ".form { margin: 0 auto; }\n");
    seed(root, "styles/profile.css", ".profile-hero { padding: 8px; }\n");
    seed(root, "images/EPITA-white.svg", "<svg></svg>");
    seed(root, "images/profile-photo.png", "png");
}

fn snapshot(root: &Path) -> std::io::Result<Vec<(PathBuf, Vec<u8>)>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            out.push((rel, fs::read(entry.path())?));
        }
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

#[test]
fn build_writes_every_page() {
    let tmp = TempDir::new().expect("tempdir");
    let report = build_at(tmp.path(), &BuildOptions::default()).unwrap();

    assert_eq!(report.pages.len(), 3);
    for page in Page::ALL {
        let path = tmp.path().join(OUTPUT_DIR).join(page.file_name());
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, page.render());
    }
    assert!(!tmp.path().join(OUTPUT_DIR).join("register.php").exists());
}

#[test]
fn build_reports_dangling_link_and_missing_assets() {
    let tmp = TempDir::new().expect("tempdir");
    let report = build_at(tmp.path(), &BuildOptions::default()).unwrap();

    let dangling: Vec<&str> = report.links.dangling().map(|e| e.href.as_str()).collect();
    assert_eq!(dangling, ["register.php"]);
    assert_eq!(report.missing_assets.len(), 10);
    assert!(report.assets.is_empty());
}

#[test]
fn build_copies_assets_and_resolves_references() {
    let tmp = TempDir::new().expect("tempdir");
    seed_assets(tmp.path());

    let report = build_at(tmp.path(), &BuildOptions::default()).unwrap();
    assert_eq!(report.assets.len(), 5);
    assert!(report.missing_assets.is_empty());
    assert!(tmp.path().join(OUTPUT_DIR).join("images/profile-photo.png").is_file());
}

#[test]
fn custom_output_dir_is_honoured() {
    let tmp = TempDir::new().expect("tempdir");
    let options = BuildOptions {
        output_dir: PathBuf::from("dist/site"),
        minify: false,
    };
    let report = build_at(tmp.path(), &options).unwrap();
    assert_eq!(report.output_dir, tmp.path().join("dist/site"));
    assert!(tmp.path().join("dist/site/login.php").is_file());
}

#[test]
fn minified_pages_keep_their_structure() {
    let tmp = TempDir::new().expect("tempdir");
    seed_assets(tmp.path());
    let options = BuildOptions {
        minify: true,
        ..BuildOptions::default()
    };
    let report = build_at(tmp.path(), &options).unwrap();

    let signup = report
        .pages
        .iter()
        .find(|p| p.page == Page::Signup)
        .unwrap();
    assert!(signup.html.len() < Page::Signup.render().len());

    let doc = Html::parse_document(&signup.html);
    let inputs = Selector::parse("form input").unwrap();
    assert_eq!(doc.select(&inputs).count(), 5);

    let css = fs::read_to_string(tmp.path().join(OUTPUT_DIR).join("styles/login.css")).unwrap();
    assert!(!css.contains('\n'));
}

#[test]
fn site_root_as_output_is_refused() {
    let tmp = TempDir::new().expect("tempdir");
    seed(tmp.path(), "styles/login.css", ".form { margin: 0 auto; }");

    for out in [".", "./", "public/.."] {
        let options = BuildOptions {
            output_dir: PathBuf::from(out),
            minify: false,
        };
        assert!(build_at(tmp.path(), &options).is_err(), "{out}");
    }

    let css = fs::read_to_string(tmp.path().join("styles/login.css")).unwrap();
    assert_eq!(css, ".form { margin: 0 auto; }");
    assert!(!tmp.path().join("login.php").exists());
}

#[test]
fn output_inside_asset_dirs_is_refused() {
    let tmp = TempDir::new().expect("tempdir");
    seed_assets(tmp.path());

    for out in ["styles", "images/site", "public/../styles/build"] {
        let options = BuildOptions {
            output_dir: PathBuf::from(out),
            minify: false,
        };
        assert!(build_at(tmp.path(), &options).is_err(), "{out}");
    }
    assert!(!tmp.path().join("styles/build").exists());
    assert_eq!(
        fs::read_to_string(tmp.path().join("images/profile-photo.png")).unwrap(),
        "png"
    );
}

#[test]
fn absolute_output_dir_elsewhere_is_accepted() {
    let root = TempDir::new().expect("tempdir");
    let out = TempDir::new().expect("tempdir");
    seed_assets(root.path());

    let options = BuildOptions {
        output_dir: out.path().to_path_buf(),
        minify: false,
    };
    build_at(root.path(), &options).unwrap();
    assert_eq!(
        fs::read_to_string(out.path().join("styles/login.css")).unwrap(),
        ".form { margin: 0 auto; }\n"
    );
}

#[test]
fn minified_forms_keep_field_order_and_types() {
    let tmp = TempDir::new().expect("tempdir");
    let options = BuildOptions {
        minify: true,
        ..BuildOptions::default()
    };
    let report = build_at(tmp.path(), &options).unwrap();

    let expected: [(Page, &[(&str, &str)]); 2] = [
        (Page::Login, &[("email", "text"), ("password", "password")]),
        (
            Page::Signup,
            &[
                ("first-name", "text"),
                ("last-name", "text"),
                ("email", "text"),
                ("password", "password"),
                ("confirm-password", "password"),
            ],
        ),
    ];
    let inputs = Selector::parse("form input").unwrap();
    for (page, fields) in expected {
        let emitted = report.pages.iter().find(|p| p.page == page).unwrap();
        let doc = Html::parse_document(&emitted.html);
        let got: Vec<(&str, &str)> = doc
            .select(&inputs)
            .map(|i| {
                let v = i.value();
                (v.attr("name").unwrap(), v.attr("type").unwrap())
            })
            .collect();
        assert_eq!(got, fields, "{page}");
    }
}

#[test]
fn build_is_deterministic_across_runs() {
    let mut runner = TestRunner::new(Config {
        cases: 8,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&any::<bool>(), |minify| {
            let tmp = TempDir::new().expect("tempdir");
            seed_assets(tmp.path());
            let options = BuildOptions {
                minify,
                ..BuildOptions::default()
            };
            let out = tmp.path().join(OUTPUT_DIR);

            build_at(tmp.path(), &options).unwrap();
            let first = snapshot(&out).unwrap();
            build_at(tmp.path(), &options).unwrap();
            let second = snapshot(&out).unwrap();

            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}
