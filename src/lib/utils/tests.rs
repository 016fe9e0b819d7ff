use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{escape_attr, escape_text};

#[test]
fn escape_text_removes_angle_brackets() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let escaped = escape_text(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            Ok(())
        })
        .unwrap();
}

#[test]
fn escape_text_noops_when_safe() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^<>&]*", |s| {
            prop_assert_eq!(escape_text(&s), s);
            Ok(())
        })
        .unwrap();
}

#[test]
fn escape_attr_removes_double_quotes() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let escaped = escape_attr(&s);
            for ch in ['<', '>', '"'] {
                prop_assert!(!escaped.contains(ch));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn apostrophes_survive_text_escaping() {
    assert_eq!(
        escape_text("Don't have an account?"),
        "Don't have an account?"
    );
    assert_eq!(escape_text("Q&A"), "Q&amp;A");
}
