//! Tests for the `ere!` macro.

use capgroup::{CaptureMatcher, Dialect, ere};

#[test]
fn ere_yields_static_pattern() {
    let pattern = ere!(r"^(g\.)?([[:digit:]]+)(_([[:digit:]]+))?$");
    assert_eq!(pattern.group_count(), 5);
    assert_eq!(pattern.dialect(), Dialect::Extended);
    assert!(pattern.is_match("g.1_2"));
}

#[test]
fn ere_is_initialised_once() {
    fn pattern() -> &'static capgroup::Pattern {
        ere!("^a(b)?c$")
    }
    assert!(std::ptr::eq(pattern(), pattern()));
}

#[test]
fn ere_feeds_a_matcher() {
    let mut matcher = CaptureMatcher::from_pattern(ere!("^a(b)?c$").clone());
    let groups = matcher.matches("abc").unwrap();
    assert_eq!(groups.extract(1).as_deref(), Some("b"));
}

#[test]
fn ere_compiles_like_pattern_new() {
    let from_macro = ere!("^a.b$");
    let at_run_time = capgroup::Pattern::new("^a.b$").unwrap();

    assert_eq!(from_macro.options(), at_run_time.options());
    for input in ["a\nb", "axb", "ab"] {
        assert_eq!(from_macro.is_match(input), at_run_time.is_match(input), "{input:?}");
    }
    assert!(from_macro.is_match("a\nb"));
}

#[test]
fn ere_alternation() {
    let mut matcher = CaptureMatcher::from_pattern(ere!("^(del|ins)([acgt]+)$").clone());
    let groups = matcher.matches("insacg").unwrap();
    assert_eq!(groups.extract(1).as_deref(), Some("ins"));
    assert_eq!(groups.extract(2).as_deref(), Some("acg"));
    assert!(matcher.matches("del|ins").is_none());
}
