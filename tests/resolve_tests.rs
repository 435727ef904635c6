#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Reference resolution tests
///
/// Fixture-driven cases live under `rfc3986/`; the tests below cover
/// properties of individual resolutions.
#[path = "rfc3986/resolve_loader.rs"]
mod resolve_loader;

#[path = "rfc3986/resolve_runner.rs"]
mod resolve_runner;

use uriel::{ParsingMode, Url};

fn parse(input: &str) -> Url {
    Url::parse(input, ParsingMode::Tolerant)
}

fn resolve(base: &str, relative: &str) -> Url {
    parse(base).resolved(&parse(relative))
}

#[test]
fn test_resolved_paths_have_no_dot_segments() {
    let base = parse("http://a/b/c/d;p?q");
    for relative in ["./g", "g/./h", "../../../g", "./g/.", "g;x=1/../y"] {
        let target = base.resolved(&parse(relative));
        let path = target.path();
        assert!(!path.contains("/./"), "{relative} -> {path}");
        assert!(!path.contains("/../"), "{relative} -> {path}");
        assert!(!path.ends_with("/."), "{relative} -> {path}");
        assert!(!path.ends_with("/.."), "{relative} -> {path}");
    }
}

#[test]
fn test_fragment_always_comes_from_reference() {
    assert_eq!(resolve("http://a/b#base", "c").fragment(), None);
    assert_eq!(resolve("http://a/b#base", "").fragment(), None);
    assert_eq!(resolve("http://a/b", "#x").fragment(), Some("x"));
}

#[test]
fn test_reference_with_authority_keeps_its_port_and_user() {
    let target = resolve("http://a:1/b", "//u@g:2/x?y");
    assert_eq!(target.scheme(), Some("http"));
    assert_eq!(target.user_name(), Some("u"));
    assert_eq!(target.host(), Some("g"));
    assert_eq!(target.port(), Some(2));
    assert_eq!(target.path(), "/x");
    assert_eq!(target.query(), Some("y"));
}

#[test]
fn test_base_user_info_survives_relative_path() {
    let target = resolve("ftp://u:p@a/dir/file", "other");
    assert_eq!(target.user_name(), Some("u"));
    assert_eq!(target.password(), Some("p"));
    assert_eq!(target.to_encoded(), "ftp://u:p@a/dir/other");
}

#[test]
fn test_base_with_empty_host_keeps_reference_rootless() {
    let target = resolve("file://", "x");
    assert_eq!(target.host(), Some(""));
    assert_eq!(target.path(), "x");

    let target = resolve("http://a", "x");
    assert_eq!(target.path(), "/x");
}

#[test]
fn test_base_without_authority() {
    assert_eq!(resolve("mailto:x@y", "#top").to_string(), "mailto:x@y#top");
    assert_eq!(resolve("urn:a/b", "c").to_string(), "urn:a/c");
}

#[test]
fn test_resolving_against_self_is_stable() {
    let url = parse("http://a/b/c?q#f");
    let target = url.resolved(&url);
    assert_eq!(target, url);
    assert!(target.is_valid());
}

#[test]
fn test_invalid_reference_taken_whole_stays_invalid() {
    let target = resolve("http://a/b", "ftp://[::1/x");
    assert!(!target.is_valid());
}
