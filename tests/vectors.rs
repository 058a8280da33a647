use pwdhash::engine::{self, EngineError, Mode};
use pwdhash::legacy;
use pwdhash::site::get_site;

fn site(raw: &str) -> Option<String> {
    get_site(raw).map(|d| d.into_string())
}

/// Test vectors for effective-domain extraction
#[test]
fn site_test_vectors() {
    assert_eq!(site("https://gitlab.freedesktop.org/path").as_deref(), Some("freedesktop.org"));
    assert_eq!(site("https://mail.example.co.uk").as_deref(), Some("example.co.uk"));
    assert_eq!(site("not a url"), None);
    assert_eq!(site("localhost").as_deref(), Some("localhost"));

    // Bare hostnames
    assert_eq!(site("gitlab.freedesktop.org").as_deref(), Some("freedesktop.org"));
    assert_eq!(site("www.example.com.au").as_deref(), Some("example.com.au"));
    assert_eq!(site("example.com").as_deref(), Some("example.com"));

    // URL parts other than the host are ignored
    assert_eq!(
        site("https://user:pw@accounts.google.com:8443/signin?x=1#top").as_deref(),
        Some("google.com")
    );
    assert_eq!(site("http://localhost:3000/").as_deref(), Some("localhost"));
}

#[test]
fn site_multi_part_suffix_heuristic() {
    for sld in ["co", "com", "org", "net", "gov", "edu"] {
        let raw = format!("https://a.b.{sld}.xx/");
        assert_eq!(site(&raw), Some(format!("b.{sld}.xx")));
    }
    // Not in the list: only two labels kept
    assert_eq!(site("https://a.b.ac.uk").as_deref(), Some("ac.uk"));
    // Two labels only: nothing to prepend
    assert_eq!(site("https://co.uk").as_deref(), Some("co.uk"));
}

#[test]
fn site_normalizes_case_and_whitespace() {
    assert_eq!(site("  https://WWW.Example.COM/  ").as_deref(), Some("example.com"));
    // Bare hosts are taken as typed
    assert_eq!(site("Mail.Example.Com").as_deref(), Some("Example.Com"));
    assert_eq!(site("  Example.COM ").as_deref(), Some("Example.COM"));
}

#[test]
fn site_rejects_garbage() {
    assert_eq!(site(""), None);
    assert_eq!(site("   "), None);
    assert_eq!(site("foo/bar.com"), None);
    assert_eq!(site("two words.com"), None);
    assert_eq!(site("file:///etc/passwd"), None);
    assert_eq!(site("under_score"), None);
}

#[test]
fn apply_constraints_rotation_wraps() {
    // No extras: four fallback characters, rotation amount 0
    assert_eq!(legacy::apply_constraints("", 4, false), "Aa0A");
    // Symbol is kept when the master had one
    assert_eq!(legacy::apply_constraints("", 4, true), "Aa0+");
}

#[test]
fn apply_constraints_strips_symbols_for_alphanumeric_masters() {
    // '+' and '/' in the prefix are replaced by upper-case letters
    let out = legacy::apply_constraints("ab+/cd12XYZQ", 8, false);
    assert_eq!(out.len(), 8);
    assert!(out.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn apply_constraints_keeps_code_points() {
    // Non-ASCII input stays as the same characters, counted per code point
    let out = legacy::apply_constraints("aB1\u{e9}xyz\u{e9}", 6, true);
    assert_eq!(out, "1\u{e9}xyaB");
    assert_eq!(out.chars().count(), 6);
}

#[test]
fn engine_rejects_invalid_site() {
    let err = engine::derive("master", "not a url", Mode::Legacy).unwrap_err();
    assert!(matches!(err, EngineError::InvalidDomain(ref s) if s == "not a url"));
}

#[test]
fn mode_names() {
    assert_eq!(Mode::default(), Mode::Modern);
    assert_eq!(Mode::Modern.to_string(), "modern");
    assert_eq!(Mode::Legacy.to_string(), "legacy");
}
