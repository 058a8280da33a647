use std::collections::BTreeSet;

use pwdhash::generator::{self, PASSWORD_LEN};
use pwdhash::legacy;
use pwdhash::policy::{self, Charset, SYMBOL_BYTES};
use pwdhash::site::{get_site, EffectiveDomain};
use sha2::{Digest, Sha256};

/// Effective domain for a hostname that `get_site` passes through unchanged.
fn domain(host: &str) -> EffectiveDomain {
    let d = get_site(host).unwrap();
    assert_eq!(d.as_str(), host);
    d
}

/// Pseudo-random 32-byte keys, so class invariants can be checked without
/// running PBKDF2 thousands of times.
fn sample_key(i: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    key.copy_from_slice(&Sha256::digest(i.to_be_bytes()));
    key
}

#[test]
fn determinism_same_inputs_same_output() {
    let p1 = generator::generate_secure_password("master", &domain("example.com")).unwrap();
    let p2 = generator::generate_secure_password("master", &domain("example.com")).unwrap();
    assert_eq!(p1, p2);

    let l1 = legacy::generate_legacy_password("master", &domain("example.com")).unwrap();
    let l2 = legacy::generate_legacy_password("master", &domain("example.com")).unwrap();
    assert_eq!(l1, l2);
}

#[test]
fn modern_length_and_classes() {
    for i in 0..2000 {
        let s = generator::password_from_key(&sample_key(i));
        assert_eq!(s.len(), PASSWORD_LEN);
        assert!(policy::has_every_class(&s), "missing a character class in {s:?}");
        for b in s.bytes() {
            assert!(policy::ALL_BYTES.contains(&b), "byte {} outside alphabet", b);
        }
    }
}

#[test]
fn modern_symbols_come_from_fixed_set() {
    for i in 0..500 {
        let s = generator::password_from_key(&sample_key(i));
        let symbols: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_alphanumeric()).collect();
        assert!(!symbols.is_empty());
        assert!(symbols.iter().all(|b| SYMBOL_BYTES.contains(b)));
        assert!(symbols.iter().all(|&b| Charset::Symbol.contains(b)));
    }
}

#[test]
fn shuffle_sanity_first_char_varies() {
    let mut first_chars = BTreeSet::new();
    for i in 0..50 {
        let s = generator::password_from_key(&sample_key(i));
        first_chars.insert(s.as_bytes()[0]);
    }
    assert!(first_chars.len() > 1, "first character distribution seems constant");
}

#[test]
fn modern_domain_changes_output() {
    let domains = ["a.com", "b.com", "c.org"];
    let outputs: BTreeSet<String> = domains
        .iter()
        .map(|d| generator::generate_secure_password("master", &domain(d)).unwrap())
        .collect();
    assert_eq!(outputs.len(), domains.len());
}

#[test]
fn legacy_domain_changes_output() {
    let outputs: BTreeSet<String> = (0..200)
        .map(|i| legacy::generate_legacy_password("correct-horse", &domain(&format!("site{i}.com"))).unwrap())
        .collect();
    assert_eq!(outputs.len(), 200);
}

#[test]
fn legacy_length_is_master_plus_two() {
    for len in 4..=20 {
        let master: String = "aB3_x!".chars().cycle().take(len).collect();
        let s = legacy::generate_legacy_password(&master, &domain("example.com")).unwrap();
        assert_eq!(s.chars().count(), len + 2, "master length {len}");
    }
}

#[test]
fn legacy_length_counts_utf16_units() {
    // U+1F511 is two UTF-16 code units
    let s = legacy::generate_legacy_password("key\u{1F511}", &domain("example.com")).unwrap();
    assert_eq!(s.len(), 5 + 2);
}

#[test]
fn legacy_alphanumeric_master_yields_no_symbols() {
    for i in 0..200 {
        let s = legacy::generate_legacy_password("plainpassword", &domain(&format!("host{i}.net"))).unwrap();
        assert!(!policy::has_non_word(&s), "unexpected symbol in {s:?}");
        assert!(s.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(s.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(s.bytes().any(|b| b.is_ascii_digit()));
    }
}

#[test]
fn legacy_symbolic_master_yields_symbol() {
    for i in 0..200 {
        let s = legacy::generate_legacy_password("pa$$word", &domain(&format!("host{i}.net"))).unwrap();
        assert!(policy::has_non_word(&s), "no symbol in {s:?}");
    }
}
