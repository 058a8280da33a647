use std::fmt;

use url::Url;

/// Second-level labels treated as part of a public suffix (`co.uk`, `com.au`, ...).
///
/// A heuristic, not a public-suffix list. Changing it changes derived passwords.
const COMMON_SECOND_LEVELS: [&str; 6] = ["co", "com", "org", "net", "gov", "edu"];

/// The registrable domain used as PBKDF2 salt / HMAC message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EffectiveDomain(String);

impl EffectiveDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EffectiveDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectiveDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the effective domain from a URL or bare hostname.
///
/// `https://gitlab.freedesktop.org/path` gives `freedesktop.org`,
/// `mail.example.co.uk` gives `example.co.uk`, `localhost` stays `localhost`.
/// Returns `None` when no hostname can be found.
pub fn get_site(raw: &str) -> Option<EffectiveDomain> {
    let raw = raw.trim();
    let host = host_of(raw)?;

    let parts: Vec<&str> = host.split('.').rev().collect();
    if parts.len() <= 1 {
        return Some(EffectiveDomain(host));
    }

    let domain = format!("{}.{}", parts[1], parts[0]);
    if parts.len() > 2 && COMMON_SECOND_LEVELS.contains(&parts[1]) {
        return Some(EffectiveDomain(format!("{}.{}", parts[2], domain)));
    }
    Some(EffectiveDomain(domain))
}

fn host_of(raw: &str) -> Option<String> {
    if let Ok(url) = Url::parse(raw) {
        if let Some(host) = url.host_str() {
            if !host.is_empty() {
                return Some(host.to_string());
            }
        }
    }
    bare_host(raw)
}

/// Typed input used as-is. Case is kept: it is part of the salt on every
/// client that falls back to the raw string.
fn bare_host(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.contains('/') || raw.chars().any(char::is_whitespace) {
        return None;
    }
    let single_label = raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
    if raw.contains('.') || single_label {
        Some(raw.to_string())
    } else {
        None
    }
}
