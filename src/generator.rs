use crate::kdf::{self, KDF_OUT_LEN};
use crate::policy::{Charset, ALL_BYTES};
use crate::site::EffectiveDomain;
use thiserror::Error;
use zeroize::Zeroize;

/// Fixed output length of the modern algorithm.
pub const PASSWORD_LEN: usize = 16;

#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Kdf(#[from] kdf::KdfError),
}

/// Modern derivation: PBKDF2-HMAC-SHA256 over (master, domain), then
/// [`password_from_key`].
///
/// Empty master passwords are accepted; rejecting them is up to the caller.
pub fn generate_secure_password(
    master: &str,
    domain: &EffectiveDomain,
) -> Result<String, GenError> {
    let key = kdf::derive_site_key(master, domain.as_str())?;
    Ok(password_from_key(&key))
}

/// Maps 32 key bytes to a 16-character password holding at least one character
/// of each class.
pub fn password_from_key(key: &[u8; KDF_OUT_LEN]) -> String {
    let mut out = Vec::<u8>::with_capacity(PASSWORD_LEN);

    // Forced picks: fixed order lower -> upper -> digit -> symbol, key bytes 0..4
    for (set, &byte) in Charset::ALL.iter().zip(key.iter()) {
        let alphabet = set.alphabet();
        out.push(alphabet[byte as usize % alphabet.len()]);
    }

    for i in out.len()..PASSWORD_LEN {
        let byte = key[i % KDF_OUT_LEN];
        out.push(ALL_BYTES[byte as usize % ALL_BYTES.len()]);
    }

    // Deterministic Fisher–Yates shuffle driven by the upper key half.
    // i == 0 would be a self-swap, so the loop stops at 1.
    for i in (1..PASSWORD_LEN).rev() {
        let byte = key[(PASSWORD_LEN + i) % KDF_OUT_LEN];
        let j = byte as usize % (i + 1);
        out.swap(i, j);
    }

    // All bytes come from the ASCII tables above.
    let password = out.iter().map(|&b| char::from(b)).collect();
    out.zeroize();
    password
}
