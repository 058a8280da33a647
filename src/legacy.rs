//! Stanford PwdHash compatible derivation (HMAC-MD5).
//!
//! Output must match the historical tool byte for byte, quirks included: when
//! the hash runs out of spare characters the filler is code 0, and the result
//! is rotated by a hash-dependent amount.

use std::collections::VecDeque;

use crate::hmac_md5::{self, HmacError};
use crate::policy::{has_non_word, is_word_char};
use crate::site::EffectiveDomain;

/// Length of the `@@` activation prefix the original browser integration
/// counted into the password size.
const PREFIX_LEN: usize = 2;

/// Slots reserved for the upper, lower, digit and symbol guarantees.
const RESERVED: usize = 4;

/// `b64_hmac_md5(master, domain)` shaped to `len(master) + 2` characters.
///
/// `len(master)` is measured in UTF-16 code units, as in the browser and
/// mobile clients.
pub fn generate_legacy_password(
    master: &str,
    domain: &EffectiveDomain,
) -> Result<String, HmacError> {
    let hash = hmac_md5::b64_hmac_md5(master.as_bytes(), domain.as_str().as_bytes())?;
    let size = master.encode_utf16().count() + PREFIX_LEN;
    let nonalphanumeric = has_non_word(master);
    Ok(apply_constraints(&hash, size, nonalphanumeric))
}

/// Spare hash characters consumed front to back; yields U+0000 once empty.
struct Extras {
    queue: VecDeque<char>,
}

impl Extras {
    fn next(&mut self) -> char {
        self.queue.pop_front().unwrap_or('\0')
    }

    fn next_between(&mut self, base: char, interval: u32) -> char {
        let code = u32::from(base) + u32::from(self.next()) % interval;
        // base + offset stays inside A-Z, a-z or 0-9
        char::from_u32(code).unwrap_or(base)
    }
}

/// Post-processes a hash string so the result contains an upper-case letter,
/// a lower-case letter, a digit and, when `nonalphanumeric`, a symbol; symbols
/// are stripped otherwise. The result is then rotated left.
///
/// Works on code points; `size` and the rotation count characters.
pub fn apply_constraints(hash: &str, size: usize, nonalphanumeric: bool) -> String {
    let hash: Vec<char> = hash.chars().collect();
    let starting = size.saturating_sub(RESERVED).min(hash.len());
    let mut result: Vec<char> = hash[..starting].to_vec();
    let mut extras = Extras {
        queue: hash[starting..].iter().copied().collect(),
    };

    let upper = if result.iter().any(char::is_ascii_uppercase) {
        extras.next()
    } else {
        extras.next_between('A', 26)
    };
    result.push(upper);

    let lower = if result.iter().any(char::is_ascii_lowercase) {
        extras.next()
    } else {
        extras.next_between('a', 26)
    };
    result.push(lower);

    let digit = if result.iter().any(char::is_ascii_digit) {
        extras.next()
    } else {
        extras.next_between('0', 10)
    };
    result.push(digit);

    let symbol = if nonalphanumeric && result.iter().any(|&c| !is_word_char(c)) {
        extras.next()
    } else {
        '+'
    };
    result.push(symbol);

    if !nonalphanumeric {
        while let Some(pos) = result.iter().position(|&c| !is_word_char(c)) {
            result[pos] = extras.next_between('A', 26);
        }
    }

    let amount = u32::from(extras.next()) as usize % result.len();
    result.rotate_left(amount);

    result.into_iter().collect()
}
