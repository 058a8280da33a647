// Fixed, ordered ASCII character sets. Order and contents are part of the
// derivation: every platform indexes into these exact byte strings.
pub const LOWER_BYTES: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPER_BYTES: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_BYTES: &[u8] = b"0123456789";
pub const SYMBOL_BYTES: &[u8] = b"!@#$%^&*()_-+=";

/// `LOWER_BYTES ++ UPPER_BYTES ++ DIGIT_BYTES ++ SYMBOL_BYTES`
pub const ALL_BYTES: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_-+=";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Charset {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl Charset {
    pub const ALL: [Charset; 4] = [Charset::Lower, Charset::Upper, Charset::Digit, Charset::Symbol];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Charset::Lower => LOWER_BYTES,
            Charset::Upper => UPPER_BYTES,
            Charset::Digit => DIGIT_BYTES,
            Charset::Symbol => SYMBOL_BYTES,
        }
    }

    pub fn contains(self, b: u8) -> bool {
        self.alphabet().contains(&b)
    }
}

/// True when every one of the four sets is represented in `password`.
pub fn has_every_class(password: &str) -> bool {
    Charset::ALL
        .iter()
        .all(|set| password.bytes().any(|b| set.contains(b)))
}

/// Regex `\w`: `[A-Za-z0-9_]`. Everything else, NUL and non-ASCII included, is
/// a non-word character.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Regex `\W` over a whole string.
pub fn has_non_word(s: &str) -> bool {
    s.chars().any(|c| !is_word_char(c))
}
