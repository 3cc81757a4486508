//! Charset composition - builds the alphabet one generation call draws
//! from.

use crate::types::{Casing, Complexity, GenerationConfig};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Characters easy to misread for one another, dropped in easy-to-read
/// mode.
const AMBIGUOUS: &str = "1lI0O";

/// Alphabet of characters eligible for random selection.
///
/// Ordered, and guaranteed non-empty when produced by [`compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in composition order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Composes the alphabet for a resolved config.
///
/// Appends the selected class ranges in order, filters ambiguous
/// characters in easy-to-read mode, and falls back to the lowercase
/// range when the selection leaves nothing. The generator never sees an
/// empty alphabet.
pub fn compose(config: &GenerationConfig) -> Charset {
    let mut chars: Vec<char> = Vec::new();

    match config.casing {
        Casing::Mixed => {
            chars.extend(UPPERCASE.chars());
            chars.extend(LOWERCASE.chars());
        }
        Casing::LowercaseOnly => chars.extend(LOWERCASE.chars()),
        Casing::None => {}
    }

    // The easy-to-say override also applies at composition time.
    let easy_say = config.complexity == Complexity::EasySay;
    if config.include_numbers && !easy_say {
        chars.extend(DIGITS.chars());
    }
    if config.include_symbols && !easy_say {
        chars.extend(SYMBOLS.chars());
    }

    if config.complexity == Complexity::EasyRead {
        chars.retain(|c| !AMBIGUOUS.contains(*c));
    }

    if chars.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::info!("empty selection, falling back to lowercase alphabet");
        chars.extend(LOWERCASE.chars());
    }

    Charset { chars }
}
