//! Password generation - draws from a composed alphabet and embeds the
//! keyword at a random position.

use secrecy::SecretString;

use crate::charset::{Charset, compose};
use crate::types::{GeneratedPassword, GenerationConfig};

/// Source of randomness for one generation call.
///
/// Passed explicitly per call; the crate holds no ambient RNG state, so
/// concurrent calls with independent sources never interfere. Every
/// [`rand::Rng`] implements it, which leaves the strength policy to the
/// caller: `thread_rng()` for convenience, `OsRng` where a CSPRNG is
/// required, a seeded rng for reproducible output.
pub trait RandomSource {
    /// Next uniform index in `[0, bound)`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Draws a password of `length` characters from `alphabet`, splicing
/// `keyword` in at a random position.
///
/// The random fill shrinks to make room for the keyword. A keyword at
/// least as long as `length` becomes the whole output, untruncated, even
/// though that exceeds the requested length.
pub fn generate<R: RandomSource>(
    alphabet: &Charset,
    length: usize,
    keyword: &str,
    rng: &mut R,
) -> GeneratedPassword {
    let keyword_len = keyword.chars().count();
    let fill = length.saturating_sub(keyword_len);

    let pool = alphabet.as_slice();
    let mut chars: Vec<char> = Vec::with_capacity(fill + keyword_len);
    for _ in 0..fill {
        chars.push(pool[rng.next_index(pool.len())]);
    }

    if keyword_len > 0 {
        // Insertion point ranges over [0, fill], both ends included.
        let at = rng.next_index(fill + 1);
        chars.splice(at..at, keyword.chars());
    }

    let value: String = chars.iter().collect();
    GeneratedPassword {
        length: chars.len(),
        value: SecretString::new(value.into()),
    }
}

/// Composes the alphabet for `config` and generates in one call.
pub fn generate_password<R: RandomSource>(
    config: &GenerationConfig,
    rng: &mut R,
) -> GeneratedPassword {
    let alphabet = compose(config);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generating {} chars from a {}-char alphabet",
        config.length,
        alphabet.len()
    );

    generate(&alphabet, config.length, &config.keyword, rng)
}
