//! Core data model shared by the generation pipeline and the scorer.

use std::fmt;

use secrecy::SecretString;

/// Smallest length the caller-facing controls offer.
pub const MIN_LENGTH: usize = 8;

/// Largest length the caller-facing controls offer.
pub const MAX_LENGTH: usize = 64;

/// Length presented before the user touches anything.
pub const DEFAULT_LENGTH: usize = 16;

/// Clamps a requested length into `[MIN_LENGTH, MAX_LENGTH]`.
///
/// The pipeline itself tolerates any length (an oversized keyword may
/// even exceed it); this helper is for callers that accept free-form
/// length input.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Letter-case selection, resolved to a single value.
///
/// The two historical checkbox flags collapse into this tri-state, so a
/// config that is both mixed-case and lowercase-only cannot exist past
/// the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Casing {
    /// No letters requested.
    #[default]
    None,
    LowercaseOnly,
    Mixed,
}

/// Complexity mode restricting the composed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Complexity {
    /// No restriction.
    #[default]
    Unique,
    /// Excludes the visually ambiguous characters `1 l I 0 O`.
    EasyRead,
    /// Excludes numbers and symbols entirely.
    EasySay,
}

/// Resolved input to charset composition and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub casing: Casing,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub complexity: Complexity,
    pub length: usize,
    pub keyword: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            casing: Casing::None,
            include_numbers: false,
            include_symbols: false,
            complexity: Complexity::Unique,
            length: DEFAULT_LENGTH,
            keyword: String::new(),
        }
    }
}

/// A freshly generated password.
#[derive(Debug, Clone)]
pub struct GeneratedPassword {
    pub value: SecretString,
    /// Character count of `value`. Exceeds the requested length when the
    /// keyword alone is longer, since keywords are never truncated.
    pub length: usize,
}

/// Strength classification on the 0-4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    /// Sentinel for "nothing to evaluate": empty input, or a cancelled
    /// evaluation. Renders as an empty string and is distinct from
    /// `VeryWeak`.
    NotEvaluated,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthLabel::NotEvaluated => "",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        })
    }
}

/// Scored strength of a password string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthScore {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthScore {
    /// The "not yet evaluated" sentinel.
    pub fn not_evaluated() -> Self {
        Self {
            score: 0,
            label: StrengthLabel::NotEvaluated,
        }
    }
}
