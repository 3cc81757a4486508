//! Configuration resolution - collapses raw option flags into a
//! consistent [`GenerationConfig`] and guards the option-change boundary.

use thiserror::Error;

use crate::types::{Casing, Complexity, GenerationConfig};

/// Option flags as a caller's controls hold them, before resolution.
///
/// Casing is still two independent checkboxes at this level; [`resolve`]
/// collapses them. Contradictory states are representable on the way in,
/// never on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawOptions {
    pub mixed: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

/// Identifies one of the four toggles at the option-change boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    Mixed,
    Lowercase,
    Numbers,
    Symbols,
}

/// Signal that a toggle was refused outright, options left untouched.
///
/// Distinct from [`Resolution::suppressed`]: the flag reports selections
/// dropped while switching into easy-to-say mode, this error reports an
/// attempt to toggle them while already in it. Callers word the two
/// warnings differently.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("numbers and symbols are not available in easy-to-say mode")]
pub struct ToggleRejected {
    pub key: OptionKey,
}

/// Outcome of resolving raw options against a complexity mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub config: GenerationConfig,
    /// True when easy-to-say mode dropped an active numbers or symbols
    /// selection. The raw flags keep their stored values; only the
    /// resolved copy is forced off.
    pub suppressed: bool,
}

/// Resolves raw option flags into a [`GenerationConfig`].
///
/// Pure and total: every combination resolves, contradictions are
/// corrected deterministically instead of rejected. An empty selection
/// (no casing, numbers or symbols) is a legal resolution; the composer's
/// fallback handles it downstream.
pub fn resolve(
    options: &RawOptions,
    complexity: Complexity,
    keyword: &str,
    length: usize,
) -> Resolution {
    // Mixed wins when both casing flags are set.
    let casing = if options.mixed {
        Casing::Mixed
    } else if options.lowercase {
        Casing::LowercaseOnly
    } else {
        Casing::None
    };

    let easy_say = complexity == Complexity::EasySay;
    let suppressed = easy_say && (options.numbers || options.symbols);

    #[cfg(feature = "tracing")]
    if suppressed {
        tracing::info!("easy-to-say mode suppressed numbers/symbols selection");
    }

    Resolution {
        config: GenerationConfig {
            casing,
            include_numbers: options.numbers && !easy_say,
            include_symbols: options.symbols && !easy_say,
            complexity,
            length,
            keyword: keyword.to_string(),
        },
        suppressed,
    }
}

/// Applies a single toggle at the option-change boundary.
///
/// Enabling one casing flag clears the other. While easy-to-say mode is
/// active, numbers and symbols toggles are refused wholesale and
/// `options` is left unchanged.
pub fn toggle_option(
    options: &mut RawOptions,
    key: OptionKey,
    complexity: Complexity,
) -> Result<(), ToggleRejected> {
    if complexity == Complexity::EasySay
        && matches!(key, OptionKey::Numbers | OptionKey::Symbols)
    {
        return Err(ToggleRejected { key });
    }

    match key {
        OptionKey::Mixed => {
            options.mixed = !options.mixed;
            if options.mixed {
                options.lowercase = false;
            }
        }
        OptionKey::Lowercase => {
            options.lowercase = !options.lowercase;
            if options.lowercase {
                options.mixed = false;
            }
        }
        OptionKey::Numbers => options.numbers = !options.numbers,
        OptionKey::Symbols => options.symbols = !options.symbols,
    }

    Ok(())
}
