//! Password generation and strength scoring core
//!
//! This library composes an alphabet from character-class selections and
//! a complexity mode, draws a random password from it, embeds an
//! optional keyword at a random position, and scores the result's
//! strength on a 0-4 scale. Randomness is always injected per call, so
//! output is reproducible under test and the strength of the source is
//! the caller's policy.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{Complexity, RawOptions, generate_password, resolve, score_password};
//!
//! let options = RawOptions {
//!     mixed: true,
//!     numbers: true,
//!     ..Default::default()
//! };
//! let resolution = resolve(&options, Complexity::EasyRead, "Dog", 16);
//!
//! let mut rng = rand::thread_rng();
//! let password = generate_password(&resolution.config, &mut rng);
//! assert_eq!(password.length, 16);
//!
//! let strength = score_password(&password.value);
//! println!("Strength: {}", strength.label);
//! ```

// Core data model
mod types;

// Internal modules
mod charset;
mod generator;
mod resolver;
mod scorer;

// Public API
pub use charset::{Charset, compose};
pub use generator::{RandomSource, generate, generate_password};
pub use resolver::{OptionKey, RawOptions, Resolution, ToggleRejected, resolve, toggle_option};
pub use scorer::score_password;
pub use types::{
    Casing, Complexity, DEFAULT_LENGTH, GeneratedPassword, GenerationConfig, MAX_LENGTH,
    MIN_LENGTH, StrengthLabel, StrengthScore, clamp_length,
};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
