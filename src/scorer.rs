//! Strength scoring - classifies a password string independently of how
//! it was produced.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::types::{StrengthLabel, StrengthScore};

/// Scores a password on the 0-4 scale.
///
/// A pure function of the string alone. Criteria are additive: +1 for
/// length over 8, +1 more over 12, +0.5 each for an uppercase letter and
/// a digit, +1 for any character outside `[A-Za-z0-9]`; the raw total is
/// capped at 4 and floored. The empty string maps to the
/// [`StrengthLabel::NotEvaluated`] sentinel rather than `VeryWeak`.
pub fn score_password(password: &SecretString) -> StrengthScore {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthScore::not_evaluated();
    }

    let length = pwd.chars().count();
    let mut raw = 0.0_f64;
    if length > 8 {
        raw += 1.0;
    }
    if length > 12 {
        raw += 1.0;
    }
    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        raw += 0.5;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        raw += 0.5;
    }
    if pwd.chars().any(|c| !c.is_ascii_alphanumeric()) {
        raw += 1.0;
    }

    let score = raw.min(4.0).floor() as u8;
    let label = match score {
        0 => StrengthLabel::VeryWeak,
        1 => StrengthLabel::Weak,
        2 => StrengthLabel::Fair,
        3 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    };

    StrengthScore { score, label }
}

/// Async version that sends the score via channel.
///
/// Sleeps briefly first so rapid re-scoring (a user typing) can cancel a
/// pending evaluation through the token; a cancelled call delivers the
/// [`StrengthLabel::NotEvaluated`] sentinel instead of a score.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthScore>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    let score = if token.is_cancelled() {
        StrengthScore::not_evaluated()
    } else {
        score_password(password)
    };

    if let Err(_e) = tx.send(score).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength score: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_empty_is_sentinel_not_very_weak() {
        let score = score_password(&secret(""));
        assert_eq!(score.score, 0);
        assert_eq!(score.label, StrengthLabel::NotEvaluated);
        assert_eq!(score.label.to_string(), "");
    }

    #[test]
    fn test_score_short_lowercase_is_very_weak() {
        let score = score_password(&secret("aaaa"));
        assert_eq!(score.score, 0);
        assert_eq!(score.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn test_score_nine_lowercase_is_weak() {
        let score = score_password(&secret("abcdefghi"));
        assert_eq!(score.score, 1);
        assert_eq!(score.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_score_half_point_floors_away() {
        // length > 8 plus one uppercase: raw 1.5 still floors to 1
        let score = score_password(&secret("Abcdefghi"));
        assert_eq!(score.score, 1);
        assert_eq!(score.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_score_both_half_points_make_a_whole() {
        // raw 1 + 0.5 + 0.5 = 2
        let score = score_password(&secret("Abcdefgh1"));
        assert_eq!(score.score, 2);
        assert_eq!(score.label, StrengthLabel::Fair);
    }

    #[test]
    fn test_score_thirteen_lowercase_is_fair() {
        let score = score_password(&secret("abcdefghijklm"));
        assert_eq!(score.score, 2);
        assert_eq!(score.label, StrengthLabel::Fair);
    }

    #[test]
    fn test_score_symbol_counts_full_point() {
        // length > 8 and one symbol: raw 2
        let score = score_password(&secret("abcdefgh!j"));
        assert_eq!(score.score, 2);
        assert_eq!(score.label, StrengthLabel::Fair);
    }

    #[test]
    fn test_score_long_mixed_with_symbol_is_good() {
        // 13 chars, uppercase, symbol: 1 + 1 + 0.5 + 1 = 3.5
        let score = score_password(&secret("Abcdefghijk!m"));
        assert_eq!(score.score, 3);
        assert_eq!(score.label, StrengthLabel::Good);
    }

    #[test]
    fn test_score_all_criteria_is_strong() {
        let score = score_password(&secret("Abcdefghij12!@"));
        assert_eq!(score.score, 4);
        assert_eq!(score.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_score_caps_at_four() {
        let score = score_password(&secret("Extremely-Long-Passphrase-2024!!"));
        assert_eq!(score.score, 4);
        assert_eq!(score.label, StrengthLabel::Strong);
    }

    #[test]
    fn test_score_exactly_eight_gains_no_length_point() {
        let score = score_password(&secret("abcdefgh"));
        assert_eq!(score.score, 0);
        assert_eq!(score.label, StrengthLabel::VeryWeak);
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_score_tx_delivers_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        score_password_tx(&secret("Abcdefghij12!@"), token, tx).await;

        let score = rx.recv().await.expect("Should receive score");
        assert_eq!(score.score, 4);
        assert_eq!(score.label, StrengthLabel::Strong);
    }

    #[tokio::test]
    async fn test_score_tx_cancelled_sends_sentinel() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        score_password_tx(&secret("Abcdefghij12!@"), token, tx).await;

        let score = rx.recv().await.expect("Should receive score");
        assert_eq!(score.label, StrengthLabel::NotEvaluated);
        assert_eq!(score.score, 0);
    }
}
