//! Deterministic stub score provider
//!
//! In-process stand-in for the external scoring service. Scores are derived
//! from a stable hash of the request and confined to a configurable band, so
//! the same payer and amount always produce the same decision.

use crate::{PayerId, Result, Score, ScoreProvider};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stub score band configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubScoreConfig {
    /// Lowest score the stub returns
    pub floor: u8,

    /// Highest score the stub returns
    pub ceiling: u8,
}

impl Default for StubScoreConfig {
    fn default() -> Self {
        Self {
            floor: 55,
            ceiling: 95,
        }
    }
}

/// Deterministic score provider
///
/// The default band (55-95) straddles both decision thresholds, so scripted
/// traffic exercises every outcome.
pub struct StubScoreProvider {
    config: StubScoreConfig,
}

impl StubScoreProvider {
    /// Create stub with the default band
    pub fn new() -> Self {
        Self::with_config(StubScoreConfig::default())
    }

    /// Create stub with a custom band
    pub fn with_config(config: StubScoreConfig) -> Self {
        Self { config }
    }
}

impl Default for StubScoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreProvider for StubScoreProvider {
    fn get_score(&self, payer_id: &PayerId, amount: Decimal) -> Result<Score> {
        let mut hasher = Sha256::new();
        hasher.update(payer_id.as_str().as_bytes());
        hasher.update(b"|");
        hasher.update(amount.to_string().as_bytes());
        let digest = hasher.finalize();

        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let hash = u64::from_be_bytes(prefix);

        // Band is inclusive on both ends; a ceiling below the floor pins
        // every score to the floor.
        let band = u64::from(self.config.ceiling.saturating_sub(self.config.floor)) + 1;
        let score = u64::from(self.config.floor) + hash % band;

        Ok(Score::new(score as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stub_is_deterministic() {
        let provider = StubScoreProvider::new();
        let payer = PayerId::new("CUST123");

        let first = provider.get_score(&payer, dec!(100.50)).unwrap();
        let second = provider.get_score(&payer, dec!(100.50)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_stub_stays_in_default_band() {
        let provider = StubScoreProvider::new();

        for i in 0..200 {
            let payer = PayerId::new(format!("CUST{i:04}"));
            let score = provider.get_score(&payer, Decimal::from(i * 17 + 1)).unwrap();
            assert!((55..=95).contains(&score.value()), "score {score} out of band");
        }
    }

    #[test]
    fn test_stub_respects_custom_band() {
        let config = StubScoreConfig {
            floor: 90,
            ceiling: 95,
        };
        let provider = StubScoreProvider::with_config(config);

        for i in 0..50 {
            let payer = PayerId::new(format!("VIP{i}"));
            let score = provider.get_score(&payer, dec!(10.00)).unwrap();
            assert!((90..=95).contains(&score.value()));
        }
    }

    #[test]
    fn test_stub_pinned_band_returns_floor() {
        let config = StubScoreConfig {
            floor: 72,
            ceiling: 72,
        };
        let provider = StubScoreProvider::with_config(config);
        let payer = PayerId::new("ANY");

        let score = provider.get_score(&payer, dec!(1)).unwrap();
        assert_eq!(score, Score::new(72));
    }
}
