//! Score provider interface

use crate::{PayerId, Result, Score};
use rust_decimal::Decimal;

/// External risk scoring capability
///
/// One attempt per call: no retries, no caching, no fallback score. Any
/// deadline is the implementation's own and surfaces as a timeout error.
pub trait ScoreProvider: Send + Sync {
    /// Fetch the risk score for a payer and amount
    fn get_score(&self, payer_id: &PayerId, amount: Decimal) -> Result<Score>;
}

impl<P: ScoreProvider + ?Sized> ScoreProvider for &P {
    fn get_score(&self, payer_id: &PayerId, amount: Decimal) -> Result<Score> {
        (**self).get_score(payer_id, amount)
    }
}

impl<P: ScoreProvider + ?Sized> ScoreProvider for Box<P> {
    fn get_score(&self, payer_id: &PayerId, amount: Decimal) -> Result<Score> {
        (**self).get_score(payer_id, amount)
    }
}
