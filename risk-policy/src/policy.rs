//! Risk decision policy

use crate::{Decision, PayerId, Result, Score, ScoreProvider};
use rust_decimal::Decimal;
use tracing::info;

/// Decision policy bound to a score provider
///
/// `decide` makes exactly one provider call per payment and classifies the
/// returned score against the fixed thresholds. Provider failures propagate
/// unchanged: no default decision is ever substituted for an unreachable
/// scoring service.
pub struct RiskPolicy<P: ScoreProvider> {
    provider: P,
}

impl<P: ScoreProvider> RiskPolicy<P> {
    /// Create new policy over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Decide a payment, returning the provider score alongside the decision
    pub fn decide(&self, payer_id: &PayerId, amount: Decimal) -> Result<(Score, Decision)> {
        let score = self.provider.get_score(payer_id, amount)?;
        let decision = Decision::from(score);

        info!(
            "Risk score {} (decision: {}) for payer {}",
            score, decision, payer_id
        );

        Ok((score, decision))
    }
}

/// One-shot decision with an explicit provider
///
/// Behaves exactly like constructing a [`RiskPolicy`] over the provider and
/// calling [`RiskPolicy::decide`]; kept for call sites that hold a provider
/// but no policy.
pub fn decide<P>(payer_id: &PayerId, amount: Decimal, provider: &P) -> Result<(Score, Decision)>
where
    P: ScoreProvider + ?Sized,
{
    RiskPolicy::new(provider).decide(payer_id, amount)
}
