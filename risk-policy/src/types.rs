//! Core types for risk decisioning

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payer identifier
///
/// Opaque to the policy; carried to the score provider verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayerId(String);

impl PayerId {
    /// Create new payer ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk confidence score
///
/// Higher means more confidence the payment is legitimate. The value is
/// whatever the provider returned, unaltered; providers observed so far
/// stay within 0-100 but nothing here enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Create new score
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get raw value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Payment may proceed
    Approve,
    /// Payment needs manual review
    Review,
    /// Payment must be declined
    Reject,
}

impl Decision {
    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "APPROVE",
            Decision::Review => "REVIEW",
            Decision::Reject => "REJECT",
        }
    }
}

impl From<Score> for Decision {
    fn from(score: Score) -> Self {
        if score.value() >= crate::APPROVE_THRESHOLD {
            Decision::Approve
        } else if score.value() >= crate::REVIEW_THRESHOLD {
            Decision::Review
        } else {
            Decision::Reject
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(Decision::from(Score::new(85)), Decision::Approve);
        assert_eq!(Decision::from(Score::new(84)), Decision::Review);
        assert_eq!(Decision::from(Score::new(70)), Decision::Review);
        assert_eq!(Decision::from(Score::new(69)), Decision::Reject);
    }

    #[test]
    fn test_classification_extremes() {
        assert_eq!(Decision::from(Score::new(u8::MAX)), Decision::Approve);
        assert_eq!(Decision::from(Score::new(0)), Decision::Reject);
    }

    #[test]
    fn test_score_is_not_clamped() {
        assert_eq!(Score::new(250).value(), 250);
    }

    #[test]
    fn test_decision_wire_labels() {
        assert_eq!(Decision::Approve.as_str(), "APPROVE");
        assert_eq!(Decision::Review.as_str(), "REVIEW");
        assert_eq!(Decision::Reject.as_str(), "REJECT");
    }

    #[test]
    fn test_serde_representations() {
        let json = serde_json::to_string(&Decision::Review).unwrap();
        assert_eq!(json, "\"REVIEW\"");

        let json = serde_json::to_string(&Score::new(90)).unwrap();
        assert_eq!(json, "90");

        let json = serde_json::to_string(&PayerId::new("CUST123")).unwrap();
        assert_eq!(json, "\"CUST123\"");
    }
}
