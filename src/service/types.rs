//! Value types shared by the facade operations

use serde::{Deserialize, Serialize};

/// A sorted-set member together with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMember<V> {
    /// Member value
    pub member: V,
    /// Score the set is ordered by
    pub score: f64,
}

impl<V> ScoredMember<V> {
    /// Create a new scored member
    pub fn new(member: V, score: f64) -> Self {
        Self { member, score }
    }
}

impl<V> From<(V, f64)> for ScoredMember<V> {
    fn from((member, score): (V, f64)) -> Self {
        Self { member, score }
    }
}
