use serde::{Deserialize, Serialize};

/// Linear combination weights for the blended match score. The defaults sum
/// to 1.0, with the specialty component carrying the largest share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub web3: f64,
    pub technical: f64,
    pub experience: f64,
    pub industry: f64,
    pub similarity: f64,
    pub phrase_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            web3: 0.35,
            technical: 0.25,
            experience: 0.15,
            industry: 0.10,
            similarity: 0.10,
            phrase_bonus: 0.05,
        }
    }
}
