//! Espionage Actions
//!
//! Decision weight for covert information gathering.

use crate::leader::Leader;

/// Weight constants for espionage
pub mod espionage_weights {
    /// Base weight for any espionage
    pub const BASE: f32 = 0.2;
    /// Multiplier on biased intelligence priority
    pub const INTELLIGENCE_MULT: f32 = 0.5;
    /// Bonus scaled by preference for solo action (1 - loner)
    pub const SOLO_BONUS: f32 = 0.3;
}

/// How attractive espionage is to `leader`
pub fn decision_weight(leader: &Leader) -> f32 {
    use espionage_weights::*;

    let profile = leader.decision_profile();
    let personality = profile.personality();
    let intelligence = profile.priorities().intelligence * personality.intelligence_bias;

    BASE + intelligence * INTELLIGENCE_MULT + (1.0 - personality.loner) * SOLO_BONUS
}
