//! Diplomacy Actions
//!
//! Shifting a planet's currency balance through negotiation.

use galaxy_types::{CurrencyType, PlanetId};
use serde::{Deserialize, Serialize};

use crate::leader::Leader;

/// A diplomacy action against one planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiplomacyAction {
    pub priority: f32,
    /// Leader performing the action
    pub leader_name: String,
    pub target_planet: PlanetId,
    pub currency_to_increase: CurrencyType,
    pub currency_to_decrease: CurrencyType,
}

impl DiplomacyAction {
    pub fn new(
        priority: f32,
        leader_name: impl Into<String>,
        target_planet: PlanetId,
        currency_to_increase: CurrencyType,
        currency_to_decrease: CurrencyType,
    ) -> Self {
        Self {
            priority,
            leader_name: leader_name.into(),
            target_planet,
            currency_to_increase,
            currency_to_decrease,
        }
    }
}

/// Weight constants for diplomacy
pub mod diplomacy_weights {
    /// Base weight for any diplomacy
    pub const BASE: f32 = 0.2;
    /// Multiplier on biased politics priority
    pub const POLITICS_MULT: f32 = 0.5;
    /// Bonus scaled by the loner trait (1 = values leader interactions)
    pub const INTERACTION_BONUS: f32 = 0.3;
}

/// How attractive diplomacy is to `leader`
pub fn decision_weight(leader: &Leader) -> f32 {
    use diplomacy_weights::*;

    let profile = leader.decision_profile();
    let personality = profile.personality();
    let politics = profile.priorities().politics * personality.politics_bias;

    BASE + politics * POLITICS_MULT + personality.loner * INTERACTION_BONUS
}
