//! Trade Actions
//!
//! Decision weight for exchanging currencies with controlled planets.

use crate::leader::Leader;

/// Weight constants for trade
pub mod trade_weights {
    /// Base weight for any trade
    pub const BASE: f32 = 0.2;
    /// Multiplier on biased affluence priority
    pub const AFFLUENCE_MULT: f32 = 0.5;
    /// Bonus per controlled planet
    pub const PER_PLANET_BONUS: f32 = 0.05;
    /// Cap on the controlled planet bonus
    pub const MAX_PLANET_BONUS: f32 = 0.25;
}

/// How attractive trade is to `leader`
pub fn decision_weight(leader: &Leader) -> f32 {
    use trade_weights::*;

    let profile = leader.decision_profile();
    let affluence = profile.priorities().affluence * profile.personality().affluence_bias;
    let planets = (leader.planet_control_count() as f32 * PER_PLANET_BONUS).min(MAX_PLANET_BONUS);

    BASE + affluence * AFFLUENCE_MULT + planets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::influence::Influence;
    use crate::components::personality::Personality;
    use galaxy_types::Planet;

    #[test]
    fn test_controlled_planets_raise_weight() {
        let mut leader = Leader::new("Ada", Personality::default()).unwrap();
        let before = decision_weight(&leader);

        let planet = Planet::new("Vega");
        leader.add_new_influence(Influence::new("Ada", &planet)).unwrap();
        leader.gain_planet_control(&planet).unwrap();

        assert!((decision_weight(&leader) - before - trade_weights::PER_PLANET_BONUS).abs() < 1e-6);
    }
}
