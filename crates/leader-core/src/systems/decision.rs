//! Decision Profile
//!
//! Turns a leader's priorities and planet ranking into one chosen action.
//!
//! Each decision:
//! 1. Sort the (category, weight) pairs ascending by weight
//! 2. Expand the first `actions_to_choose_from` categories into candidates
//! 3. Pick one candidate uniformly at random
//!
//! Weights therefore only decide which categories are represented in the
//! shortlist, not how likely any single candidate is. Taking the lowest
//! weights first is long-standing behavior and is pinned by tests.

use galaxy_types::{CurrencyType, PlanetId};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::actions::{ActionCategory, DiplomacyAction, GameAction};
use crate::components::influence::InfluenceStore;
use crate::components::personality::Personality;
use crate::components::treasury::Treasury;
use crate::config::{ComfortConfig, DecisionConfig};
use crate::error::LeaderError;

use super::priority::CurrencyPriorities;

/// Personality plus per-turn decision state, owned by one leader
#[derive(Debug, Clone)]
pub struct DecisionProfile {
    personality: Personality,
    comfort: ComfortConfig,
    tuning: DecisionConfig,
    priorities: CurrencyPriorities,
    /// Planets ascending by influence, as of the last update
    planet_priorities: Vec<PlanetId>,
    rng: SmallRng,
}

impl DecisionProfile {
    pub fn new(
        personality: Personality,
        comfort: ComfortConfig,
        tuning: DecisionConfig,
        rng: SmallRng,
    ) -> Result<Self, LeaderError> {
        personality.validate()?;
        Ok(Self {
            personality,
            comfort,
            tuning,
            priorities: CurrencyPriorities::default(),
            planet_priorities: Vec::new(),
            rng,
        })
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn tuning(&self) -> &DecisionConfig {
        &self.tuning
    }

    pub fn priorities(&self) -> &CurrencyPriorities {
        &self.priorities
    }

    pub fn priority(&self, currency: CurrencyType) -> f32 {
        self.priorities.get(currency)
    }

    pub fn planet_priorities(&self) -> &[PlanetId] {
        &self.planet_priorities
    }

    pub(crate) fn reseed(&mut self, rng: SmallRng) {
        self.rng = rng;
    }

    /// Append a newly introduced planet to the end of the ranking
    pub fn add_new_planet(&mut self, planet: PlanetId) {
        self.planet_priorities.push(planet);
    }

    /// Recompute currency priorities and the planet ranking.
    ///
    /// Nothing changes if any currency's priority cannot be computed.
    pub fn update_priorities(
        &mut self,
        treasury: &Treasury,
        influences: &InfluenceStore,
    ) -> Result<(), LeaderError> {
        self.priorities = CurrencyPriorities::compute(treasury, &self.comfort, self.personality.hoarder)?;
        self.planet_priorities = influences
            .ascending_by_value()
            .into_iter()
            .map(|influence| influence.planet.clone())
            .collect();

        tracing::debug!(
            affluence = self.priorities.affluence,
            politics = self.priorities.politics,
            intelligence = self.priorities.intelligence,
            planets = self.planet_priorities.len(),
            "Updated priorities"
        );
        Ok(())
    }

    /// Choose one action from a shortlist of `actions_to_consider` candidates
    pub fn choose_next_action(
        &mut self,
        leader_name: &str,
        weights: &[(ActionCategory, f32)],
        actions_to_consider: usize,
    ) -> Result<GameAction, LeaderError> {
        let mut candidates = self.likely_actions(leader_name, weights, actions_to_consider)?;
        if candidates.is_empty() {
            return Err(LeaderError::NoCandidates);
        }
        let index = self.rng.gen_range(0..candidates.len());
        Ok(candidates.swap_remove(index))
    }

    /// Build the candidate shortlist from category weights.
    ///
    /// The `actions_to_choose_from` lowest-weighted categories each get
    /// `actions_to_get / actions_to_choose_from` candidates; any remainder is dropped.
    pub fn likely_actions(
        &mut self,
        leader_name: &str,
        weights: &[(ActionCategory, f32)],
        actions_to_get: usize,
    ) -> Result<Vec<GameAction>, LeaderError> {
        let shortlist = self.shortlisted_categories(weights);
        let per_category = actions_to_get
            .checked_div(self.tuning.actions_to_choose_from)
            .unwrap_or(0);

        let mut likely = Vec::with_capacity(per_category * shortlist.len());
        for category in shortlist {
            self.populate_decision_list(&mut likely, leader_name, category, per_category)?;
        }

        tracing::debug!(
            leader = leader_name,
            candidates = likely.len(),
            "Generated likely actions"
        );
        Ok(likely)
    }

    /// The `actions_to_choose_from` lowest-weighted categories, lowest first
    pub fn shortlisted_categories(&self, weights: &[(ActionCategory, f32)]) -> Vec<ActionCategory> {
        rank_categories(weights)
            .into_iter()
            .take(self.tuning.actions_to_choose_from)
            .map(|(category, _)| category)
            .collect()
    }

    /// Append `count` candidates for `category` to `list`.
    ///
    /// The currency to increase is uniform, the one to decrease is the next in
    /// enumeration order. Candidate `i` targets
    /// `planet_priorities[i + uniform(0..planets_to_choose_from)]`.
    pub fn populate_decision_list(
        &mut self,
        list: &mut Vec<GameAction>,
        leader_name: &str,
        category: ActionCategory,
        count: usize,
    ) -> Result<(), LeaderError> {
        let window = self.tuning.planets_to_choose_from.max(1);
        // TODO: construct trade and espionage actions once those action types exist
        match category {
            ActionCategory::Espionage | ActionCategory::Diplomacy | ActionCategory::Trade => {
                for i in 0..count {
                    let currency_to_increase =
                        CurrencyType::from_index(self.rng.gen_range(0..CurrencyType::ALL.len()));
                    let currency_to_decrease = currency_to_increase.next();

                    let index = i + self.rng.gen_range(0..window);
                    let target_planet = self
                        .planet_priorities
                        .get(index)
                        .cloned()
                        .ok_or(LeaderError::IndexOutOfRange {
                            index,
                            len: self.planet_priorities.len(),
                        })?;

                    list.push(GameAction::Diplomacy(DiplomacyAction::new(
                        0.0,
                        leader_name,
                        target_planet,
                        currency_to_increase,
                        currency_to_decrease,
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Sort (category, weight) pairs ascending by weight; ties keep their order
pub fn rank_categories(weights: &[(ActionCategory, f32)]) -> Vec<(ActionCategory, f32)> {
    let mut ranked = weights.to_vec();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}
