//! Leader
//!
//! An autonomous agent owning currencies, influence over planets, a decision
//! profile and its relationships with other leaders. Planets themselves live
//! in the galaxy's [`PlanetRegistry`](galaxy_types::PlanetRegistry); a leader
//! only keeps their identifiers.

use galaxy_types::{CurrencyType, GameTurn, Planet, PlanetId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

use crate::actions::{category_weights, CategoryWeighting, GameAction};
use crate::components::influence::{Influence, InfluenceStore};
use crate::components::personality::Personality;
use crate::components::relationship::{Relationship, RelationshipStore};
use crate::components::treasury::{CurrencyPool, Treasury};
use crate::config::EngineConfig;
use crate::error::{KeyKind, LeaderError};
use crate::events::TurnObservers;
use crate::output::snapshot::{InfluenceSnapshot, LeaderSnapshot};
use crate::systems::decision::DecisionProfile;

#[derive(Debug)]
pub struct Leader {
    name: String,
    treasury: Treasury,
    decision_profile: DecisionProfile,
    /// Target leader name -> relationship
    relationships: RelationshipStore,
    /// Planet name -> influence
    influences: InfluenceStore,
    /// Planet name -> controlled planet; exactly the influences flagged as leader
    controlled_planets: BTreeMap<String, PlanetId>,
    planet_control_count: usize,
    /// Candidates considered by `make_decision`
    candidate_pool: usize,
    turn_observers: TurnObservers,
}

impl Leader {
    /// Create a leader with the default configuration and an entropy-seeded RNG
    pub fn new(name: impl Into<String>, personality: Personality) -> Result<Self, LeaderError> {
        Self::with_config(name, personality, &EngineConfig::default())
    }

    pub fn with_config(
        name: impl Into<String>,
        personality: Personality,
        config: &EngineConfig,
    ) -> Result<Self, LeaderError> {
        config
            .validate()
            .map_err(|e| LeaderError::InvalidConfig(e.to_string()))?;
        let decision_profile = DecisionProfile::new(
            personality,
            config.comfort,
            config.decision,
            SmallRng::from_entropy(),
        )?;

        Ok(Self {
            name: name.into(),
            treasury: Treasury::default(),
            decision_profile,
            relationships: RelationshipStore::new(),
            influences: InfluenceStore::new(),
            controlled_planets: BTreeMap::new(),
            planet_control_count: 0,
            candidate_pool: config.decision.candidate_pool,
            turn_observers: TurnObservers::new(),
        })
    }

    /// Seed this leader's random source for reproducible decisions
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.decision_profile.reseed(SmallRng::seed_from_u64(seed));
        self
    }

    pub fn with_treasury(mut self, treasury: Treasury) -> Self {
        self.treasury = treasury;
        self
    }

    pub fn with_stockpiles(mut self, affluence: i32, politics: i32, intelligence: i32) -> Self {
        self.treasury.affluence.stockpile = affluence;
        self.treasury.politics.stockpile = politics;
        self.treasury.intelligence.stockpile = intelligence;
        self
    }

    pub fn with_yields(mut self, affluence: i32, politics: i32, intelligence: i32) -> Self {
        self.treasury.affluence.yield_per_turn = affluence;
        self.treasury.politics.yield_per_turn = politics;
        self.treasury.intelligence.yield_per_turn = intelligence;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn treasury(&self) -> &Treasury {
        &self.treasury
    }

    pub fn decision_profile(&self) -> &DecisionProfile {
        &self.decision_profile
    }

    pub fn planet_control_count(&self) -> usize {
        self.planet_control_count
    }

    // Currencies

    pub fn stockpile(&self, currency: CurrencyType) -> i32 {
        self.treasury.stockpile(currency)
    }

    pub fn yield_per_turn(&self, currency: CurrencyType) -> i32 {
        self.treasury.yield_per_turn(currency)
    }

    pub fn set_stockpile(&mut self, currency: CurrencyType, stockpile: i32) {
        self.treasury.pool_mut(currency).stockpile = stockpile;
    }

    pub fn set_yield(&mut self, currency: CurrencyType, yield_per_turn: i32) {
        self.treasury.pool_mut(currency).yield_per_turn = yield_per_turn;
    }

    pub fn currency_pool(&self, currency: CurrencyType) -> CurrencyPool {
        *self.treasury.pool(currency)
    }

    /// Add every currency's yield to its stockpile
    pub fn accrue_yields(&mut self) {
        self.treasury.accrue_yields();
    }

    // Planet influence

    fn unknown_planet(&self, planet_name: &str) -> LeaderError {
        tracing::warn!(
            leader = %self.name,
            planet = planet_name,
            "Planet has no influence record for this leader"
        );
        LeaderError::unknown_planet(planet_name)
    }

    /// Register an influence record with the store and the decision profile
    pub fn add_new_influence(&mut self, influence: Influence) -> Result<(), LeaderError> {
        if influence.leader_name != self.name {
            return Err(LeaderError::ForeignInfluence {
                expected: self.name.clone(),
                found: influence.leader_name,
            });
        }

        let planet = influence.planet.clone();
        let is_leader = influence.is_leader();
        self.influences
            .insert(influence)
            .map_err(|rejected| LeaderError::DuplicateKey {
                kind: KeyKind::Planet,
                key: rejected.planet.0,
            })?;

        if is_leader {
            self.controlled_planets
                .insert(planet.0.clone(), planet.clone());
            self.planet_control_count += 1;
        }
        self.decision_profile.add_new_planet(planet);
        Ok(())
    }

    /// Introduce this leader to a planet with zero influence
    pub fn introduce_planet(&mut self, planet: &Planet) -> Result<(), LeaderError> {
        let influence = Influence::new(self.name.clone(), planet);
        self.add_new_influence(influence)
    }

    pub fn planet_influence(&self, planet_name: &str) -> Result<&Influence, LeaderError> {
        self.influences
            .get(planet_name)
            .ok_or_else(|| self.unknown_planet(planet_name))
    }

    /// Overwrite a planet's influence value. The value is not clamped.
    pub fn set_planet_influence(&mut self, planet_name: &str, value: f32) -> Result<(), LeaderError> {
        match self.influences.get_mut(planet_name) {
            Some(influence) => {
                influence.set_influence(value);
                Ok(())
            }
            None => Err(self.unknown_planet(planet_name)),
        }
    }

    /// Shift a planet's influence value, clamped to [0, 1]. Returns the new value.
    pub fn update_planet_influence(
        &mut self,
        planet_name: &str,
        modifier: f32,
    ) -> Result<f32, LeaderError> {
        match self.influences.get_mut(planet_name) {
            Some(influence) => {
                influence.update_influence(modifier);
                Ok(influence.value())
            }
            None => Err(self.unknown_planet(planet_name)),
        }
    }

    /// Influence records ascending by value; equal values keep creation order
    pub fn ascending_sorted_planet_influences(&self) -> Vec<&Influence> {
        self.influences.ascending_by_value()
    }

    pub fn influences(&self) -> impl Iterator<Item = &Influence> {
        self.influences.iter()
    }

    // Planet control

    /// Take control of a planet. Returns false if already in control.
    pub fn gain_planet_control(&mut self, planet: &Planet) -> Result<bool, LeaderError> {
        let was_leader = match self.influences.get_mut(&planet.name) {
            Some(influence) => influence.set_is_leader(true),
            None => return Err(self.unknown_planet(&planet.name)),
        };

        if !was_leader {
            self.controlled_planets.insert(planet.name.clone(), planet.id());
            self.planet_control_count += 1;
            tracing::info!(leader = %self.name, planet = %planet.name, "Gained planet control");
        }
        Ok(!was_leader)
    }

    /// Give up control of a planet. Returns false if not in control.
    pub fn lose_planet_control(&mut self, planet: &Planet) -> Result<bool, LeaderError> {
        let was_leader = match self.influences.get_mut(&planet.name) {
            Some(influence) => influence.set_is_leader(false),
            None => return Err(self.unknown_planet(&planet.name)),
        };

        if was_leader {
            self.controlled_planets.remove(&planet.name);
            self.planet_control_count -= 1;
            tracing::info!(leader = %self.name, planet = %planet.name, "Lost planet control");
        }
        Ok(was_leader)
    }

    pub fn controls(&self, planet_name: &str) -> bool {
        self.controlled_planets.contains_key(planet_name)
    }

    /// Controlled planets ordered by name
    pub fn controlled_planets(&self) -> Vec<&PlanetId> {
        self.controlled_planets.values().collect()
    }

    // Relationships

    /// Record a relationship with another leader. Fails if one already exists.
    pub fn add_relationship(&mut self, target_leader: &str, opinion: f32) -> Result<(), LeaderError> {
        let relationship = Relationship::new(self.name.clone(), target_leader).with_opinion(opinion);
        self.relationships
            .insert(relationship)
            .map_err(|rejected| LeaderError::DuplicateKey {
                kind: KeyKind::Leader,
                key: rejected.target_leader,
            })
    }

    /// Insert or replace the opinion of another leader
    pub fn set_relationship(&mut self, target_leader: &str, opinion: f32) {
        let relationship = Relationship::new(self.name.clone(), target_leader).with_opinion(opinion);
        self.relationships.upsert(relationship);
    }

    pub fn relationship(&self, target_leader: &str) -> Result<&Relationship, LeaderError> {
        self.relationships
            .get(target_leader)
            .ok_or_else(|| LeaderError::unknown_leader(target_leader))
    }

    pub fn opinion_of(&self, target_leader: &str) -> Result<f32, LeaderError> {
        self.relationship(target_leader).map(|r| r.opinion)
    }

    /// Shift the opinion of another leader. Returns the new opinion.
    pub fn adjust_opinion(&mut self, target_leader: &str, delta: f32) -> Result<f32, LeaderError> {
        let relationship = self
            .relationships
            .get_mut(target_leader)
            .ok_or_else(|| LeaderError::unknown_leader(target_leader))?;
        relationship.opinion += delta;
        Ok(relationship.opinion)
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    // Decisions

    /// Recompute currency priorities and the planet ranking
    pub fn update_priorities(&mut self) -> Result<(), LeaderError> {
        self.decision_profile
            .update_priorities(&self.treasury, &self.influences)
    }

    /// Candidate shortlist of `actions_to_get` actions
    pub fn likely_actions(
        &mut self,
        weighting: &dyn CategoryWeighting,
        actions_to_get: usize,
    ) -> Result<Vec<GameAction>, LeaderError> {
        let mode = self.decision_profile.tuning().category_weights;
        let weights = category_weights(weighting, self, mode);
        self.decision_profile
            .likely_actions(&self.name, &weights, actions_to_get)
    }

    /// Choose one action from a shortlist of `actions_to_consider` candidates
    pub fn choose_next_action(
        &mut self,
        weighting: &dyn CategoryWeighting,
        actions_to_consider: usize,
    ) -> Result<GameAction, LeaderError> {
        let mode = self.decision_profile.tuning().category_weights;
        let weights = category_weights(weighting, self, mode);
        self.decision_profile
            .choose_next_action(&self.name, &weights, actions_to_consider)
    }

    /// Choose this turn's action from the configured candidate pool
    pub fn make_decision(&mut self, weighting: &dyn CategoryWeighting) -> Result<GameAction, LeaderError> {
        let action = self.choose_next_action(weighting, self.candidate_pool)?;
        tracing::debug!(leader = %self.name, %action, "Made decision");
        Ok(action)
    }

    // Turn events

    /// Register a callback for turn changes
    pub fn on_turn_changed(&mut self, callback: impl FnMut(GameTurn) + Send + 'static) {
        self.turn_observers.subscribe(callback);
    }

    pub fn notify_turn_changed(&mut self, turn: GameTurn) {
        self.turn_observers.notify(turn);
    }

    pub fn snapshot(&self) -> LeaderSnapshot {
        LeaderSnapshot {
            name: self.name.clone(),
            treasury: self.treasury.clone(),
            personality: *self.decision_profile.personality(),
            priorities: *self.decision_profile.priorities(),
            influences: self
                .ascending_sorted_planet_influences()
                .into_iter()
                .map(InfluenceSnapshot::from)
                .collect(),
            controlled_planets: self.controlled_planets.keys().cloned().collect(),
            planet_control_count: self.planet_control_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StandardWeighting;

    fn leader() -> Leader {
        Leader::new("Ada", Personality::default()).unwrap().with_rng_seed(11)
    }

    fn leader_with_planets(names: &[&str]) -> (Leader, Vec<Planet>) {
        let mut leader = leader();
        let planets: Vec<Planet> = names.iter().map(|n| Planet::new(*n)).collect();
        for planet in &planets {
            leader.introduce_planet(planet).unwrap();
        }
        (leader, planets)
    }

    #[test]
    fn test_new_rejects_invalid_personality() {
        let personality = Personality {
            hoarder: -0.1,
            ..Personality::default()
        };
        assert!(matches!(
            Leader::new("Ada", personality),
            Err(LeaderError::InvalidPersonality { trait_name: "hoarder", .. })
        ));
    }

    #[test]
    fn test_builder_sets_treasury() {
        let leader = leader().with_stockpiles(5, 6, 7).with_yields(1, 2, 3);
        assert_eq!(leader.stockpile(CurrencyType::Politics), 6);
        assert_eq!(leader.yield_per_turn(CurrencyType::Intelligence), 3);
    }

    #[test]
    fn test_setters_target_their_own_currency() {
        let mut leader = leader();
        leader.set_stockpile(CurrencyType::Politics, 30);
        leader.set_stockpile(CurrencyType::Intelligence, 40);
        leader.set_yield(CurrencyType::Politics, 4);

        assert_eq!(leader.stockpile(CurrencyType::Affluence), 0);
        assert_eq!(leader.stockpile(CurrencyType::Politics), 30);
        assert_eq!(leader.stockpile(CurrencyType::Intelligence), 40);
        assert_eq!(leader.currency_pool(CurrencyType::Politics), CurrencyPool::new(30, 4));
    }

    #[test]
    fn test_duplicate_influence_rejected() {
        let mut leader = leader();
        let planet = Planet::new("Vega");
        leader
            .add_new_influence(Influence::new("Ada", &planet).with_value(0.4))
            .unwrap();

        let err = leader
            .add_new_influence(Influence::new("Ada", &planet).with_value(0.9))
            .unwrap_err();

        assert_eq!(
            err,
            LeaderError::DuplicateKey {
                kind: KeyKind::Planet,
                key: "Vega".into()
            }
        );
        assert_eq!(leader.planet_influence("Vega").unwrap().value(), 0.4);
        assert_eq!(leader.decision_profile().planet_priorities().len(), 1);
    }

    #[test]
    fn test_foreign_influence_rejected() {
        let mut leader = leader();
        let err = leader
            .add_new_influence(Influence::new("Brin", &Planet::new("Vega")))
            .unwrap_err();
        assert!(matches!(err, LeaderError::ForeignInfluence { .. }));
        assert_eq!(leader.influences().count(), 0);
    }

    #[test]
    fn test_leading_influence_counts_as_controlled() {
        let mut leader = leader();
        leader
            .add_new_influence(Influence::new("Ada", &Planet::new("Vega")).with_leadership(true))
            .unwrap();

        assert_eq!(leader.planet_control_count(), 1);
        assert!(leader.controls("Vega"));
    }

    #[test]
    fn test_set_unknown_planet_influence() {
        let (mut leader, _) = leader_with_planets(&["Vega"]);
        let err = leader.set_planet_influence("Unknown", 0.5).unwrap_err();

        assert_eq!(err, LeaderError::unknown_planet("Unknown"));
        assert_eq!(leader.planet_influence("Vega").unwrap().value(), 0.0);
        assert_eq!(leader.influences().count(), 1);
    }

    #[test]
    fn test_set_planet_influence_is_unclamped() {
        let (mut leader, _) = leader_with_planets(&["Vega"]);
        leader.set_planet_influence("Vega", 1.5).unwrap();
        assert_eq!(leader.planet_influence("Vega").unwrap().value(), 1.5);
    }

    #[test]
    fn test_update_planet_influence_clamps() {
        let (mut leader, _) = leader_with_planets(&["Vega"]);
        assert_eq!(leader.update_planet_influence("Vega", 0.3).unwrap(), 0.3);
        assert_eq!(leader.update_planet_influence("Vega", 2.0).unwrap(), 1.0);
        assert_eq!(
            leader.update_planet_influence("Sol", 0.1).unwrap_err(),
            LeaderError::unknown_planet("Sol")
        );
    }

    #[test]
    fn test_gain_control_is_idempotent() {
        let (mut leader, planets) = leader_with_planets(&["Vega", "Altair"]);

        assert!(leader.gain_planet_control(&planets[0]).unwrap());
        assert!(!leader.gain_planet_control(&planets[0]).unwrap());

        assert_eq!(leader.planet_control_count(), 1);
        assert_eq!(leader.controlled_planets(), vec![&PlanetId::from("Vega")]);
    }

    #[test]
    fn test_gain_then_lose_restores_state() {
        let (mut leader, planets) = leader_with_planets(&["Vega", "Altair"]);
        leader.gain_planet_control(&planets[1]).unwrap();
        let before: Vec<PlanetId> = leader.controlled_planets().into_iter().cloned().collect();

        leader.gain_planet_control(&planets[0]).unwrap();
        assert!(leader.lose_planet_control(&planets[0]).unwrap());
        assert!(!leader.lose_planet_control(&planets[0]).unwrap());

        let after: Vec<PlanetId> = leader.controlled_planets().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(leader.planet_control_count(), 1);
        assert!(!leader.planet_influence("Vega").unwrap().is_leader());
    }

    #[test]
    fn test_control_of_unknown_planet() {
        let mut leader = leader();
        let err = leader.gain_planet_control(&Planet::new("Sol")).unwrap_err();
        assert_eq!(err, LeaderError::unknown_planet("Sol"));

        let err = leader.lose_planet_control(&Planet::new("Sol")).unwrap_err();
        assert_eq!(err, LeaderError::unknown_planet("Sol"));
        assert_eq!(leader.planet_control_count(), 0);
    }

    #[test]
    fn test_relationships() {
        let mut leader = leader();
        leader.add_relationship("Brin", 0.5).unwrap();
        assert!(matches!(
            leader.add_relationship("Brin", 1.0),
            Err(LeaderError::DuplicateKey { kind: KeyKind::Leader, .. })
        ));

        assert_eq!(leader.adjust_opinion("Brin", -2.0).unwrap(), -1.5);
        leader.set_relationship("Cato", 3.0);
        assert_eq!(leader.opinion_of("Cato").unwrap(), 3.0);
        assert_eq!(leader.relationship("Brin").unwrap().origin_leader, "Ada");
        assert_eq!(leader.relationship_count(), 2);
        assert!(leader.opinion_of("Dax").is_err());
    }

    #[test]
    fn test_make_decision_targets_known_planet() {
        let (mut leader, _) = leader_with_planets(&["A", "B", "C", "D", "E"]);
        leader.update_priorities().unwrap();

        let action = leader.make_decision(&StandardWeighting).unwrap();
        assert_eq!(action.leader_name(), "Ada");
        assert!(leader.planet_influence(action.target_planet().as_str()).is_ok());
    }

    #[test]
    fn test_turn_observers() {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::sync::Arc;

        let last_turn = Arc::new(AtomicU64::new(0));
        let mut leader = leader();
        let seen = Arc::clone(&last_turn);
        leader.on_turn_changed(move |turn| seen.store(turn.number(), Ordering::SeqCst));

        leader.notify_turn_changed(GameTurn(4));
        assert_eq!(last_turn.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_leader_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Leader>();
    }
}
