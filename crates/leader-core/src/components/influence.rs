//! Influence Components
//!
//! A leader's sway over each planet it has been introduced to.

use galaxy_types::{Planet, PlanetId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A leader's influence over one planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influence {
    /// Name of the leader holding the influence
    pub leader_name: String,
    /// Planet the influence is held over
    pub planet: PlanetId,
    /// Degree of sway, 0.0 to 1.0
    value: f32,
    /// Whether the leader currently controls the planet
    is_leader: bool,
}

impl Influence {
    pub fn new(leader_name: impl Into<String>, planet: &Planet) -> Self {
        Self {
            leader_name: leader_name.into(),
            planet: planet.id(),
            value: 0.0,
            is_leader: false,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn with_leadership(mut self, is_leader: bool) -> Self {
        self.is_leader = is_leader;
        self
    }

    pub fn planet_name(&self) -> &str {
        self.planet.as_str()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_leader(&self) -> bool {
        self.is_leader
    }

    /// Overwrite the value without clamping
    pub fn set_influence(&mut self, value: f32) {
        self.value = value;
    }

    /// Shift the value by `modifier`, clamped to [0, 1]
    pub fn update_influence(&mut self, modifier: f32) {
        self.value = (self.value + modifier).clamp(0.0, 1.0);
    }

    /// Set the leadership flag, returning the previous flag
    pub fn set_is_leader(&mut self, is_leader: bool) -> bool {
        std::mem::replace(&mut self.is_leader, is_leader)
    }
}

/// Insertion-ordered mapping of planet name -> influence record
#[derive(Debug, Clone, Default)]
pub struct InfluenceStore {
    records: Vec<Influence>,
    index: HashMap<String, usize>,
}

impl InfluenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, planet_name: &str) -> bool {
        self.index.contains_key(planet_name)
    }

    /// Insert a record. Returns the record back if its planet is already present.
    pub fn insert(&mut self, influence: Influence) -> Result<(), Influence> {
        if self.contains(influence.planet_name()) {
            return Err(influence);
        }
        self.index
            .insert(influence.planet_name().to_string(), self.records.len());
        self.records.push(influence);
        Ok(())
    }

    pub fn get(&self, planet_name: &str) -> Option<&Influence> {
        self.index.get(planet_name).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, planet_name: &str) -> Option<&mut Influence> {
        self.index.get(planet_name).map(|&i| &mut self.records[i])
    }

    /// Records in the order they were created
    pub fn iter(&self) -> impl Iterator<Item = &Influence> {
        self.records.iter()
    }

    /// Records sorted ascending by value; equal values keep creation order
    pub fn ascending_by_value(&self) -> Vec<&Influence> {
        let mut sorted: Vec<&Influence> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
        sorted
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
