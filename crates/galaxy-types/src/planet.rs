//! Planet Types
//!
//! Planets are owned by the galaxy, not by leaders. Leaders refer to them
//! through [`PlanetId`] and resolve them through a [`PlanetRegistry`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a planet (its name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId(pub String);

impl PlanetId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlanetId {
    fn from(s: &str) -> Self {
        PlanetId(s.to_string())
    }
}

impl From<String> for PlanetId {
    fn from(s: String) -> Self {
        PlanetId(s)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A planet in the galaxy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Unique name, also used as the identifier
    pub name: String,
    /// Names of planets with a direct connection to this one
    pub connections: Vec<String>,
}

impl Planet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connections: Vec::new(),
        }
    }

    pub fn with_connections(mut self, connections: Vec<String>) -> Self {
        self.connections = connections;
        self
    }

    pub fn id(&self) -> PlanetId {
        PlanetId(self.name.clone())
    }
}

/// The galaxy's planet collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanetRegistry {
    planets: HashMap<String, Planet>,
    /// Registration order, for deterministic iteration
    order: Vec<String>,
}

impl PlanetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a planet. Returns false if a planet with that name already exists.
    pub fn register(&mut self, planet: Planet) -> bool {
        if self.planets.contains_key(&planet.name) {
            return false;
        }
        self.order.push(planet.name.clone());
        self.planets.insert(planet.name.clone(), planet);
        true
    }

    pub fn get(&self, id: &PlanetId) -> Option<&Planet> {
        self.planets.get(id.as_str())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.get(name)
    }

    /// Planets in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.order.iter().filter_map(|name| self.planets.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
