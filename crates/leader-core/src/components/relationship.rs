//! Relationship Components
//!
//! Bilateral opinions one leader holds of others.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One leader's opinion of another. The opinion is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Leader holding the opinion
    pub origin_leader: String,
    /// Leader the opinion is about
    pub target_leader: String,
    pub opinion: f32,
}

impl Relationship {
    pub fn new(origin_leader: impl Into<String>, target_leader: impl Into<String>) -> Self {
        Self {
            origin_leader: origin_leader.into(),
            target_leader: target_leader.into(),
            opinion: 0.0,
        }
    }

    pub fn with_opinion(mut self, opinion: f32) -> Self {
        self.opinion = opinion;
        self
    }
}

/// Mapping of target leader name -> relationship
#[derive(Debug, Clone, Default)]
pub struct RelationshipStore {
    relationships: HashMap<String, Relationship>,
}

impl RelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new relationship. Returns it back if the target is already known.
    pub fn insert(&mut self, relationship: Relationship) -> Result<(), Relationship> {
        if self.relationships.contains_key(&relationship.target_leader) {
            return Err(relationship);
        }
        self.relationships
            .insert(relationship.target_leader.clone(), relationship);
        Ok(())
    }

    /// Insert or replace the relationship with its target
    pub fn upsert(&mut self, relationship: Relationship) {
        self.relationships
            .insert(relationship.target_leader.clone(), relationship);
    }

    pub fn get(&self, target_leader: &str) -> Option<&Relationship> {
        self.relationships.get(target_leader)
    }

    pub fn get_mut(&mut self, target_leader: &str) -> Option<&mut Relationship> {
        self.relationships.get_mut(target_leader)
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_upsert() {
        let mut store = RelationshipStore::new();
        store.insert(Relationship::new("Ada", "Brin")).unwrap();
        assert!(store.insert(Relationship::new("Ada", "Brin")).is_err());

        store.upsert(Relationship::new("Ada", "Brin").with_opinion(-4.5));
        assert_eq!(store.get("Brin").unwrap().opinion, -4.5);
        assert_eq!(store.len(), 1);
    }
}
