//! Snapshot Types
//!
//! Serialization structs capturing leader state after a turn, used for
//! debugging and analysis. Not a save format.

use galaxy_types::GameTurn;
use serde::{Deserialize, Serialize};

use crate::actions::GameAction;
use crate::components::influence::Influence;
use crate::components::personality::Personality;
use crate::components::treasury::Treasury;
use crate::systems::priority::CurrencyPriorities;

/// Generates a snapshot ID for a turn.
pub fn generate_snapshot_id(turn: GameTurn) -> String {
    format!("snap_{:06}", turn.number())
}

/// One influence record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceSnapshot {
    pub planet: String,
    pub value: f32,
    #[serde(default)]
    pub is_leader: bool,
}

impl From<&Influence> for InfluenceSnapshot {
    fn from(influence: &Influence) -> Self {
        Self {
            planet: influence.planet_name().to_string(),
            value: influence.value(),
            is_leader: influence.is_leader(),
        }
    }
}

/// A leader's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSnapshot {
    pub name: String,
    pub treasury: Treasury,
    pub personality: Personality,
    pub priorities: CurrencyPriorities,
    /// Ascending by influence value
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub influences: Vec<InfluenceSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controlled_planets: Vec<String>,
    pub planet_control_count: usize,
}

/// The outcome of one leader's turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub leader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<GameAction>,
    /// Why the turn was skipped, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Every leader's state and decision after one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub snapshot_id: String,
    pub turn: GameTurn,
    pub leaders: Vec<LeaderSnapshot>,
    #[serde(default)]
    pub decisions: Vec<DecisionRecord>,
}

impl TurnSnapshot {
    pub fn new(turn: GameTurn) -> Self {
        Self {
            snapshot_id: generate_snapshot_id(turn),
            turn,
            leaders: Vec::new(),
            decisions: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use galaxy_types::Planet;

    #[test]
    fn test_snapshot_id() {
        assert_eq!(generate_snapshot_id(GameTurn(12)), "snap_000012");
    }

    #[test]
    fn test_leader_snapshot_lists_ranked_influence() {
        let mut leader = Leader::new("Ada", Personality::default()).unwrap();
        let vega = Planet::new("Vega");
        leader.introduce_planet(&vega).unwrap();
        leader.introduce_planet(&Planet::new("Altair")).unwrap();
        leader.set_planet_influence("Vega", 0.8).unwrap();
        leader.gain_planet_control(&vega).unwrap();

        let snapshot = leader.snapshot();

        assert_eq!(snapshot.influences[0].planet, "Altair");
        assert_eq!(snapshot.influences[1].planet, "Vega");
        assert!(snapshot.influences[1].is_leader);
        assert_eq!(snapshot.controlled_planets, vec!["Vega".to_string()]);
        assert_eq!(snapshot.planet_control_count, 1);
    }

    #[test]
    fn test_turn_snapshot_json() {
        let mut snapshot = TurnSnapshot::new(GameTurn(2));
        snapshot.decisions.push(DecisionRecord {
            leader: "Ada".into(),
            action: None,
            error: Some("no candidate actions were generated".into()),
        });

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"snapshot_id\": \"snap_000002\""));
        assert!(json.contains("no candidate actions"));
        assert!(!json.contains("\"action\""));

        let parsed: TurnSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
