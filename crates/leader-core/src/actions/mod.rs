//! Action Definitions
//!
//! The action categories a leader chooses between, the concrete actions the
//! decision profile constructs, and the per-category decision weights.

pub mod diplomacy;
pub mod espionage;
pub mod trade;

pub use diplomacy::DiplomacyAction;

use galaxy_types::PlanetId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CategoryWeightMode;
use crate::leader::Leader;

/// A class of game action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Espionage,
    Diplomacy,
    Trade,
}

impl ActionCategory {
    /// Categories in the order they are weighed
    pub const ALL: [ActionCategory; 3] = [
        ActionCategory::Espionage,
        ActionCategory::Diplomacy,
        ActionCategory::Trade,
    ];
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCategory::Espionage => write!(f, "espionage"),
            ActionCategory::Diplomacy => write!(f, "diplomacy"),
            ActionCategory::Trade => write!(f, "trade"),
        }
    }
}

/// An action chosen by a leader, handed to the scheduler for execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameAction {
    Diplomacy(DiplomacyAction),
}

impl GameAction {
    pub fn category(&self) -> ActionCategory {
        match self {
            GameAction::Diplomacy(_) => ActionCategory::Diplomacy,
        }
    }

    pub fn leader_name(&self) -> &str {
        match self {
            GameAction::Diplomacy(action) => &action.leader_name,
        }
    }

    pub fn target_planet(&self) -> &PlanetId {
        match self {
            GameAction::Diplomacy(action) => &action.target_planet,
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameAction::Diplomacy(action) => write!(
                f,
                "{} diplomacy on {} (+{} / -{})",
                action.leader_name,
                action.target_planet,
                action.currency_to_increase,
                action.currency_to_decrease
            ),
        }
    }
}

/// Scores how attractive an action category is to a leader. Higher is more attractive.
pub trait CategoryWeighting {
    fn decision_weight(&self, category: ActionCategory, leader: &Leader) -> f32;
}

/// Weights each category with its own module's `decision_weight`
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardWeighting;

impl CategoryWeighting for StandardWeighting {
    fn decision_weight(&self, category: ActionCategory, leader: &Leader) -> f32 {
        match category {
            ActionCategory::Espionage => espionage::decision_weight(leader),
            ActionCategory::Diplomacy => diplomacy::decision_weight(leader),
            ActionCategory::Trade => trade::decision_weight(leader),
        }
    }
}

/// (category, weight) pairs in [`ActionCategory::ALL`] order
pub fn category_weights(
    weighting: &dyn CategoryWeighting,
    leader: &Leader,
    mode: CategoryWeightMode,
) -> Vec<(ActionCategory, f32)> {
    match mode {
        CategoryWeightMode::Independent => ActionCategory::ALL
            .iter()
            .map(|&category| (category, weighting.decision_weight(category, leader)))
            .collect(),
        CategoryWeightMode::Legacy => {
            let trade = weighting.decision_weight(ActionCategory::Trade, leader);
            let diplomacy = weighting.decision_weight(ActionCategory::Diplomacy, leader);
            vec![
                (ActionCategory::Espionage, trade),
                (ActionCategory::Espionage, diplomacy),
                (ActionCategory::Espionage, trade),
            ]
        }
    }
}
