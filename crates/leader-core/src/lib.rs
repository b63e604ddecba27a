//! Leader decision engine: priorities, planet influence and action choice
//! for autonomous leaders in a strategy simulation.
//!
//! Per turn, a scheduler calls [`Leader::update_priorities`] and then
//! [`Leader::make_decision`], and executes the returned [`GameAction`].

pub mod actions;
pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod leader;
pub mod output;
pub mod setup;
pub mod systems;

pub use actions::{ActionCategory, CategoryWeighting, DiplomacyAction, GameAction, StandardWeighting};
pub use components::{CurrencyPool, Influence, Personality, Relationship, Treasury};
pub use config::{CategoryWeightMode, ConfigError, EngineConfig};
pub use error::{KeyKind, LeaderError, PriorityTerm};
pub use leader::Leader;
pub use systems::{CurrencyPriorities, DecisionProfile};
