//! Shared galaxy vocabulary for the leader simulation.
//!
//! This crate contains pure data structures with no decision logic.
//! It is a dependency for every other crate in the workspace.

pub mod currency;
pub mod planet;
pub mod turn;

pub use currency::{CurrencyType, ParseCurrencyError};
pub use planet::{Planet, PlanetId, PlanetRegistry};
pub use turn::GameTurn;
