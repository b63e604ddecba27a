//! Decision Systems
//!
//! Priority computation and action selection.

pub mod decision;
pub mod priority;

pub use decision::DecisionProfile;
pub use priority::{compute_priority, priority_factors, CurrencyPriorities, PriorityFactors};
