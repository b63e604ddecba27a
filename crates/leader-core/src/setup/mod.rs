//! World Setup
//!
//! Builds the demo galaxy and its leaders.

pub mod galaxy;
pub mod leaders;

pub use galaxy::create_galaxy;
pub use leaders::{create_leaders, leader_roster, LeaderTemplate};
