//! Leader Components
//!
//! Per-leader state: treasury, personality, planet influence, relationships.

pub mod influence;
pub mod personality;
pub mod relationship;
pub mod treasury;

pub use influence::*;
pub use personality::*;
pub use relationship::*;
pub use treasury::*;
