//! Engine Errors
//!
//! Every failure the decision engine can report. All of them are recoverable
//! from the scheduler's point of view: a turn that fails can be logged and
//! skipped.

use galaxy_types::CurrencyType;
use thiserror::Error;

/// What kind of key a lookup was keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Planet,
    Leader,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyKind::Planet => write!(f, "planet"),
            KeyKind::Leader => write!(f, "leader"),
        }
    }
}

/// Which half of the priority formula degenerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTerm {
    Surplus,
    Yield,
}

impl std::fmt::Display for PriorityTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTerm::Surplus => write!(f, "surplus"),
            PriorityTerm::Yield => write!(f, "yield"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaderError {
    #[error("no {kind} named '{key}' is registered")]
    InvalidKey { kind: KeyKind, key: String },

    #[error("{kind} '{key}' is already registered")]
    DuplicateKey { kind: KeyKind, key: String },

    #[error("{currency} {term} factor divides by zero (hoarder bias {hoarder})")]
    ArithmeticDegenerate {
        currency: CurrencyType,
        term: PriorityTerm,
        hoarder: f32,
    },

    #[error("planet ranking index {index} is out of range for {len} ranked planets")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no candidate actions were generated")]
    NoCandidates,

    #[error("personality trait '{trait_name}' must be within [0, 1], got {value}")]
    InvalidPersonality { trait_name: &'static str, value: f32 },

    #[error("influence belongs to leader '{found}', not '{expected}'")]
    ForeignInfluence { expected: String, found: String },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

impl LeaderError {
    pub(crate) fn unknown_planet(name: impl Into<String>) -> Self {
        LeaderError::InvalidKey {
            kind: KeyKind::Planet,
            key: name.into(),
        }
    }

    pub(crate) fn unknown_leader(name: impl Into<String>) -> Self {
        LeaderError::InvalidKey {
            kind: KeyKind::Leader,
            key: name.into(),
        }
    }
}
