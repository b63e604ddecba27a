//! Game Turn Types
//!
//! The turn counter handed to turn-change observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numbered game turn. The first turn is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameTurn(pub u64);

impl GameTurn {
    /// The opening turn of a game.
    pub fn first() -> Self {
        GameTurn(1)
    }

    pub fn number(self) -> u64 {
        self.0
    }

    /// Returns the turn after this one.
    pub fn next(self) -> Self {
        GameTurn(self.0 + 1)
    }
}

impl Default for GameTurn {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for GameTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn_{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_advance() {
        let turn = GameTurn::first();
        assert_eq!(turn.number(), 1);
        assert_eq!(turn.next().number(), 2);
        assert_eq!(turn.next().to_string(), "turn_2");
    }
}
