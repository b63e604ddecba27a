//! Currency Types
//!
//! The three currencies a leader stockpiles and earns each turn.
//!
//! # Example
//!
//! ```
//! use galaxy_types::CurrencyType;
//!
//! assert_eq!(CurrencyType::Affluence.next(), CurrencyType::Politics);
//! assert_eq!(CurrencyType::Intelligence.next(), CurrencyType::Affluence);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A currency resource with a stockpile and per-turn yield.
///
/// Declaration order is significant: [`CurrencyType::next`] cycles through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyType {
    Affluence,
    Politics,
    Intelligence,
}

impl CurrencyType {
    /// All currencies in enumeration order.
    pub const ALL: [CurrencyType; 3] = [
        CurrencyType::Affluence,
        CurrencyType::Politics,
        CurrencyType::Intelligence,
    ];

    /// Position in enumeration order.
    pub fn index(self) -> usize {
        match self {
            CurrencyType::Affluence => 0,
            CurrencyType::Politics => 1,
            CurrencyType::Intelligence => 2,
        }
    }

    /// Currency at `index`, wrapping around the enumeration.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns the next currency, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyType::Affluence => write!(f, "affluence"),
            CurrencyType::Politics => write!(f, "politics"),
            CurrencyType::Intelligence => write!(f, "intelligence"),
        }
    }
}

/// Error returned when a string does not name a currency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency: '{0}'")]
pub struct ParseCurrencyError(pub String);

impl FromStr for CurrencyType {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "affluence" => Ok(CurrencyType::Affluence),
            "politics" => Ok(CurrencyType::Politics),
            "intelligence" => Ok(CurrencyType::Intelligence),
            _ => Err(ParseCurrencyError(s.to_string())),
        }
    }
}
