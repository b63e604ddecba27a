//! Treasury Components
//!
//! Currency stockpiles and per-turn yields.

use galaxy_types::CurrencyType;
use serde::{Deserialize, Serialize};

/// Stockpile and yield for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPool {
    /// Current unspent amount
    pub stockpile: i32,
    /// Amount gained per turn
    pub yield_per_turn: i32,
}

impl CurrencyPool {
    pub fn new(stockpile: i32, yield_per_turn: i32) -> Self {
        Self {
            stockpile,
            yield_per_turn,
        }
    }
}

impl Default for CurrencyPool {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// All three currency pools of a leader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasury {
    pub affluence: CurrencyPool,
    pub politics: CurrencyPool,
    pub intelligence: CurrencyPool,
}

impl Treasury {
    pub fn new(affluence: CurrencyPool, politics: CurrencyPool, intelligence: CurrencyPool) -> Self {
        Self {
            affluence,
            politics,
            intelligence,
        }
    }

    pub fn pool(&self, currency: CurrencyType) -> &CurrencyPool {
        match currency {
            CurrencyType::Affluence => &self.affluence,
            CurrencyType::Politics => &self.politics,
            CurrencyType::Intelligence => &self.intelligence,
        }
    }

    pub fn pool_mut(&mut self, currency: CurrencyType) -> &mut CurrencyPool {
        match currency {
            CurrencyType::Affluence => &mut self.affluence,
            CurrencyType::Politics => &mut self.politics,
            CurrencyType::Intelligence => &mut self.intelligence,
        }
    }

    pub fn stockpile(&self, currency: CurrencyType) -> i32 {
        self.pool(currency).stockpile
    }

    pub fn yield_per_turn(&self, currency: CurrencyType) -> i32 {
        self.pool(currency).yield_per_turn
    }

    /// Add each currency's yield to its stockpile
    pub fn accrue_yields(&mut self) {
        for currency in CurrencyType::ALL {
            let pool = self.pool_mut(currency);
            pool.stockpile = pool.stockpile.saturating_add(pool.yield_per_turn);
        }
    }
}
