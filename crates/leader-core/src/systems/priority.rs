//! Currency Priority Model
//!
//! Maps a currency's stockpile and yield to an urgency in [0, 1]. Urgency
//! rises as either falls below the personality-scaled comfort target:
//!
//! - surplus factor: `1 - clamp(S) / (comfort_surplus * 2 * hoarder)`
//! - yield factor: `1 - clamp(Y) / (comfort_yield * 2 * (1 - hoarder))`
//! - priority: `clamp(clamp(surplus) + clamp(yield))`
//!
//! The hoarder bias enters the two denominators inversely: a high bias
//! widens the surplus target (low stockpiles matter less) and narrows the
//! yield target (low yields matter more).

use galaxy_types::CurrencyType;
use serde::{Deserialize, Serialize};

use crate::components::treasury::{CurrencyPool, Treasury};
use crate::config::{ComfortConfig, ComfortLevel};
use crate::error::{LeaderError, PriorityTerm};

/// Unclamped surplus and yield factors for one currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityFactors {
    pub surplus: f32,
    pub yield_factor: f32,
}

impl PriorityFactors {
    /// Combine the factors into a priority in [0, 1]
    pub fn priority(&self) -> f32 {
        (self.surplus.clamp(0.0, 1.0) + self.yield_factor.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }
}

/// `1 - amount / denominator`, refusing a zero or NaN denominator
fn scarcity_factor(
    amount: i32,
    ceiling: i32,
    denominator: f32,
    currency: CurrencyType,
    term: PriorityTerm,
    hoarder: f32,
) -> Result<f32, LeaderError> {
    let degenerate = LeaderError::ArithmeticDegenerate {
        currency,
        term,
        hoarder,
    };
    if denominator == 0.0 || denominator.is_nan() {
        return Err(degenerate);
    }

    // An infinite quotient is fine: the caller clamps the factor
    Ok(1.0 - amount.clamp(0, ceiling.max(0)) as f32 / denominator)
}

/// Compute both raw factors for a currency pool
pub fn priority_factors(
    currency: CurrencyType,
    pool: &CurrencyPool,
    comfort: ComfortLevel,
    hoarder: f32,
    ceiling: i32,
) -> Result<PriorityFactors, LeaderError> {
    let surplus = scarcity_factor(
        pool.stockpile,
        ceiling,
        comfort.surplus * 2.0 * hoarder,
        currency,
        PriorityTerm::Surplus,
        hoarder,
    )?;
    let yield_factor = scarcity_factor(
        pool.yield_per_turn,
        ceiling,
        comfort.yield_per_turn * 2.0 * (1.0 - hoarder),
        currency,
        PriorityTerm::Yield,
        hoarder,
    )?;

    Ok(PriorityFactors {
        surplus,
        yield_factor,
    })
}

/// Compute the priority for a currency pool
pub fn compute_priority(
    currency: CurrencyType,
    pool: &CurrencyPool,
    comfort: ComfortLevel,
    hoarder: f32,
    ceiling: i32,
) -> Result<f32, LeaderError> {
    priority_factors(currency, pool, comfort, hoarder, ceiling).map(|f| f.priority())
}

/// Latest priority for each currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPriorities {
    pub affluence: f32,
    pub politics: f32,
    pub intelligence: f32,
}

impl CurrencyPriorities {
    pub fn get(&self, currency: CurrencyType) -> f32 {
        match currency {
            CurrencyType::Affluence => self.affluence,
            CurrencyType::Politics => self.politics,
            CurrencyType::Intelligence => self.intelligence,
        }
    }

    /// Compute all three priorities. Fails on the first degenerate currency.
    pub fn compute(
        treasury: &Treasury,
        comfort: &ComfortConfig,
        hoarder: f32,
    ) -> Result<Self, LeaderError> {
        let priority = |currency: CurrencyType| {
            compute_priority(
                currency,
                treasury.pool(currency),
                comfort.level(currency),
                hoarder,
                comfort.resource_ceiling,
            )
        };

        Ok(Self {
            affluence: priority(CurrencyType::Affluence)?,
            politics: priority(CurrencyType::Politics)?,
            intelligence: priority(CurrencyType::Intelligence)?,
        })
    }
}
