//! Personality Components
//!
//! Static decision influencers fixed when a leader is created.

use galaxy_types::CurrencyType;
use serde::{Deserialize, Serialize};

use crate::error::LeaderError;

/// Leader personality traits - fixed at creation
/// All values are 0.0 to 1.0, checked by [`Personality::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// 0 = values high yields; 1 = values high stockpiles
    pub hoarder: f32,
    /// 0 = values solo actions; 1 = values leader interactions
    pub loner: f32,
    pub affluence_bias: f32,
    pub politics_bias: f32,
    pub intelligence_bias: f32,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            hoarder: 0.5,
            loner: 0.5,
            affluence_bias: 0.5,
            politics_bias: 0.5,
            intelligence_bias: 0.5,
        }
    }
}

impl Personality {
    /// Build a personality, rejecting any trait outside [0, 1]
    pub fn new(
        hoarder: f32,
        loner: f32,
        affluence_bias: f32,
        politics_bias: f32,
        intelligence_bias: f32,
    ) -> Result<Self, LeaderError> {
        let personality = Self {
            hoarder,
            loner,
            affluence_bias,
            politics_bias,
            intelligence_bias,
        };
        personality.validate()?;
        Ok(personality)
    }

    pub fn validate(&self) -> Result<(), LeaderError> {
        let traits = [
            ("hoarder", self.hoarder),
            ("loner", self.loner),
            ("affluence_bias", self.affluence_bias),
            ("politics_bias", self.politics_bias),
            ("intelligence_bias", self.intelligence_bias),
        ];
        for (trait_name, value) in traits {
            // NaN fails the range check too
            if !(0.0..=1.0).contains(&value) {
                return Err(LeaderError::InvalidPersonality { trait_name, value });
            }
        }
        Ok(())
    }

    /// Raw bias toward a currency
    pub fn bias(&self, currency: CurrencyType) -> f32 {
        match currency {
            CurrencyType::Affluence => self.affluence_bias,
            CurrencyType::Politics => self.politics_bias,
            CurrencyType::Intelligence => self.intelligence_bias,
        }
    }
}
