//! Leader Setup
//!
//! Spawns the demo leaders, introduces them to every planet and hands each
//! its starting planets.

use galaxy_types::PlanetRegistry;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::influence::Influence;
use crate::components::personality::Personality;
use crate::config::EngineConfig;
use crate::error::LeaderError;
use crate::leader::Leader;

/// Planets each leader controls at the start
pub const STARTING_PLANETS: usize = 2;

/// Starting influence over a leader's own planets
const HOME_INFLUENCE: f32 = 0.75;

/// Upper bound of the random starting influence elsewhere
const MAX_FOREIGN_INFLUENCE: f32 = 0.5;

/// Name, personality and starting stockpiles for one leader
#[derive(Debug, Clone)]
pub struct LeaderTemplate {
    pub name: &'static str,
    pub personality: Personality,
    pub stockpiles: (i32, i32, i32),
    pub yields: (i32, i32, i32),
}

/// The demo leaders
pub fn leader_roster() -> Vec<LeaderTemplate> {
    vec![
        // A merchant prince who sits on reserves and seldom acts alone
        LeaderTemplate {
            name: "Oriane Vel",
            personality: Personality {
                hoarder: 0.8,
                loner: 0.7,
                affluence_bias: 0.9,
                politics_bias: 0.4,
                intelligence_bias: 0.2,
            },
            stockpiles: (15, 5, 0),
            yields: (2, 1, 1),
        },
        // A spymaster who reinvests everything
        LeaderTemplate {
            name: "Kestrel Ashe",
            personality: Personality {
                hoarder: 0.2,
                loner: 0.1,
                affluence_bias: 0.3,
                politics_bias: 0.3,
                intelligence_bias: 0.9,
            },
            stockpiles: (0, 0, 10),
            yields: (1, 1, 2),
        },
        // A statesman balanced between the two
        LeaderTemplate {
            name: "Tamsin Roe",
            personality: Personality {
                hoarder: 0.5,
                loner: 0.5,
                affluence_bias: 0.4,
                politics_bias: 0.8,
                intelligence_bias: 0.4,
            },
            stockpiles: (5, 10, 5),
            yields: (1, 2, 1),
        },
    ]
}

/// Create leaders from templates.
///
/// Leader `i` gets RNG seed `seed + i` and controls planets
/// `[i * STARTING_PLANETS, (i + 1) * STARTING_PLANETS)` in registration order.
pub fn create_leaders(
    templates: &[LeaderTemplate],
    galaxy: &PlanetRegistry,
    config: &EngineConfig,
    seed: u64,
) -> Result<Vec<Leader>, LeaderError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let planets: Vec<_> = galaxy.iter().collect();
    let mut leaders = Vec::with_capacity(templates.len());

    for (i, template) in templates.iter().enumerate() {
        let (affluence, politics, intelligence) = template.stockpiles;
        let (affluence_yield, politics_yield, intelligence_yield) = template.yields;
        let mut leader = Leader::with_config(template.name, template.personality, config)?
            .with_rng_seed(seed.wrapping_add(i as u64))
            .with_stockpiles(affluence, politics, intelligence)
            .with_yields(affluence_yield, politics_yield, intelligence_yield);

        let home = (i * STARTING_PLANETS)..((i + 1) * STARTING_PLANETS);
        for (p, planet) in planets.iter().enumerate() {
            let influence = if home.contains(&p) {
                Influence::new(template.name, planet).with_value(HOME_INFLUENCE)
            } else {
                Influence::new(template.name, planet)
                    .with_value(rng.gen_range(0.0..MAX_FOREIGN_INFLUENCE))
            };
            leader.add_new_influence(influence)?;
            if home.contains(&p) {
                leader.gain_planet_control(planet)?;
            }
        }

        for other in templates.iter().filter(|t| t.name != template.name) {
            leader.add_relationship(other.name, 0.0)?;
        }

        leaders.push(leader);
    }

    Ok(leaders)
}
