//! Turn Driver
//!
//! A minimal stand-in for the game's turn scheduler: notify, accrue yields,
//! update priorities, decide. A leader whose turn fails is logged and skipped.

use galaxy_types::GameTurn;

use crate::actions::{CategoryWeighting, GameAction};
use crate::error::LeaderError;
use crate::leader::Leader;
use crate::output::snapshot::{DecisionRecord, TurnSnapshot};

/// Run one leader's turn
pub fn take_turn(
    leader: &mut Leader,
    weighting: &dyn CategoryWeighting,
    turn: GameTurn,
) -> Result<GameAction, LeaderError> {
    leader.notify_turn_changed(turn);
    leader.accrue_yields();
    leader.update_priorities()?;
    leader.make_decision(weighting)
}

/// Run one turn for every leader, in slice order
pub fn run_turn(
    leaders: &mut [Leader],
    weighting: &dyn CategoryWeighting,
    turn: GameTurn,
) -> TurnSnapshot {
    let mut snapshot = TurnSnapshot::new(turn);

    for leader in leaders.iter_mut() {
        let record = match take_turn(leader, weighting, turn) {
            Ok(action) => {
                tracing::info!(%turn, %action, "Leader acted");
                DecisionRecord {
                    leader: leader.name().to_string(),
                    action: Some(action),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(%turn, leader = %leader.name(), error = %e, "Skipping leader turn");
                DecisionRecord {
                    leader: leader.name().to_string(),
                    action: None,
                    error: Some(e.to_string()),
                }
            }
        };
        snapshot.decisions.push(record);
        snapshot.leaders.push(leader.snapshot());
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StandardWeighting;
    use crate::components::personality::Personality;
    use galaxy_types::{CurrencyType, Planet};

    #[test]
    fn test_failed_leader_is_skipped() {
        let mut healthy = Leader::new("Ada", Personality::default()).unwrap().with_rng_seed(1);
        for name in ["A", "B", "C", "D", "E"] {
            healthy.introduce_planet(&Planet::new(name)).unwrap();
        }
        // Too few planets for the candidate window
        let mut starved = Leader::new("Brin", Personality::default()).unwrap().with_rng_seed(2);
        starved.introduce_planet(&Planet::new("A")).unwrap();

        let mut leaders = vec![healthy, starved];
        let snapshot = run_turn(&mut leaders, &StandardWeighting, GameTurn::first());

        assert!(snapshot.decisions[0].action.is_some());
        assert!(snapshot.decisions[1].action.is_none());
        assert!(snapshot.decisions[1].error.as_deref().unwrap().contains("out of range"));
        assert_eq!(snapshot.leaders.len(), 2);
    }

    #[test]
    fn test_take_turn_accrues_yields() {
        let mut leader = Leader::new("Ada", Personality::default())
            .unwrap()
            .with_yields(3, 0, 0);
        let _ = take_turn(&mut leader, &StandardWeighting, GameTurn::first());
        assert_eq!(leader.stockpile(CurrencyType::Affluence), 3);
    }
}
