use serde::{Deserialize, Serialize};

use crate::{
    moves::{damage::DamageResult, Side},
    pokedex::pokemon::{Experience, Health},
    state::BattleOutcome,
};

/// Something that happened during a turn.
///
/// `side` is always the side that owns the named pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    Damage {
        side: Side,
        pokemon: String,
        result: DamageResult<Health>,
    },
    Faint {
        side: Side,
        pokemon: String,
    },
    Switch {
        side: Side,
        pokemon: String,
    },
    Heal {
        side: Side,
        pokemon: String,
        hp: Health,
    },
    Catch {
        side: Side,
        pokemon: String,
        caught: bool,
    },
    Experience {
        side: Side,
        pokemon: String,
        experience: Experience,
    },
    Run {
        side: Side,
        escaped: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: usize,
    pub event: BattleEvent,
}

/// Summary of a battle, filled in as turns resolve.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub turns: usize,
    pub outcome: BattleOutcome,
    pub events: Vec<TurnEvent>,
    /// Names of pokemon caught by either side.
    pub caught: Vec<String>,
}

impl BattleReport {
    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(TurnEvent {
            turn: self.turns,
            event,
        });
    }

    /// Total experience earned by the named pokemon on `side`.
    pub fn experience(&self, side: Side, pokemon: &str) -> Experience {
        self.events
            .iter()
            .filter_map(|e| match &e.event {
                BattleEvent::Experience {
                    side: s,
                    pokemon: p,
                    experience,
                } if *s == side && p == pokemon => Some(*experience),
                _ => None,
            })
            .sum()
    }
}
