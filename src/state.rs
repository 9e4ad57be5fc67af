use serde::{Deserialize, Serialize};

use crate::moves::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleState {
    Selecting,
    End(BattleOutcome),
}

impl Default for BattleState {
    fn default() -> Self {
        Self::Selecting
    }
}

/// How a battle ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Every opposing pokemon fainted.
    Won,
    /// Every one of the user's pokemon fainted.
    Lost,
    /// The opposing pokemon was caught.
    Caught,
    /// A side ran from the battle.
    Fled(Side),
    /// The battle was stopped before either side won.
    Unfinished,
}

impl Default for BattleOutcome {
    fn default() -> Self {
        Self::Unfinished
    }
}
