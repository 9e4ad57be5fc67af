use serde::{Deserialize, Serialize};

use super::{pokemon::StatType, types::PokemonType, Identifiable};

pub type MoveId = String;
pub type Power = u8;
pub type Priority = i8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// The (attack, defense) stats this category reads, if it deals damage.
    pub const fn stats(&self) -> Option<(StatType, StatType)> {
        match self {
            Self::Physical => Some((StatType::Attack, StatType::Defense)),
            Self::Special => Some((StatType::SpAttack, StatType::SpDefense)),
            Self::Status => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Move {
    pub id: MoveId,
    pub name: String,

    pub category: MoveCategory,
    pub pokemon_type: PokemonType,

    pub power: Power,
    #[serde(default)]
    pub priority: Priority,
}

impl Identifiable for Move {
    type Id = MoveId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
