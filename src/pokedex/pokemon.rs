use core::ops::{Index, IndexMut};

use enum_map::{enum_map, Enum, EnumMap};
use serde::{Deserialize, Serialize};

use super::{types::PokemonType, Identifiable};

pub type PokemonId = u16;
pub type Level = u8;
pub type Health = u16;
pub type BaseStat = u16;
pub type Experience = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Deserialize, Serialize)]
pub enum StatType {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatSet(EnumMap<StatType, BaseStat>);

impl StatSet {
    pub fn new(
        hp: BaseStat,
        attack: BaseStat,
        defense: BaseStat,
        sp_attack: BaseStat,
        sp_defense: BaseStat,
        speed: BaseStat,
    ) -> Self {
        Self(enum_map! {
            StatType::Hp => hp,
            StatType::Attack => attack,
            StatType::Defense => defense,
            StatType::SpAttack => sp_attack,
            StatType::SpDefense => sp_defense,
            StatType::Speed => speed,
        })
    }

    pub fn uniform(stat: BaseStat) -> Self {
        Self(enum_map! { _ => stat })
    }

    pub fn hp(&self) -> BaseStat {
        self[StatType::Hp]
    }

    pub fn speed(&self) -> BaseStat {
        self[StatType::Speed]
    }
}

impl Index<StatType> for StatSet {
    type Output = BaseStat;

    fn index(&self, stat: StatType) -> &Self::Output {
        &self.0[stat]
    }
}

impl IndexMut<StatType> for StatSet {
    fn index_mut(&mut self, stat: StatType) -> &mut Self::Output {
        &mut self.0[stat]
    }
}

/// A species entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,

    pub primary_type: PokemonType,
    #[serde(default)]
    pub secondary_type: Option<PokemonType>,

    pub base: StatSet,

    /// Experience yield when defeated.
    pub base_exp: Experience,
}

impl Pokemon {
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.primary_type == pokemon_type || self.secondary_type == Some(pokemon_type)
    }
}

impl Identifiable for Pokemon {
    type Id = PokemonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
