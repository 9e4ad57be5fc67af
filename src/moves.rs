use core::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
    pokedex::{
        item::Item,
        moves::{Move, Priority},
        pokemon::{BaseStat, Pokemon},
    },
    pokemon::BattlePokemon,
};

pub mod damage;

mod queue;
pub use queue::*;

/// Which half of the battlefield an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Side {
    User,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Self::User => Self::Opponent,
            Self::Opponent => Self::User,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Opponent => f.write_str("Opponent"),
        }
    }
}

/// An action chosen for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleMove<M, I> {
    /// Attack the opposing active pokemon.
    Move(M),
    /// Switch to another pokemon with its party index.
    Switch(usize),
    /// Use an item on the active pokemon.
    UseItem(I),
    /// Throw a pokeball at the opposing active pokemon.
    Catch(I),
    /// Flee the battle.
    Run,
}

impl<M: Deref<Target = Move>, I> BattleMove<M, I> {
    /// Move priority, or `None` for actions that are not moves.
    pub fn priority(&self) -> Option<Priority> {
        match self {
            Self::Move(m) => Some(m.priority),
            _ => None,
        }
    }
}

impl<M: Deref<Target = Move>, I: Deref<Target = Item>> Display for BattleMove<M, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Move(m) => write!(f, "Move {}", m.name),
            Self::Switch(index) => write!(f, "Switch to {}", index),
            Self::UseItem(item) => write!(f, "Item {}", item.name),
            Self::Catch(item) => write!(f, "Catch with {}", item.name),
            Self::Run => f.write_str("Run"),
        }
    }
}

/// One side's decided action for a turn.
///
/// The acting pokemon's speed is captured when the input is created so the
/// input does not hold on to the party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleInput<M, I> {
    pub side: Side,
    pub speed: BaseStat,
    pub action: BattleMove<M, I>,
}

impl<M, I> BattleInput<M, I> {
    pub fn new<P: Deref<Target = Pokemon>>(
        side: Side,
        pokemon: &BattlePokemon<P>,
        action: BattleMove<M, I>,
    ) -> Self {
        Self {
            side,
            speed: pokemon.stats().speed(),
            action,
        }
    }
}
