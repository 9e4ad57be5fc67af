use core::{cmp::Reverse, ops::Deref};

use crate::pokedex::{
    moves::{Move, Priority},
    pokemon::BaseStat,
};

use super::BattleInput;

/// Sort key for a turn's inputs. Smaller keys act first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovePriority {
    /// Switching, items and fleeing happen before any move.
    First,
    Second(Reverse<Priority>, Reverse<BaseStat>),
}

impl MovePriority {
    pub fn of<M: Deref<Target = Move>, I>(input: &BattleInput<M, I>) -> Self {
        match input.action.priority() {
            Some(priority) => Self::Second(Reverse(priority), Reverse(input.speed)),
            None => Self::First,
        }
    }
}

/// Orders two inputs by move priority, then speed.
///
/// Speed ties are not randomized; `user` keeps its place in front.
pub fn resolve_turn_order<M: Deref<Target = Move>, I>(
    user: BattleInput<M, I>,
    opponent: BattleInput<M, I>,
) -> (BattleInput<M, I>, BattleInput<M, I>) {
    match MovePriority::of(&opponent) < MovePriority::of(&user) {
        true => (opponent, user),
        false => (user, opponent),
    }
}
