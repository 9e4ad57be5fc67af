use core::ops::Deref;

use crate::{
    moves::{BattleMove, Side},
    party::BattleParty,
    pokedex::pokemon::Pokemon,
};

/// Source of a side's action each turn, such as a player's input or an AI.
///
/// `select` is called once per side per turn and may block.
pub trait BattleEndpoint<P: Deref<Target = Pokemon>, M, I> {
    fn select(
        &mut self,
        side: Side,
        party: &BattleParty<P>,
        opponent: &BattleParty<P>,
    ) -> BattleMove<M, I>;
}

impl<P, M, I, F> BattleEndpoint<P, M, I> for F
where
    P: Deref<Target = Pokemon>,
    F: FnMut(Side, &BattleParty<P>, &BattleParty<P>) -> BattleMove<M, I>,
{
    fn select(
        &mut self,
        side: Side,
        party: &BattleParty<P>,
        opponent: &BattleParty<P>,
    ) -> BattleMove<M, I> {
        (self)(side, party, opponent)
    }
}
