use core::{fmt::Display, ops::Deref};
use std::error::Error;

use log::{debug, warn};

use crate::{pokedex::pokemon::Pokemon, pokemon::BattlePokemon};

/// An ordered party with one active pokemon.
///
/// The active pokemon is kept at the front of the party after a normal
/// switch, and benched pokemon rotate to the back.
#[derive(Debug, Clone)]
pub struct BattleParty<P: Deref<Target = Pokemon>> {
    pokemon: Vec<BattlePokemon<P>>,
    active: usize,
}

impl<P: Deref<Target = Pokemon>> BattleParty<P> {
    /// Creates a party led by its first pokemon that is able to battle.
    pub fn new(pokemon: Vec<BattlePokemon<P>>) -> Self {
        let active = pokemon.iter().position(|p| !p.fainted()).unwrap_or_default();
        Self { pokemon, active }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&BattlePokemon<P>> {
        self.pokemon.get(self.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut BattlePokemon<P>> {
        self.pokemon.get_mut(self.active)
    }

    pub fn get(&self, index: usize) -> Option<&BattlePokemon<P>> {
        self.pokemon.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BattlePokemon<P>> {
        self.pokemon.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BattlePokemon<P>> {
        self.pokemon.iter()
    }

    pub fn as_slice(&self) -> &[BattlePokemon<P>] {
        &self.pokemon
    }

    pub fn all_fainted(&self) -> bool {
        self.pokemon.iter().all(BattlePokemon::fainted)
    }

    /// Makes the pokemon at `index` active.
    ///
    /// The previously active pokemon always moves to the back of the party.
    /// A fainted target is left where it is but still becomes the active
    /// pokemon, so callers need to check [`BattlePokemon::fainted`] on the
    /// result.
    pub fn switch_to(&mut self, index: usize) -> Result<&BattlePokemon<P>, PartyError> {
        if index >= self.pokemon.len() {
            return Err(PartyError::OutOfRange {
                index,
                len: self.pokemon.len(),
            });
        }

        if index == self.active {
            return Ok(&self.pokemon[self.active]);
        }

        let previous = self.pokemon.remove(self.active);
        let index = match index > self.active {
            true => index - 1,
            false => index,
        };

        debug!("{} was benched", previous.name());
        self.pokemon.push(previous);

        match self.pokemon[index].fainted() {
            false => {
                let next = self.pokemon.remove(index);
                self.pokemon.insert(0, next);
                self.active = 0;
            }
            true => {
                warn!(
                    "Switched to fainted pokemon {} at index {}",
                    self.pokemon[index].name(),
                    index
                );
                self.active = index;
            }
        }

        Ok(&self.pokemon[self.active])
    }

    /// Switches in the first pokemon able to battle if the active one has
    /// fainted. Returns `None` when every pokemon in the party has fainted.
    pub fn replace_fainted(&mut self) -> Option<&BattlePokemon<P>> {
        if !self.active()?.fainted() {
            return self.active();
        }

        let index = self.pokemon.iter().position(|p| !p.fainted())?;

        self.switch_to(index).ok()
    }

    /// Removes the active pokemon from the party, such as when it is caught.
    ///
    /// The next pokemon able to battle becomes active.
    pub fn take_active(&mut self) -> Option<BattlePokemon<P>> {
        if self.active >= self.pokemon.len() {
            return None;
        }
        let pokemon = self.pokemon.remove(self.active);
        self.active = self
            .pokemon
            .iter()
            .position(|p| !p.fainted())
            .unwrap_or_default();
        Some(pokemon)
    }

    /// Records that the active pokemon has battled the opposing active one.
    pub fn mark_faced(&mut self) {
        if let Some(pokemon) = self.active_mut() {
            pokemon.faced = true;
        }
    }

    /// Forgets who faced the previous opposing pokemon. Only the active
    /// pokemon has faced its replacement.
    pub fn reset_faced(&mut self) {
        for pokemon in self.pokemon.iter_mut() {
            pokemon.faced = false;
        }
        self.mark_faced();
    }

    /// Pokemon that have battled the current opposing pokemon.
    pub fn faced(&self) -> Vec<&BattlePokemon<P>> {
        self.pokemon.iter().filter(|p| p.faced).collect()
    }

    /// Adds a pokemon to the back of the party.
    pub fn push(&mut self, pokemon: BattlePokemon<P>) {
        self.pokemon.push(pokemon);
    }
}

impl<P: Deref<Target = Pokemon>> From<Vec<BattlePokemon<P>>> for BattleParty<P> {
    fn from(pokemon: Vec<BattlePokemon<P>>) -> Self {
        Self::new(pokemon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyError {
    OutOfRange { index: usize, len: usize },
}

impl Error for PartyError {}

impl Display for PartyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                f,
                "Party index {} is out of range for a party of {}",
                index, len
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        pokedex::pokemon::Pokemon,
        pokemon::BattlePokemon,
        testing,
    };

    use super::{BattleParty, PartyError};

    fn names(party: &BattleParty<&Pokemon>) -> Vec<String> {
        party.iter().map(|p| p.name().to_owned()).collect()
    }

    fn party<'d>(species: &'d Pokemon, names: &[&str]) -> BattleParty<&'d Pokemon> {
        names
            .iter()
            .map(|name| BattlePokemon::new(species, 10).with_nickname(*name))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn switch_rotates_previous_to_back() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B", "C", "D"]);

        let active = party.switch_to(2).unwrap();
        assert_eq!(active.name(), "C");

        assert_eq!(party.len(), 4);
        assert_eq!(party.active_index(), 0);
        assert_eq!(names(&party), ["C", "B", "D", "A"]);

        party.switch_to(3).unwrap();
        assert_eq!(names(&party), ["A", "B", "D", "C"]);
    }

    #[test]
    fn switch_to_active_is_noop() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B"]);

        assert_eq!(party.switch_to(0).unwrap().name(), "A");
        assert_eq!(names(&party), ["A", "B"]);
    }

    #[test]
    fn switch_to_fainted_leaves_it_in_place() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B", "C"]);
        party.get_mut(2).unwrap().set_hp(0);

        let active = party.switch_to(2).unwrap();
        assert_eq!(active.name(), "C");
        assert!(active.fainted());

        assert_eq!(names(&party), ["B", "C", "A"]);
        assert_eq!(party.active_index(), 1);
        assert_eq!(party.len(), 3);
    }

    #[test]
    fn switch_out_of_range() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B"]);

        assert_eq!(
            party.switch_to(2).err(),
            Some(PartyError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(names(&party), ["A", "B"]);
    }

    #[test]
    fn replace_fainted() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B", "C"]);

        assert_eq!(party.replace_fainted().map(|p| p.name().to_owned()).as_deref(), Some("A"));

        party.active_mut().unwrap().set_hp(0);
        party.get_mut(1).unwrap().set_hp(0);

        let active = party.replace_fainted().unwrap();
        assert_eq!(active.name(), "C");
        assert!(!active.fainted());
        assert_eq!(names(&party), ["C", "B", "A"]);

        party.active_mut().unwrap().set_hp(0);
        assert!(party.replace_fainted().is_none());
        assert!(party.all_fainted());
    }

    #[test]
    fn new_skips_fainted_lead() {
        let species = testing::charmander();
        let party = BattleParty::new(vec![
            BattlePokemon::new(&species, 10).with_nickname("A").with_hp(0),
            BattlePokemon::new(&species, 10).with_nickname("B"),
        ]);

        assert_eq!(party.active().unwrap().name(), "B");
        assert!(!party.all_fainted());
    }

    #[test]
    fn take_active() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B"]);
        party.get_mut(1).unwrap().set_hp(0);

        let taken = party.take_active().unwrap();
        assert_eq!(taken.name(), "A");
        assert_eq!(party.len(), 1);
        assert!(party.all_fainted());

        party.push(taken);
        assert_eq!(names(&party), ["B", "A"]);
    }

    #[test]
    fn faced_follows_switches() {
        let species = testing::charmander();
        let mut party = party(&species, &["A", "B", "C"]);
        party.mark_faced();

        party.switch_to(1).unwrap();
        party.mark_faced();

        let faced: Vec<_> = party.faced().into_iter().map(|p| p.name()).collect();
        assert_eq!(faced, ["B", "A"]);

        party.reset_faced();
        let faced: Vec<_> = party.faced().into_iter().map(|p| p.name()).collect();
        assert_eq!(faced, ["B"]);
    }
}
