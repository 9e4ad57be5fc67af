use core::{fmt::Debug, ops::Deref};

use crate::pokedex::{
    pokemon::{BaseStat, Experience, Health, Level, Pokemon, StatSet, StatType},
    types::PokemonType,
};

/// A pokemon taking part in a battle.
///
/// `hp` is kept within `0..=max_hp()` by every method on this type, and a
/// pokemon is fainted exactly when its `hp` is zero.
#[derive(Clone)]
pub struct BattlePokemon<P: Deref<Target = Pokemon>> {
    pub pokemon: P,
    pub nickname: Option<String>,
    pub level: Level,
    /// Battle stats. Defaults to the species' base stats.
    stats: StatSet,
    hp: Health,
    pub experience: Experience,
    /// Has been active against the current opposing pokemon.
    pub faced: bool,
}

impl<P: Deref<Target = Pokemon>> BattlePokemon<P> {
    pub fn new(pokemon: P, level: Level) -> Self {
        let stats = pokemon.base;
        Self {
            pokemon,
            nickname: None,
            level: level.max(1),
            stats,
            hp: stats.hp(),
            experience: 0,
            faced: false,
        }
    }

    /// Replaces the battle stats and restores HP to the new maximum.
    pub fn with_stats(mut self, stats: StatSet) -> Self {
        self.stats = stats;
        self.hp = stats.hp();
        self
    }

    pub fn with_hp(mut self, hp: Health) -> Self {
        self.set_hp(hp);
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.pokemon.name)
    }

    pub fn hp(&self) -> Health {
        self.hp
    }

    pub fn max_hp(&self) -> Health {
        self.stats.hp()
    }

    pub fn set_hp(&mut self, hp: Health) {
        self.hp = hp.min(self.max_hp());
    }

    pub fn percent_hp(&self) -> f32 {
        match self.max_hp() {
            0 => 0.0,
            max => self.hp as f32 / max as f32,
        }
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn stats(&self) -> &StatSet {
        &self.stats
    }

    pub fn stat(&self, stat: StatType) -> BaseStat {
        self.stats[stat]
    }

    /// Changes a single battle stat. Lowering max HP below the current HP
    /// brings HP down with it.
    pub fn set_stat(&mut self, stat: StatType, value: BaseStat) {
        self.stats[stat] = value;
        self.hp = self.hp.min(self.max_hp());
    }

    pub fn types(&self) -> (PokemonType, Option<PokemonType>) {
        (self.pokemon.primary_type, self.pokemon.secondary_type)
    }

    /// Subtracts `damage` from current HP, returning true if this hit made
    /// the pokemon faint.
    pub fn damage(&mut self, damage: Health) -> bool {
        let was_fainted = self.fainted();
        self.hp = self.hp.saturating_sub(damage);
        !was_fainted && self.fainted()
    }
}

impl<P: Deref<Target = Pokemon>> Debug for BattlePokemon<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "\"{}\": {}, {}/{} HP",
            self.name(),
            self.level,
            self.hp(),
            self.max_hp()
        )
    }
}
