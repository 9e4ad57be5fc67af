//! Random outcomes fed into the battle core.

use core::ops::Deref;

use rand::Rng;

use crate::{
    item::catch_chance,
    pokedex::{item::Item, pokemon::Pokemon},
    pokemon::BattlePokemon,
};

/// Chance of any move landing a critical hit.
pub const CRIT_CHANCE: f64 = 0.0625; // 1 / 16

pub fn crit(random: &mut impl Rng) -> bool {
    random.gen_bool(CRIT_CHANCE)
}

/// Damage spread between 0.85 and 1.00, in whole percents.
pub fn damage_roll(random: &mut impl Rng) -> f64 {
    random.gen_range(85..=100u8) as f64 / 100.0
}

pub fn try_catch<P: Deref<Target = Pokemon>>(
    random: &mut impl Rng,
    target: &BattlePokemon<P>,
    item: &Item,
) -> bool {
    random.gen_bool(catch_chance(target, item))
}
