use core::ops::Deref;

use log::{debug, info};

use crate::{
    party::BattleParty,
    pokedex::{
        item::{Item, ItemCategory},
        pokemon::{Health, Pokemon},
    },
    pokemon::BattlePokemon,
};

/// Capture chance of a standard ball against a full health pokemon.
pub const BASE_CATCH_CHANCE: f64 = 0.3;

/// Extra capture chance granted as the target's HP approaches zero.
pub const LOW_HP_CATCH_BONUS: f64 = 0.4;

/// Heals `pokemon` with `item`.
///
/// The current HP is added on top of itself before the item's amount, so a
/// pokemon at 10 HP using a 5 HP item ends up at 25. The result never goes
/// over max HP.
pub fn heal<P: Deref<Target = Pokemon>>(pokemon: &mut BattlePokemon<P>, item: &Item) {
    let hp = pokemon.hp() as u32;
    let healed = hp + hp + item.attributes as u32;
    pokemon.set_hp(healed.min(Health::MAX as u32) as Health);
    info!(
        "{} used {} and is now at {}/{} HP",
        pokemon.name(),
        item.name,
        pokemon.hp(),
        pokemon.max_hp()
    );
}

/// Probability that `item` catches `target`, between 0 and 1.
///
/// Items that are not pokeballs never catch anything. A ball's
/// `attributes` scale the chance, with 100 being a standard ball.
pub fn catch_chance<P: Deref<Target = Pokemon>>(target: &BattlePokemon<P>, item: &Item) -> f64 {
    if item.category != ItemCategory::Pokeball {
        return 0.0;
    }

    let missing = 1.0 - target.percent_hp() as f64;
    let chance = (BASE_CATCH_CHANCE + LOW_HP_CATCH_BONUS * missing) * item.attributes as f64 / 100.0;
    debug!("Catch chance of {} on {}: {}", item.name, target.name(), chance);
    chance.clamp(0.0, 1.0)
}

/// Applies the outcome of a capture attempt on `target`'s active pokemon.
///
/// On success the pokemon leaves `target` and joins the back of `capturer`.
/// Nothing changes on failure. Returns whether a pokemon was caught.
pub fn catch<P: Deref<Target = Pokemon>>(
    target: &mut BattleParty<P>,
    capturer: &mut BattleParty<P>,
    item: &Item,
    captured: bool,
) -> bool {
    if !captured {
        if let Some(pokemon) = target.active() {
            info!("{} broke free of the {}!", pokemon.name(), item.name);
        }
        return false;
    }

    match target.take_active() {
        Some(pokemon) => {
            info!("Gotcha! {} was caught with a {}!", pokemon.name(), item.name);
            capturer.push(pokemon);
            true
        }
        None => false,
    }
}
