use core::ops::Deref;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    pokedex::{
        moves::Move,
        pokemon::{Health, Pokemon},
        types::Effective,
    },
    pokemon::BattlePokemon,
};

pub const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Same type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult<INT> {
    /// Inflicted damage
    pub damage: INT,
    /// Whether the attack was effective
    pub effective: Effective,
    /// If the attack was a critical hit
    pub crit: bool,
}

impl<INT: Default> Default for DamageResult<INT> {
    fn default() -> Self {
        Self {
            damage: Default::default(),
            effective: Effective::Ineffective,
            crit: false,
        }
    }
}

/// Whether `m` gets the same type attack bonus when used by `user`.
pub fn stab<P: Deref<Target = Pokemon>>(user: &BattlePokemon<P>, m: &Move) -> bool {
    user.pokemon.has_type(m.pokemon_type)
}

/// Damage dealt by `attacker` using `m` on `defender`.
///
/// `crit` and `roll` come from the caller's random source, `roll` being the
/// 0.85 to 1.00 damage spread. Every modifier is applied to the unrounded
/// value, which is rounded half away from zero once at the end.
pub fn compute_damage<P: Deref<Target = Pokemon>>(
    attacker: &BattlePokemon<P>,
    defender: &BattlePokemon<P>,
    m: &Move,
    battle_coefficient: f64,
    crit: bool,
    roll: f64,
) -> DamageResult<Health> {
    let (attack, defense) = match m.category.stats() {
        Some((attack, defense)) => (attacker.stat(attack) as f64, defender.stat(defense) as f64),
        None => {
            warn!(
                "Move damage class {:?} of {} is not supported",
                m.category, m.name
            );
            (0.0, 0.0)
        }
    };

    let (primary, secondary) = defender.types();
    let effective = m.pokemon_type.effective_against(primary, secondary);

    debug!(
        "Calculating damage: ((((2 * {}) / 5) + 2) * {} * ({} / {})) / 50) + 2",
        attacker.level, m.power, attack, defense
    );

    let ratio = match defense > 0.0 {
        true => attack / defense,
        false => 0.0,
    };

    let mut damage = 2.0 * attacker.level as f64;
    damage /= 5.0;
    damage += 2.0;
    damage *= m.power as f64;
    damage *= ratio;
    damage /= 50.0;
    damage += 2.0;

    debug!("Battle coefficient: {} * {}", damage, battle_coefficient);
    damage *= battle_coefficient;

    if crit {
        info!("Critical hit!");
        debug!("Critical hit: {} * {}", damage, CRITICAL_MULTIPLIER);
        damage *= CRITICAL_MULTIPLIER;
    }

    debug!("Damage roll: {} * {}", damage, roll);
    damage *= roll;

    if stab(attacker, m) {
        debug!("STAB: {} * {}", damage, STAB_MULTIPLIER);
        damage *= STAB_MULTIPLIER;
    }

    match effective {
        Effective::Effective => (),
        Effective::Ineffective => info!("{} had no effect on {}!", m.name, defender.name()),
        Effective::NotVeryEffective => info!("{} was not very effective...", m.name),
        Effective::SuperEffective | Effective::HyperEffective => {
            info!("{} was super effective!", m.name)
        }
    }

    let multiplier = effective.multiplier() as f64;
    debug!(
        "Effectiveness: {} * {} == {}",
        damage,
        multiplier,
        damage * multiplier
    );
    damage *= multiplier;

    DamageResult {
        damage: damage.round().clamp(0.0, Health::MAX as f64) as Health,
        effective,
        crit,
    }
}
