//! Experience handed out when a pokemon faints.

use core::ops::Deref;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    pokedex::pokemon::{Experience, Level, Pokemon},
    pokemon::BattlePokemon,
};

/// Decides how much experience a participant earns from a fainted pokemon.
pub trait ExperiencePolicy {
    fn gain(
        &self,
        fainted_level: Level,
        fainted_base_exp: Experience,
        participant_level: Level,
    ) -> Experience;
}

impl<F: Fn(Level, Experience, Level) -> Experience> ExperiencePolicy for F {
    fn gain(
        &self,
        fainted_level: Level,
        fainted_base_exp: Experience,
        participant_level: Level,
    ) -> Experience {
        (self)(fainted_level, fainted_base_exp, participant_level)
    }
}

/// Scaled formula: `b * L / 5 * ((2L + 10) / (L + Lp + 10))^2.5 + 1`.
///
/// Participants at a higher level than the fainted pokemon earn less, lower
/// levels earn more. Every participant earns at least 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaledExperience;

impl ExperiencePolicy for ScaledExperience {
    fn gain(
        &self,
        fainted_level: Level,
        fainted_base_exp: Experience,
        participant_level: Level,
    ) -> Experience {
        let level = fainted_level as f64;
        let base = fainted_base_exp as f64 * level / 5.0;
        let scale = (2.0 * level + 10.0) / (level + participant_level as f64 + 10.0);
        let experience = (base * scale.powf(2.5)).floor();
        (experience.min((Experience::MAX - 1) as f64) as Experience) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceGain {
    /// Index of the participant in the slice it was awarded from.
    pub index: usize,
    pub experience: Experience,
}

/// Works out the experience each standing participant earns for `fainted`.
///
/// `participants` are the pokemon that battled against `fainted`. Fainted
/// participants earn nothing. The participants' stored experience
/// is left untouched; callers decide what to do with the returned gains.
pub fn award_experience<P, Q, E>(
    fainted: &BattlePokemon<P>,
    participants: &[&BattlePokemon<Q>],
    policy: &E,
) -> Vec<ExperienceGain>
where
    P: Deref<Target = Pokemon>,
    Q: Deref<Target = Pokemon>,
    E: ExperiencePolicy + ?Sized,
{
    participants
        .iter()
        .enumerate()
        .filter(|(_, pokemon)| !pokemon.fainted())
        .map(|(index, pokemon)| {
            let experience =
                policy.gain(fainted.level, fainted.pokemon.base_exp, pokemon.level);
            info!("{} gained {} experience points", pokemon.name(), experience);
            ExperienceGain { index, experience }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{pokemon::BattlePokemon, testing};

    use super::{award_experience, ExperienceGain, ExperiencePolicy, ScaledExperience};

    #[test]
    fn scaled_formula() {
        assert_eq!(ScaledExperience.gain(5, 62, 5), 63);
        // (20 / 25) ^ 2.5 = 0.5724
        assert_eq!(ScaledExperience.gain(5, 62, 10), 36);
    }

    #[test]
    fn higher_level_earns_less() {
        let mut previous = u32::MAX;
        for level in 1..=100 {
            let gain = ScaledExperience.gain(30, 142, level);
            assert!(gain >= 1);
            assert!(gain <= previous, "level {} earned more than level {}", level, level - 1);
            previous = gain;
        }
    }

    #[test]
    fn fainted_participants_excluded() {
        let charmander = testing::charmander();
        let squirtle = testing::squirtle();

        let fainted = BattlePokemon::new(&squirtle, 5);
        let participants = [
            BattlePokemon::new(&charmander, 5),
            BattlePokemon::new(&charmander, 7).with_hp(0),
            BattlePokemon::new(&charmander, 10),
        ];

        let participants: Vec<_> = participants.iter().collect();
        let gains = award_experience(&fainted, &participants, &ScaledExperience);

        assert_eq!(
            gains,
            [
                ExperienceGain {
                    index: 0,
                    experience: ScaledExperience.gain(5, 63, 5)
                },
                ExperienceGain {
                    index: 2,
                    experience: ScaledExperience.gain(5, 63, 10)
                },
            ]
        );
        assert!(gains[0].experience > gains[1].experience);
        assert!(participants.iter().all(|p| p.experience == 0));
    }

    #[test]
    fn closure_policy() {
        let charmander = testing::charmander();
        let fainted = BattlePokemon::new(&charmander, 12);
        let participant = BattlePokemon::new(&charmander, 3);

        let flat = |level: u8, base: u32, _: u8| base * level as u32 / 7;
        let gains = award_experience(&fainted, &[&participant], &flat);

        assert_eq!(gains[0].experience, 62 * 12 / 7);
    }
}
