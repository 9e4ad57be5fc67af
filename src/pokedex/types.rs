use core::fmt::{Display, Formatter, Result as FmtResult};

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Deserialize, Serialize)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// How well a move type lands on a defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Effective {
    /// No effect, 0x
    Ineffective,
    /// Not very effective, 0.5x
    NotVeryEffective,
    /// Normal damage, 1x
    Effective,
    /// Super effective, 2x
    SuperEffective,
    /// Stacked weakness, 4x
    HyperEffective,
}

impl Effective {
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Ineffective => 0.0,
            Self::NotVeryEffective => 0.5,
            Self::Effective => 1.0,
            Self::SuperEffective => 2.0,
            Self::HyperEffective => 4.0,
        }
    }

    /// Collapses a raw chart product into its tier.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier <= 0.0 {
            Self::Ineffective
        } else if multiplier < 1.0 {
            Self::NotVeryEffective
        } else if multiplier < 1.5 {
            Self::Effective
        } else if multiplier < 4.0 {
            Self::SuperEffective
        } else {
            Self::HyperEffective
        }
    }
}

impl Default for Effective {
    fn default() -> Self {
        Self::Effective
    }
}

impl Display for Effective {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Ineffective => f.write_str("had no effect"),
            Self::NotVeryEffective => f.write_str("was not very effective"),
            Self::Effective => f.write_str("was effective"),
            Self::SuperEffective => f.write_str("was super effective"),
            Self::HyperEffective => f.write_str("was extremely effective"),
        }
    }
}

impl PokemonType {
    /// Single type chart lookup of this attacking type against `defender`.
    pub const fn effective(self, defender: Self) -> Effective {
        use PokemonType::*;

        const NONE: Effective = Effective::Ineffective;
        const HALF: Effective = Effective::NotVeryEffective;
        const SUPER: Effective = Effective::SuperEffective;

        match (self, defender) {
            (Normal, Rock | Steel) => HALF,
            (Normal, Ghost) => NONE,

            (Fire, Grass | Ice | Bug | Steel) => SUPER,
            (Fire, Fire | Water | Rock | Dragon) => HALF,

            (Water, Fire | Ground | Rock) => SUPER,
            (Water, Water | Grass | Dragon) => HALF,

            (Electric, Water | Flying) => SUPER,
            (Electric, Electric | Grass | Dragon) => HALF,
            (Electric, Ground) => NONE,

            (Grass, Water | Ground | Rock) => SUPER,
            (Grass, Fire | Grass | Poison | Flying | Bug | Dragon | Steel) => HALF,

            (Ice, Grass | Ground | Flying | Dragon) => SUPER,
            (Ice, Fire | Water | Ice | Steel) => HALF,

            (Fighting, Normal | Ice | Rock | Dark | Steel) => SUPER,
            (Fighting, Poison | Flying | Psychic | Bug | Fairy) => HALF,
            (Fighting, Ghost) => NONE,

            (Poison, Grass | Fairy) => SUPER,
            (Poison, Poison | Ground | Rock | Ghost) => HALF,
            (Poison, Steel) => NONE,

            (Ground, Fire | Electric | Poison | Rock | Steel) => SUPER,
            (Ground, Grass | Bug) => HALF,
            (Ground, Flying) => NONE,

            (Flying, Grass | Fighting | Bug) => SUPER,
            (Flying, Electric | Rock | Steel) => HALF,

            (Psychic, Fighting | Poison) => SUPER,
            (Psychic, Psychic | Steel) => HALF,
            (Psychic, Dark) => NONE,

            (Bug, Grass | Psychic | Dark) => SUPER,
            (Bug, Fire | Fighting | Poison | Flying | Ghost | Steel | Fairy) => HALF,

            (Rock, Fire | Ice | Flying | Bug) => SUPER,
            (Rock, Fighting | Ground | Steel) => HALF,

            (Ghost, Psychic | Ghost) => SUPER,
            (Ghost, Dark) => HALF,
            (Ghost, Normal) => NONE,

            (Dragon, Dragon) => SUPER,
            (Dragon, Steel) => HALF,
            (Dragon, Fairy) => NONE,

            (Dark, Psychic | Ghost) => SUPER,
            (Dark, Fighting | Dark | Fairy) => HALF,

            (Steel, Ice | Rock | Fairy) => SUPER,
            (Steel, Fire | Water | Electric | Steel) => HALF,

            (Fairy, Fighting | Dragon | Dark) => SUPER,
            (Fairy, Fire | Poison | Steel) => HALF,

            _ => Effective::Effective,
        }
    }

    /// Effectiveness against a defender with one or two types.
    ///
    /// Both lookups are multiplied together before collapsing into a tier, so
    /// a double weakness becomes [`Effective::HyperEffective`] and a weakness
    /// paired with a resistance cancels out.
    pub fn effective_against(self, primary: Self, secondary: Option<Self>) -> Effective {
        let mut multiplier = self.effective(primary).multiplier();
        if let Some(secondary) = secondary {
            multiplier *= self.effective(secondary).multiplier();
        }
        Effective::from_multiplier(multiplier)
    }
}

impl Display for PokemonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        core::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use enum_map::Enum;

    use super::{Effective, PokemonType};

    #[test]
    fn chart_is_total() {
        for attack in 0..PokemonType::LENGTH {
            for defend in 0..PokemonType::LENGTH {
                let attack = PokemonType::from_usize(attack);
                let defend = PokemonType::from_usize(defend);
                assert!(matches!(
                    attack.effective(defend),
                    Effective::Ineffective
                        | Effective::NotVeryEffective
                        | Effective::Effective
                        | Effective::SuperEffective
                ));
            }
        }
    }

    #[test]
    fn single_type() {
        assert_eq!(
            PokemonType::Water.effective(PokemonType::Fire),
            Effective::SuperEffective
        );
        assert_eq!(
            PokemonType::Fire.effective(PokemonType::Water),
            Effective::NotVeryEffective
        );
        assert_eq!(
            PokemonType::Ground.effective(PokemonType::Flying),
            Effective::Ineffective
        );
        assert_eq!(
            PokemonType::Normal.effective(PokemonType::Fire),
            Effective::Effective
        );
    }

    #[test]
    fn dual_type() {
        // Ice vs Grass/Flying = 4x
        assert_eq!(
            PokemonType::Ice.effective_against(PokemonType::Grass, Some(PokemonType::Flying)),
            Effective::HyperEffective
        );
        // Water vs Rock/Ground = 4x
        assert_eq!(
            PokemonType::Water.effective_against(PokemonType::Rock, Some(PokemonType::Ground)),
            Effective::HyperEffective
        );
        // Fire vs Water/Grass cancels out
        assert_eq!(
            PokemonType::Fire.effective_against(PokemonType::Water, Some(PokemonType::Grass)),
            Effective::Effective
        );
        // Grass vs Fire/Flying = 0.25x, collapses into the resisted tier
        assert_eq!(
            PokemonType::Grass.effective_against(PokemonType::Fire, Some(PokemonType::Flying)),
            Effective::NotVeryEffective
        );
        // Electric vs Water/Ground, immunity wins
        assert_eq!(
            PokemonType::Electric.effective_against(PokemonType::Water, Some(PokemonType::Ground)),
            Effective::Ineffective
        );
    }

    #[test]
    fn tiers() {
        assert_eq!(Effective::from_multiplier(0.25), Effective::NotVeryEffective);
        assert_eq!(Effective::from_multiplier(2.0), Effective::SuperEffective);
        assert_eq!(Effective::from_multiplier(4.0), Effective::HyperEffective);
        assert_eq!(Effective::HyperEffective.multiplier(), 4.0);
    }
}
