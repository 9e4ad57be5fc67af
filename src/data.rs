use serde::{Deserialize, Serialize};

/// Damage multiplier applied when a side faces more than one opponent.
pub const MULTI_BATTLE_COEFFICIENT: f64 = 0.75;

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleData {
    #[serde(default)]
    pub type_: BattleType,
    #[serde(default)]
    pub settings: BattleSettings,
}

impl BattleData {
    pub fn damage_coefficient(&self) -> f64 {
        match self.settings.opponents > 1 {
            true => MULTI_BATTLE_COEFFICIENT,
            false => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleType {
    Wild,
    Trainer,
    GymLeader,
}

impl BattleType {
    /// Pokeballs can only be thrown at wild pokemon.
    pub fn allows_catching(&self) -> bool {
        matches!(self, Self::Wild)
    }
}

impl Default for BattleType {
    fn default() -> Self {
        Self::Wild
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSettings {
    #[serde(default = "const_true")]
    pub allow_forfeit: bool,
    #[serde(default = "const_one")]
    pub opponents: u8,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            allow_forfeit: true,
            opponents: 1,
        }
    }
}

const fn const_true() -> bool {
    true
}

const fn const_one() -> u8 {
    1
}
