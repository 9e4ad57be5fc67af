//! Pokemon battle resolution
//!
//! The core of this crate is pure: turn ordering, damage and type
//! effectiveness take every random outcome as a parameter. The `engine`
//! feature adds a [`rand`] backed battle session on top of it.

pub mod pokedex;

mod data;
pub use data::*;

pub mod experience;
pub mod item;
pub mod moves;
pub mod party;
pub mod pokemon;
pub mod report;
pub mod state;

pub mod endpoint;

#[cfg(feature = "engine")]
pub mod random;

#[cfg(feature = "engine")]
mod battle;
#[cfg(feature = "engine")]
pub use battle::*;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {

    #[cfg(feature = "engine")]
    pub use crate::battle::*;

    pub use crate::endpoint::BattleEndpoint;
    pub use crate::experience::{award_experience, ExperiencePolicy, ScaledExperience};
    pub use crate::item::{catch, heal};
    pub use crate::moves::{damage::compute_damage, resolve_turn_order, BattleInput, BattleMove, Side};
    pub use crate::party::BattleParty;
    pub use crate::pokemon::BattlePokemon;
    pub use crate::report::{BattleEvent, BattleReport};
    pub use crate::state::BattleOutcome;
    pub use crate::{BattleData, BattleSettings, BattleType};
}
