use serde::{Deserialize, Serialize};

use super::Identifiable;

pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ItemCategory {
    Medicine,
    Pokeball,
    Other,
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,

    #[serde(default)]
    pub category: ItemCategory,

    /// HP restored by medicine, or capture strength of a pokeball
    /// (100 is a standard ball).
    #[serde(default)]
    pub attributes: u16,
}

impl Identifiable for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
