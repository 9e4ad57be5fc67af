//! Static species, move and item data.
//!
//! Everything in here is read-only once a battle starts. The battle core only
//! ever borrows these types through `Deref`, so callers are free to hand out
//! plain references, `Rc`s or `Arc`s from whatever storage they load into.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};
use std::error::Error;

use hashbrown::HashMap;

pub mod item;
pub mod moves;
pub mod pokemon;
pub mod types;

/// Something that can be stored in a [`Dex`].
pub trait Identifiable {
    type Id: Eq + Hash + Clone + Debug + Display;

    fn id(&self) -> &Self::Id;
}

/// Lookup of static data by identifier.
pub trait Dex<T: Identifiable> {
    fn try_get(&self, id: &T::Id) -> Option<&T>;

    fn get(&self, id: &T::Id) -> Result<&T, DexError> {
        self.try_get(id)
            .ok_or_else(|| DexError::Missing(id.to_string()))
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`Dex`] keyed by id.
#[derive(Debug, Clone)]
pub struct BasicDex<T: Identifiable>(HashMap<T::Id, T>);

impl<T: Identifiable> BasicDex<T> {
    pub fn insert(&mut self, value: T) -> Option<T> {
        self.0.insert(value.id().clone(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.values()
    }
}

impl<T: Identifiable> Default for BasicDex<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T: Identifiable> Dex<T> for BasicDex<T> {
    fn try_get(&self, id: &T::Id) -> Option<&T> {
        self.0.get(id)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T: Identifiable> FromIterator<T> for BasicDex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dex = Self::default();
        for value in iter {
            dex.insert(value);
        }
        dex
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// No entry exists for this id.
    Missing(String),
}

impl Error for DexError {}

impl Display for DexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Missing(id) => write!(f, "Could not find dex entry with id {}", id),
        }
    }
}
