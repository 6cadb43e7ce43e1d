//! Id-indexed collection with a stable enumeration order.
//!
//! Entries live in a dense array addressed by id, since ship ids are small
//! sequential integers. Updates never mutate in place: `set` returns a new
//! collection, so a snapshot handed to a reader is never observed half-updated.

use alloc::vec::Vec;

use crate::common::FleetError;
use crate::config::MAX_SHIP_ID;
use crate::ship::{Ship, ShipId};

/// Types carrying a stable identifier.
pub trait Keyed {
    fn key(&self) -> ShipId;
}

impl Keyed for Ship {
    fn key(&self) -> ShipId {
        self.id()
    }
}

/// Ordered key sequence paired with an id-to-entity mapping.
///
/// Serializes as the denormalized list and deserializes through
/// [`Normalized::normalize`], so ids are checked on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(
        into = "Vec<T>",
        try_from = "Vec<T>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de> + Keyed + Clone"
        )
    )
)]
pub struct Normalized<T> {
    keys: Vec<ShipId>,
    entries: Vec<Option<T>>,
}

/// A player's ships, in generation order.
pub type Fleet = Normalized<Ship>;

impl<T: Keyed + Clone> Normalized<T> {
    /// Index `list` by id, keeping its order as the key order.
    ///
    /// Ids must be below [`MAX_SHIP_ID`].
    pub fn normalize<I>(list: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut keys = Vec::new();
        let mut entries: Vec<Option<T>> = Vec::new();
        for entity in list {
            let id = entity.key();
            if id >= MAX_SHIP_ID {
                return Err(FleetError::IdOutOfRange(id));
            }
            if id >= entries.len() {
                entries.resize(id + 1, None);
            }
            if entries[id].is_some() {
                return Err(FleetError::DuplicateId(id));
            }
            keys.push(id);
            entries[id] = Some(entity);
        }
        Ok(Normalized { keys, entries })
    }

    /// Entity stored under `id`.
    pub fn get(&self, id: ShipId) -> Option<&T> {
        self.entries.get(id).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: ShipId) -> bool {
        self.get(id).is_some()
    }

    /// New collection with the entry for `id` replaced; key order unchanged.
    ///
    /// `id` must already be present. Debug builds panic otherwise; release
    /// builds log the violation and return an unchanged copy.
    pub fn set(&self, id: ShipId, entity: T) -> Self {
        match self.try_set(id, entity) {
            Ok(next) => next,
            Err(err) => {
                debug_assert!(false, "Normalized::set: {}", err);
                log::warn!("ignoring update: {}", err);
                self.clone()
            }
        }
    }

    /// Checked variant of [`Normalized::set`].
    pub fn try_set(&self, id: ShipId, entity: T) -> Result<Self, FleetError> {
        if !self.contains(id) {
            return Err(FleetError::UnknownShip(id));
        }
        debug_assert_eq!(entity.key(), id, "entity stored under a foreign id");
        let mut next = self.clone();
        next.entries[id] = Some(entity);
        Ok(next)
    }

    /// Ids in enumeration order.
    pub fn keys(&self) -> &[ShipId] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entities in key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.keys.iter().filter_map(move |&id| self.get(id))
    }

    /// Denormalize back into an ordered list.
    pub fn to_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> From<Normalized<T>> for Vec<T> {
    fn from(collection: Normalized<T>) -> Self {
        let Normalized { keys, mut entries } = collection;
        keys.iter()
            .filter_map(|&id| entries.get_mut(id).and_then(Option::take))
            .collect()
    }
}

impl<T: Keyed + Clone> TryFrom<Vec<T>> for Normalized<T> {
    type Error = FleetError;

    fn try_from(list: Vec<T>) -> Result<Self, FleetError> {
        Normalized::normalize(list)
    }
}

impl<T> Default for Normalized<T> {
    fn default() -> Self {
        Normalized {
            keys: Vec::new(),
            entries: Vec::new(),
        }
    }
}
