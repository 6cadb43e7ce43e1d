//! Field validation: bounds and the no-touch rule.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::geometry::{Cell, Orientable, Orientation, Rect};
use crate::ship::{Ship, ShipId};

/// Ships found breaking the placement rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Validation {
    invalid: BTreeSet<ShipId>,
}

impl Validation {
    /// `true` when no ship is in conflict.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, id: ShipId) -> bool {
        self.invalid.contains(&id)
    }

    pub fn invalid_ids(&self) -> &BTreeSet<ShipId> {
        &self.invalid
    }
}

/// Check every ship against `bounds` and against every other ship.
///
/// A ship is invalid when it leaves the field or when its footprint lands in
/// another ship's footprint or one-cell margin, diagonals included. Conflicts
/// are reported for both ships, so the result does not depend on the order
/// of `ships`.
pub fn validate<'a, I>(ships: I, bounds: &Rect) -> Validation
where
    I: IntoIterator<Item = &'a Ship>,
{
    // Every ship whose padded footprint covers a cell, in processing order.
    let mut claimed: BTreeMap<Cell, Vec<ShipId>> = BTreeMap::new();
    let mut invalid = BTreeSet::new();

    for ship in ships {
        let id = ship.id();
        if !inside_bounds(ship, bounds) {
            invalid.insert(id);
        }
        for cell in ship.cells() {
            if let Some(owners) = claimed.get(&cell) {
                for &other in owners.iter().filter(|&&other| other != id) {
                    invalid.insert(id);
                    invalid.insert(other);
                }
            }
        }
        for cell in ship.padded_cells() {
            let owners = claimed.entry(cell).or_default();
            if !owners.contains(&id) {
                owners.push(id);
            }
        }
    }

    if !invalid.is_empty() {
        log::trace!("invalid ships: {:?}", invalid);
    }
    Validation { invalid }
}

/// Bounds rule. The short axis is compared with `>=` against the far edge
/// and the long axis with `>` after adding the size; both reject exactly the
/// ships that stick out of the field.
fn inside_bounds(ship: &Ship, bounds: &Rect) -> bool {
    let (x, y, size) = (ship.x(), ship.y(), ship.size() as i32);
    if x < bounds.x || y < bounds.y {
        return false;
    }
    match ship.orientation() {
        Orientation::Vertical => !(y + size > bounds.bottom() || x >= bounds.right()),
        Orientation::Horizontal => !(y >= bounds.bottom() || x + size > bounds.right()),
    }
}
