//! Shot resolution against a fixed opponent fleet.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::geometry::{Cell, Rect};
use crate::normalized::Fleet;
use crate::ship::ShipId;

/// Result of firing at a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Nothing at the cell.
    Miss,
    /// A ship was hit and still has intact cells.
    Hit { ship: ShipId },
    /// The last intact cell of a ship was hit. `revealed` lists the margin
    /// cells recorded as misses along with it, excluding any already shot.
    Sunk { ship: ShipId, revealed: Vec<Cell> },
}

impl ShotOutcome {
    /// Id of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit { ship } | ShotOutcome::Sunk { ship, .. } => Some(*ship),
        }
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk { .. })
    }
}

/// How a recorded cell is displayed to the attacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    Hit,
    Miss,
}

/// Tracks the shots fired at one opponent fleet.
///
/// The fleet is frozen for the whole battle. Recorded cells are never
/// removed and per-ship hit counts only grow.
#[derive(Debug, Clone)]
pub struct Battle {
    fleet: Fleet,
    /// Occupied cell to ship, without padding.
    occupancy: BTreeMap<Cell, ShipId>,
    /// Outcome recorded for each cell, fired at or revealed.
    outcomes: BTreeMap<Cell, ShotOutcome>,
    /// Recorded cells in the order they were added.
    order: Vec<Cell>,
    destroyed: BTreeMap<ShipId, usize>,
}

impl Battle {
    /// Start a battle against `fleet`.
    ///
    /// No two ships may touch, even diagonally: the ring revealed around a
    /// sunk ship is recorded as misses. Debug builds panic on a fleet that
    /// breaks this.
    pub fn new(fleet: Fleet) -> Self {
        let mut occupancy = BTreeMap::new();
        for ship in fleet.iter() {
            for cell in ship.cells() {
                occupancy.insert(cell, ship.id());
            }
        }
        debug_assert!(
            fleet.iter().all(|ship| ship
                .padded_cells()
                .all(|cell| occupancy.get(&cell).map_or(true, |&id| id == ship.id()))),
            "battle fleet has touching ships"
        );
        Battle {
            fleet,
            occupancy,
            outcomes: BTreeMap::new(),
            order: Vec::new(),
            destroyed: BTreeMap::new(),
        }
    }

    /// Opponent fleet this battle resolves against.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Fire at `cell`.
    ///
    /// A cell already recorded, whether fired at or revealed around a sunk
    /// ship, returns its earlier outcome and changes nothing.
    pub fn register_shot(&mut self, cell: Cell) -> ShotOutcome {
        if let Some(previous) = self.outcomes.get(&cell) {
            log::trace!("repeat shot at {:?}: {:?}", cell, previous);
            return previous.clone();
        }

        let id = match self.occupancy.get(&cell) {
            Some(&id) => id,
            None => {
                self.record(cell, ShotOutcome::Miss);
                log::trace!("shot at {:?}: miss", cell);
                return ShotOutcome::Miss;
            }
        };

        let count = self.destroyed.entry(id).or_insert(0);
        *count += 1;
        let count = *count;
        let ship = match self.fleet.get(id) {
            Some(ship) => *ship,
            None => {
                // Occupancy is built from the fleet, so every id resolves.
                log::warn!("shot at {:?} hit unknown ship {}", cell, id);
                return ShotOutcome::Hit { ship: id };
            }
        };

        if count < ship.size() {
            let outcome = ShotOutcome::Hit { ship: id };
            self.record(cell, outcome.clone());
            log::trace!("shot at {:?}: hit ship {}", cell, id);
            return outcome;
        }

        let revealed: Vec<Cell> = ship
            .padded_cells()
            .filter(|&c| c != cell && !self.outcomes.contains_key(&c))
            .collect();
        let outcome = ShotOutcome::Sunk {
            ship: id,
            revealed: revealed.clone(),
        };
        self.record(cell, outcome.clone());
        for ring_cell in revealed {
            self.record(ring_cell, ShotOutcome::Miss);
        }
        log::debug!("ship {} sunk at {:?}", id, cell);
        outcome
    }

    fn record(&mut self, cell: Cell, outcome: ShotOutcome) {
        self.outcomes.insert(cell, outcome);
        self.order.push(cell);
    }

    /// Outcome recorded at `cell`, if it was fired at or revealed.
    pub fn outcome_at(&self, cell: Cell) -> Option<&ShotOutcome> {
        self.outcomes.get(&cell)
    }

    /// How a recorded cell is displayed; `None` when not recorded.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        if !self.outcomes.contains_key(&cell) {
            return None;
        }
        Some(if self.occupancy.contains_key(&cell) {
            Mark::Hit
        } else {
            Mark::Miss
        })
    }

    /// Recorded cells in recording order.
    pub fn shots(&self) -> &[Cell] {
        &self.order
    }

    /// Recorded cells that fall inside `field`, with their marks.
    pub fn marks_within(&self, field: &Rect) -> Vec<(Cell, Mark)> {
        self.order
            .iter()
            .filter(|&&cell| field.contains(cell))
            .filter_map(|&cell| self.mark_at(cell).map(|mark| (cell, mark)))
            .collect()
    }

    /// Distinct cells of ship `id` hit so far.
    pub fn destroyed(&self, id: ShipId) -> usize {
        self.destroyed.get(&id).copied().unwrap_or(0)
    }

    pub fn is_sunk(&self, id: ShipId) -> bool {
        self.fleet
            .get(id)
            .map_or(false, |ship| self.destroyed(id) >= ship.size())
    }

    pub fn sunk_count(&self) -> usize {
        self.fleet.keys().iter().filter(|&&id| self.is_sunk(id)).count()
    }

    /// `true` once every opponent ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_count() == self.fleet.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use crate::ship::Ship;
    use alloc::vec;

    fn battle() -> Battle {
        let fleet = Fleet::normalize(vec![
            Ship::new(0, 13, 1, 4, Orientation::Horizontal),
            Ship::new(1, 20, 5, 2, Orientation::Vertical),
            Ship::new(2, 22, 10, 1, Orientation::Horizontal),
        ])
        .unwrap();
        Battle::new(fleet)
    }

    #[test]
    fn miss_is_recorded() {
        let mut battle = battle();
        assert_eq!(battle.register_shot(Cell::new(15, 8)), ShotOutcome::Miss);
        assert_eq!(battle.mark_at(Cell::new(15, 8)), Some(Mark::Miss));
        assert_eq!(battle.shots(), &[Cell::new(15, 8)]);
    }

    #[test]
    fn repeat_shot_is_a_no_op() {
        let mut battle = battle();
        let first = battle.register_shot(Cell::new(13, 1));
        let second = battle.register_shot(Cell::new(13, 1));
        assert_eq!(first, ShotOutcome::Hit { ship: 0 });
        assert_eq!(first, second);
        assert_eq!(battle.destroyed(0), 1);
        assert_eq!(battle.shots().len(), 1);
    }

    #[test]
    fn sinking_reveals_margin() {
        let mut battle = battle();
        assert_eq!(battle.register_shot(Cell::new(20, 5)), ShotOutcome::Hit { ship: 1 });
        // Miss inside the future ring is not revealed again.
        battle.register_shot(Cell::new(21, 7));
        let outcome = battle.register_shot(Cell::new(20, 6));
        match &outcome {
            ShotOutcome::Sunk { ship, revealed } => {
                assert_eq!(*ship, 1);
                // 3x4 padded box minus two ship cells minus one earlier miss.
                assert_eq!(revealed.len(), 12 - 2 - 1);
                assert!(!revealed.contains(&Cell::new(21, 7)));
                assert!(revealed.contains(&Cell::new(19, 4)));
                assert!(revealed.contains(&Cell::new(21, 7 - 3)));
            }
            other => panic!("expected sunk, got {:?}", other),
        }
        assert!(battle.is_sunk(1));
        assert_eq!(battle.mark_at(Cell::new(19, 4)), Some(Mark::Miss));
        assert_eq!(battle.register_shot(Cell::new(19, 4)), ShotOutcome::Miss);
        assert_eq!(battle.register_shot(Cell::new(20, 6)), outcome);
    }

    #[test]
    fn ring_is_not_clamped_to_field() {
        let mut battle = battle();
        let outcome = battle.register_shot(Cell::new(22, 10));
        let revealed = match outcome {
            ShotOutcome::Sunk { revealed, .. } => revealed,
            other => panic!("expected sunk, got {:?}", other),
        };
        assert_eq!(revealed.len(), 8);
        assert!(revealed.contains(&Cell::new(23, 11)));
        let shown = battle.marks_within(&Rect::new(13, 1, 10, 10));
        assert!(shown.iter().all(|(cell, _)| cell.x <= 22 && cell.y <= 10));
        assert_eq!(shown.len(), 4);
    }

    #[test]
    fn victory_is_observable() {
        let mut battle = battle();
        for x in 13..17 {
            battle.register_shot(Cell::new(x, 1));
        }
        battle.register_shot(Cell::new(20, 5));
        battle.register_shot(Cell::new(20, 6));
        assert_eq!(battle.sunk_count(), 2);
        assert!(!battle.all_sunk());
        battle.register_shot(Cell::new(22, 10));
        assert!(battle.all_sunk());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "touching ships")]
    fn touching_fleet_is_rejected_in_debug() {
        let fleet = Fleet::normalize(vec![
            Ship::new(0, 13, 1, 2, Orientation::Horizontal),
            Ship::new(1, 15, 2, 1, Orientation::Horizontal),
        ])
        .unwrap();
        let _ = Battle::new(fleet);
    }
}
