//! Error type shared by the fleet engine.

use alloc::vec::Vec;

use crate::geometry::Rect;
use crate::ship::ShipId;

/// Errors returned by fleet generation, collection updates and game flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// A roster size cannot fit inside the bounds in either orientation.
    ShipTooLarge { size: usize, bounds: Rect },
    /// Random placement gave up after exhausting every restart.
    RosterDoesNotFit { restarts: usize, attempts: usize },
    /// No ship with this id exists in the fleet.
    UnknownShip(ShipId),
    /// The same id appeared twice in a list being normalized.
    DuplicateId(ShipId),
    /// The id is too large to index a fleet.
    IdOutOfRange(ShipId),
    /// The fleet still has ships breaking the placement rules.
    InvalidFleet(Vec<ShipId>),
    /// The battle has already started; placement is closed.
    BattleAlreadyStarted,
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::ShipTooLarge { size, bounds } => write!(
                f,
                "Ship of size {} does not fit in a {}x{} field",
                size, bounds.width, bounds.height
            ),
            FleetError::RosterDoesNotFit { restarts, attempts } => write!(
                f,
                "Unable to place fleet after {} restarts of {} attempts per ship",
                restarts, attempts
            ),
            FleetError::UnknownShip(id) => write!(f, "No ship with id {}", id),
            FleetError::DuplicateId(id) => write!(f, "Ship id {} appears more than once", id),
            FleetError::IdOutOfRange(id) => {
                write!(f, "Ship id {} exceeds the limit of {}", id, crate::config::MAX_SHIP_ID)
            }
            FleetError::InvalidFleet(ids) => write!(f, "Ships {:?} break placement rules", ids),
            FleetError::BattleAlreadyStarted => write!(f, "Battle has already started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
