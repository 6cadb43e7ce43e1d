//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_fleet, validate, Battle, Cell, Fleet, FleetError, Game, GameStatus, Orientation,
    PlacementSession, Rect, Ship, ShipId, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::render_field};
