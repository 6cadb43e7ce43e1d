use crate::geometry::{Canvas, Rect};

/// Side length of each player's square field.
pub const FIELD_SIZE: i32 = 10;
pub const FLEET_SIZE: usize = 10;
/// Ship sizes in generation order: one 4-cell, two 3-cell, three 2-cell and
/// four 1-cell ships.
pub const ROSTER: [usize; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard roster.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Pixels per grid cell on the presentation side.
pub const SQUARE_SIZE: f64 = 20.0;
/// Pointer travel, in pixels along either axis, that turns a press into a drag.
pub const DRAG_THRESHOLD: f64 = SQUARE_SIZE / 3.0;

/// Whole drawing area, in cells. Both fields and their labels live inside it.
pub const CANVAS: Canvas = Canvas::new(25, 13);
pub const PLAYER_FIELD: Rect = Rect::new(1, 1, FIELD_SIZE, FIELD_SIZE);
pub const OPPONENT_FIELD: Rect = Rect::new(13, 1, FIELD_SIZE, FIELD_SIZE);

/// Samples tried for one ship before the generator starts the fleet over.
pub const MAX_ATTEMPTS_PER_SHIP: usize = 1_000;
/// Fresh starts allowed before the generator reports that the roster does not fit.
pub const MAX_RESTARTS: usize = 64;

/// Ids index a dense array, so they must stay below this bound.
pub const MAX_SHIP_ID: usize = 1 << 16;

/// Convert a ship size to the canonical name shown to players. Returns `None`
/// for sizes outside the standard roster.
pub fn ship_class_name(size: usize) -> Option<&'static str> {
    match size {
        4 => Some("battleship"),
        3 => Some("cruiser"),
        2 => Some("destroyer"),
        1 => Some("boat"),
        _ => None,
    }
}
