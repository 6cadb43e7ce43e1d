//! Ship definition and footprint geometry.

use core::fmt;

use crate::geometry::{Cell, Orientable, Orientation, Positioned, Rect};

/// Identifier of a ship, stable for the ship's lifetime. Generated fleets
/// number their ships sequentially from zero.
pub type ShipId = usize;

/// A ship placed at a top-left cell.
///
/// The occupied cells follow entirely from position, size and orientation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    x: i32,
    y: i32,
    size: usize,
    orientation: Orientation,
}

impl Ship {
    /// Create a ship with the top-left cell at (`x`, `y`).
    pub const fn new(id: ShipId, x: i32, y: i32, size: usize, orientation: Orientation) -> Self {
        Ship {
            id,
            x,
            y,
            size,
            orientation,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Columns covered by the footprint.
    pub fn width(&self) -> i32 {
        self.orientation.extent(self.size).0
    }

    /// Rows covered by the footprint.
    pub fn height(&self) -> i32 {
        self.orientation.extent(self.size).1
    }

    /// Occupied cells, from the top-left cell outwards.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.size as i32).map(move |i| match orientation {
            Orientation::Horizontal => Cell::new(x + i, y),
            Orientation::Vertical => Cell::new(x, y + i),
        })
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x
            && cell.x < self.x + self.width()
            && cell.y >= self.y
            && cell.y < self.y + self.height()
    }

    /// Bounding box of the footprint grown by one cell on every side.
    pub fn padded_bounds(&self) -> Rect {
        Rect::new(self.x - 1, self.y - 1, self.width() + 2, self.height() + 2)
    }

    /// Footprint plus its one-cell padding margin, column by column.
    pub fn padded_cells(&self) -> impl Iterator<Item = Cell> {
        let pad = self.padded_bounds();
        let (y, bottom) = (pad.y, pad.bottom());
        (pad.x..pad.right()).flat_map(move |x| (y..bottom).map(move |y| Cell::new(x, y)))
    }

    /// Padding margin cells that fall inside `field`; the footprint itself is
    /// excluded.
    pub fn margin_within(&self, field: &Rect) -> impl Iterator<Item = Cell> + '_ {
        let field = *field;
        self.padded_cells()
            .filter(move |&cell| !self.contains(cell) && field.contains(cell))
    }
}

impl Positioned for Ship {
    fn position(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    fn with_position(self, cell: Cell) -> Self {
        Ship {
            x: cell.x,
            y: cell.y,
            ..self
        }
    }
}

impl Orientable for Ship {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn with_orientation(self, orientation: Orientation) -> Self {
        Ship {
            orientation,
            ..self
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, origin: ({}, {}), size: {}, orientation: {:?} }}",
            self.id, self.x, self.y, self.size, self.orientation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{flip, move_to, shift_by};
    use alloc::vec::Vec;

    #[test]
    fn footprint_follows_orientation() {
        let ship = Ship::new(0, 2, 3, 3, Orientation::Horizontal);
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells, [(2, 3), (3, 3), (4, 3)].map(Cell::from).to_vec());

        let ship = ship.flipped();
        let cells: Vec<_> = ship.cells().collect();
        assert_eq!(cells, [(2, 3), (2, 4), (2, 5)].map(Cell::from).to_vec());
        assert!(ship.contains(Cell::new(2, 5)));
        assert!(!ship.contains(Cell::new(3, 3)));
    }

    #[test]
    fn padded_cells_cover_margin() {
        let ship = Ship::new(0, 0, 0, 2, Orientation::Horizontal);
        assert_eq!(ship.padded_cells().count(), 4 * 3);
        assert!(ship.padded_cells().any(|c| c == Cell::new(-1, -1)));
        assert!(ship.padded_cells().any(|c| c == Cell::new(2, 1)));
    }

    #[test]
    fn margin_is_clipped_to_field() {
        let field = Rect::new(1, 1, 10, 10);
        let corner = Ship::new(0, 1, 1, 1, Orientation::Horizontal);
        let margin: Vec<_> = corner.margin_within(&field).collect();
        assert_eq!(margin, [(1, 2), (2, 1), (2, 2)].map(Cell::from).to_vec());

        let middle = Ship::new(1, 5, 5, 1, Orientation::Vertical);
        assert_eq!(middle.margin_within(&field).count(), 8);
    }

    #[test]
    fn transforms_keep_identity() {
        let ship = Ship::new(7, 4, 4, 2, Orientation::Vertical);

        let shifted = shift_by::<Ship>(-1, 2)(&ship);
        assert_eq!(shifted.position(), Cell::new(3, 6));
        assert_eq!((shifted.id(), shifted.size()), (7, 2));

        let moved = move_to::<Ship>(9, 0)(&ship);
        assert_eq!(moved.position(), Cell::new(9, 0));
        assert_eq!(moved.orientation(), Orientation::Vertical);

        let flipped = flip(&ship);
        assert_eq!(flipped.orientation(), Orientation::Horizontal);
        assert_eq!(flipped.position(), ship.position());
        assert_eq!(flip(&flipped), ship);
    }
}
