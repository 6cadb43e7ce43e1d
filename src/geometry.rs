//! Grid primitives and the pure transforms applied to ships while arranging
//! them. Nothing here validates anything; callers run the field validator
//! after every transform.

/// A grid cell in absolute canvas coordinates.
///
/// Coordinates are signed because padding margins and reveal rings may spill
/// one cell past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// `size` columns by one row.
    Horizontal,
    /// One column by `size` rows.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Width and height, in cells, of a ship of `size` laid out this way.
    pub fn extent(self, size: usize) -> (i32, i32) {
        let size = size as i32;
        match self {
            Orientation::Horizontal => (size, 1),
            Orientation::Vertical => (1, size),
        }
    }
}

/// Axis-aligned rectangle of cells. `x`/`y` is the top-left cell; the right
/// and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column past the rectangle.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the rectangle.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x && cell.x < self.right() && cell.y >= self.y && cell.y < self.bottom()
    }

    /// Cells of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x..right).map(move |x| Cell::new(x, y)))
    }
}

/// Size of the whole drawing area. Drags are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Entities that sit at a top-left grid cell.
pub trait Positioned: Sized {
    fn position(&self) -> Cell;

    /// Same entity relocated to `cell`; every other field untouched.
    fn with_position(self, cell: Cell) -> Self;

    /// Copy translated by `(dx, dy)`.
    fn shifted_by(&self, dx: i32, dy: i32) -> Self
    where
        Self: Clone,
    {
        let at = self.position();
        self.clone().with_position(Cell::new(at.x + dx, at.y + dy))
    }

    /// Copy relocated to the absolute cell `(x, y)`.
    fn moved_to(&self, x: i32, y: i32) -> Self
    where
        Self: Clone,
    {
        self.clone().with_position(Cell::new(x, y))
    }
}

/// Entities that can be laid out horizontally or vertically.
pub trait Orientable: Sized {
    fn orientation(&self) -> Orientation;

    fn with_orientation(self, orientation: Orientation) -> Self;

    /// Copy with the orientation toggled, anchored at the same top-left cell.
    fn flipped(&self) -> Self
    where
        Self: Clone,
    {
        let orientation = self.orientation().flipped();
        self.clone().with_orientation(orientation)
    }
}

/// Transform translating an entity by `(dx, dy)`.
pub fn shift_by<T: Positioned + Clone>(dx: i32, dy: i32) -> impl Fn(&T) -> T {
    move |entity| entity.shifted_by(dx, dy)
}

/// Transform relocating an entity to `(x, y)`.
pub fn move_to<T: Positioned + Clone>(x: i32, y: i32) -> impl Fn(&T) -> T {
    move |entity| entity.moved_to(x, y)
}

/// Toggle the orientation of `entity`.
pub fn flip<T: Orientable + Clone>(entity: &T) -> T {
    entity.flipped()
}
