use proptest::prelude::*;
use seabattle::{flip, move_to, shift_by, Cell, Orientable, Orientation, Positioned, Ship};

fn orientation(horizontal: bool) -> Orientation {
    if horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

proptest! {
    #[test]
    fn footprint_is_a_straight_run(
        x in -20..20i32,
        y in -20..20i32,
        size in 1..=6usize,
        horizontal in any::<bool>(),
    ) {
        let ship = Ship::new(0, x, y, size, orientation(horizontal));
        let cells: Vec<Cell> = ship.cells().collect();
        prop_assert_eq!(cells.len(), size);
        for (i, cell) in cells.iter().enumerate() {
            let i = i as i32;
            let expected = if horizontal { Cell::new(x + i, y) } else { Cell::new(x, y + i) };
            prop_assert_eq!(*cell, expected);
            prop_assert!(ship.contains(*cell));
        }
        prop_assert_eq!(ship.padded_cells().count(), (ship.width() as usize + 2) * (ship.height() as usize + 2));
    }

    #[test]
    fn transforms_are_pure(
        x in -20..20i32,
        y in -20..20i32,
        dx in -5..5i32,
        dy in -5..5i32,
        horizontal in any::<bool>(),
    ) {
        let ship = Ship::new(3, x, y, 3, orientation(horizontal));

        let shifted = shift_by::<Ship>(dx, dy)(&ship);
        prop_assert_eq!(shifted.position(), Cell::new(x + dx, y + dy));
        prop_assert_eq!(shift_by::<Ship>(-dx, -dy)(&shifted), ship);

        let moved = move_to::<Ship>(dx, dy)(&ship);
        prop_assert_eq!(moved.position(), Cell::new(dx, dy));
        prop_assert_eq!(moved.orientation(), ship.orientation());

        let flipped = flip(&ship);
        prop_assert_eq!(flipped.position(), ship.position());
        prop_assert_eq!(flipped.size(), ship.size());
        prop_assert_ne!(flipped.orientation(), ship.orientation());
        prop_assert_eq!(flip(&flipped), ship);
    }
}
