use proptest::prelude::*;
use seabattle::{validate, Cell, Orientation, Rect, Ship};

const FIELD: Rect = Rect::new(1, 1, 10, 10);

fn arb_ship(id: usize) -> impl Strategy<Value = Ship> {
    (0..13i32, 0..13i32, 1..=4usize, any::<bool>()).prop_map(move |(x, y, size, horizontal)| {
        let orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(id, x, y, size, orientation)
    })
}

fn arb_fleet() -> impl Strategy<Value = Vec<Ship>> {
    (1..8usize).prop_flat_map(|n| (0..n).map(arb_ship).collect::<Vec<_>>())
}

fn touching(a: &Ship, b: &Ship) -> bool {
    a.cells()
        .any(|p| b.cells().any(|q| (p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1))
}

fn inside(ship: &Ship, field: &Rect) -> bool {
    ship.cells().all(|c| field.contains(c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_pairwise_definition(ships in arb_fleet()) {
        let result = validate(&ships, &FIELD);
        for ship in &ships {
            let conflicts = ships
                .iter()
                .any(|other| other.id() != ship.id() && touching(ship, other));
            let expected = conflicts || !inside(ship, &FIELD);
            prop_assert_eq!(result.is_invalid(ship.id()), expected, "ship {:?}", ship);
        }
        prop_assert_eq!(result.is_valid(), result.invalid_ids().is_empty());
    }

    #[test]
    fn conflicts_are_symmetric(ships in arb_fleet()) {
        let result = validate(&ships, &FIELD);
        for a in &ships {
            for b in &ships {
                if a.id() != b.id() && touching(a, b) {
                    prop_assert!(result.is_invalid(a.id()) && result.is_invalid(b.id()));
                }
            }
        }
    }

    #[test]
    fn order_does_not_matter(ships in arb_fleet()) {
        let forward = validate(&ships, &FIELD);
        let backward = validate(ships.iter().rev(), &FIELD);
        prop_assert_eq!(forward, backward);
    }
}

#[test]
fn padding_margin_scenario() {
    let field = Rect::new(0, 0, 10, 10);
    let first = Ship::new(0, 0, 0, 2, Orientation::Horizontal);
    let second = Ship::new(1, 2, 0, 2, Orientation::Horizontal);
    let result = validate(&[first, second], &field);
    assert!(!result.is_valid());
    assert!(first.padded_cells().any(|c| c == Cell::new(2, 0)));

    let apart = Ship::new(1, 3, 0, 2, Orientation::Horizontal);
    assert!(validate(&[first, apart], &field).is_valid());
}
