#![cfg(feature = "std")]

//! Plain-text rendering of a field for the command-line front end.

use std::fmt::Write;
use std::string::String;

use crate::{
    battle::{Battle, Mark},
    geometry::{Cell, Rect},
    ship::Ship,
    validator::Validation,
};

/// Column label for the `col`-th column of a field, starting at zero.
fn column_label(col: i32) -> char {
    (b'A' + col as u8) as char
}

/// Render `field` with row numbers and column letters.
///
/// Ships are drawn as `S`, or `!` when `validation` flags them. Recorded
/// shots from `battle` draw as `X` for hits and `o` for misses and take
/// precedence over ships.
pub fn render_field<'a, I>(
    field: &Rect,
    ships: I,
    validation: Option<&Validation>,
    battle: Option<&Battle>,
) -> String
where
    I: IntoIterator<Item = &'a Ship>,
{
    let ships: std::vec::Vec<&Ship> = ships.into_iter().collect();
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..field.width {
        let _ = write!(out, " {}", column_label(col));
    }
    out.push('\n');
    for row in 0..field.height {
        let _ = write!(out, "{:2} ", row + 1);
        for col in 0..field.width {
            let cell = Cell::new(field.x + col, field.y + row);
            let ch = match battle.and_then(|b| b.mark_at(cell)) {
                Some(Mark::Hit) => 'X',
                Some(Mark::Miss) => 'o',
                None => match ships.iter().find(|ship| ship.contains(cell)) {
                    Some(ship) if validation.map_or(false, |v| v.is_invalid(ship.id())) => '!',
                    Some(_) => 'S',
                    None => '.',
                },
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Parse a `col row` pair, both 1-based within a field, into an absolute
/// cell of `field`. Returns `None` for anything outside it.
pub fn parse_target(input: &str, field: &Rect) -> Option<Cell> {
    let mut parts = input.split_whitespace();
    let col: i32 = parts.next()?.parse().ok()?;
    let row: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let cell = Cell::new(field.x + col - 1, field.y + row - 1);
    field.contains(cell).then_some(cell)
}
