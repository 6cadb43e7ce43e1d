//! Placement phase: the per-ship move-or-flip gesture and the session that
//! owns the player's fleet while ships are being arranged.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::FleetError;
use crate::config::{DRAG_THRESHOLD, ROSTER, SQUARE_SIZE};
use crate::generator::generate_fleet;
use crate::geometry::{Canvas, Cell, Orientable, Positioned, Rect};
use crate::normalized::Fleet;
use crate::ship::{Ship, ShipId};
use crate::validator::{validate, Validation};

/// Pointer position in presentation pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Phase of a gesture on one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    /// Pressed, pointer has not yet travelled past the threshold.
    Pressed,
    /// Ship follows the pointer.
    Dragging,
}

/// State of a single press on a ship, from pointer down to pointer up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DragGesture {
    ship: ShipId,
    start: Pointer,
    /// Ship position when the press began; drag targets are relative to it.
    origin: Cell,
    phase: GesturePhase,
}

impl DragGesture {
    /// Press on `ship` at `start`.
    pub fn begin(ship: &Ship, start: Pointer) -> Self {
        DragGesture {
            ship: ship.id(),
            start,
            origin: ship.position(),
            phase: GesturePhase::Pressed,
        }
    }

    pub fn ship(&self) -> ShipId {
        self.ship
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Feed a pointer move. Returns the next fleet snapshot when the ship
    /// changed cell, `None` otherwise.
    ///
    /// Once the pointer travels more than [`DRAG_THRESHOLD`] on either axis the
    /// gesture stays a drag until release. The ship lands at its original
    /// cell plus the displacement rounded to whole cells, clamped so that
    /// it stays on `canvas`.
    pub fn pointer_moved(&mut self, fleet: &Fleet, pointer: Pointer, canvas: &Canvas) -> Option<Fleet> {
        let dx = pointer.x - self.start.x;
        let dy = pointer.y - self.start.y;
        if self.phase == GesturePhase::Pressed
            && (libm::fabs(dx) > DRAG_THRESHOLD || libm::fabs(dy) > DRAG_THRESHOLD)
        {
            log::trace!("ship {} starts dragging", self.ship);
            self.phase = GesturePhase::Dragging;
        }
        if self.phase != GesturePhase::Dragging {
            return None;
        }

        let ship = fleet.get(self.ship)?;
        let x = clamp_axis(self.origin.x.saturating_add(cells(dx)), canvas.width - ship.width() - 1);
        let y = clamp_axis(self.origin.y.saturating_add(cells(dy)), canvas.height - ship.height() - 1);
        if ship.position() == Cell::new(x, y) {
            return None;
        }
        Some(fleet.set(self.ship, ship.moved_to(x, y)))
    }

    /// End the gesture. A press that never became a drag flips the ship in
    /// place and returns the new snapshot; a drag keeps the last position.
    pub fn release(self, fleet: &Fleet) -> Option<Fleet> {
        if self.phase == GesturePhase::Dragging {
            log::trace!("ship {} dropped", self.ship);
            return None;
        }
        let ship = fleet.get(self.ship)?;
        log::trace!("ship {} flipped", self.ship);
        Some(fleet.set(self.ship, ship.flipped()))
    }
}

/// Pixels to whole cells, halves rounding up. Saturates at the `i32` range.
fn cells(pixels: f64) -> i32 {
    libm::floor(pixels / SQUARE_SIZE + 0.5) as i32
}

/// Keep a coordinate within `0..=max`. A negative `max` wins over zero.
fn clamp_axis(value: i32, max: i32) -> i32 {
    value.max(0).min(max)
}

/// Whether a ship currently obeys the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipStatus {
    Valid,
    Conflicting,
}

/// The player's fleet during the placement phase.
///
/// Every change replaces the fleet snapshot and recomputes the validation,
/// so readers always see a consistent pair.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementSession {
    fleet: Fleet,
    bounds: Rect,
    canvas: Canvas,
    gesture: Option<DragGesture>,
    validation: Validation,
}

impl PlacementSession {
    /// Session over an existing fleet, validated against `bounds`.
    pub fn new(fleet: Fleet, bounds: Rect, canvas: Canvas) -> Self {
        let validation = validate(fleet.iter(), &bounds);
        PlacementSession {
            fleet,
            bounds,
            canvas,
            gesture: None,
            validation,
        }
    }

    /// Session starting from a random standard fleet.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, bounds: Rect, canvas: Canvas) -> Result<Self, FleetError> {
        let fleet = generate_fleet(rng, &ROSTER, &bounds)?;
        Ok(Self::new(fleet, bounds, canvas))
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// `true` when the fleet may be confirmed.
    pub fn is_ready(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn ship_status(&self, id: ShipId) -> Option<ShipStatus> {
        self.fleet.get(id).map(|_| {
            if self.validation.is_invalid(id) {
                ShipStatus::Conflicting
            } else {
                ShipStatus::Valid
            }
        })
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    /// Ship currently following the pointer, if any.
    pub fn dragging_ship(&self) -> Option<ShipId> {
        self.gesture
            .as_ref()
            .filter(|gesture| gesture.is_dragging())
            .map(DragGesture::ship)
    }

    /// Press on ship `id`. A gesture left open by a lost pointer capture is
    /// dropped; its ship keeps the last position it reached.
    pub fn pointer_down(&mut self, id: ShipId, pointer: Pointer) -> Result<(), FleetError> {
        let ship = self.fleet.get(id).ok_or(FleetError::UnknownShip(id))?;
        if let Some(stale) = self.gesture.take() {
            log::debug!("dropping unfinished gesture on ship {}", stale.ship());
        }
        self.gesture = Some(DragGesture::begin(ship, pointer));
        self.revalidate();
        Ok(())
    }

    /// Pointer moved. Returns `true` when the fleet changed.
    pub fn pointer_move(&mut self, pointer: Pointer) -> bool {
        let next = match self.gesture.as_mut() {
            Some(gesture) => gesture.pointer_moved(&self.fleet, pointer, &self.canvas),
            None => return false,
        };
        self.replace(next)
    }

    /// Pointer released. Returns `true` when the fleet changed.
    pub fn pointer_up(&mut self) -> bool {
        let next = match self.gesture.take() {
            Some(gesture) => gesture.release(&self.fleet),
            None => return false,
        };
        let changed = self.replace(next);
        if !changed {
            self.revalidate();
        }
        changed
    }

    /// Throw the current arrangement away for a fresh random one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), FleetError> {
        let roster: Vec<usize> = self.fleet.iter().map(Ship::size).collect();
        self.fleet = generate_fleet(rng, &roster, &self.bounds)?;
        self.gesture = None;
        self.revalidate();
        Ok(())
    }

    /// Margin cells inside the field for every ship, shown only while a ship
    /// is being dragged.
    pub fn margin_hints(&self) -> Vec<Cell> {
        if self.dragging_ship().is_none() {
            return Vec::new();
        }
        self.fleet
            .iter()
            .flat_map(|ship| ship.margin_within(&self.bounds))
            .collect()
    }

    /// The arrangement as a list, provided no ship breaks the rules.
    pub fn confirm(&self) -> Result<Vec<Ship>, FleetError> {
        if !self.validation.is_valid() {
            let ids = self.validation.invalid_ids().iter().copied().collect();
            return Err(FleetError::InvalidFleet(ids));
        }
        Ok(self.fleet.to_list())
    }

    fn replace(&mut self, next: Option<Fleet>) -> bool {
        match next {
            Some(fleet) => {
                self.fleet = fleet;
                self.revalidate();
                true
            }
            None => false,
        }
    }

    fn revalidate(&mut self) {
        self.validation = validate(self.fleet.iter(), &self.bounds);
    }
}
