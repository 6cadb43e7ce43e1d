//! Random fleet generation by rejection sampling.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::FleetError;
use crate::config::{MAX_ATTEMPTS_PER_SHIP, MAX_RESTARTS, ROSTER};
use crate::geometry::{Orientation, Rect};
use crate::normalized::Fleet;
use crate::ship::Ship;
use crate::validator::validate;

/// Roster and retry limits used by [`FleetGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Ship sizes, placed in this order; ship ids follow it.
    pub roster: Vec<usize>,
    /// Samples tried for one ship before the whole fleet is started over.
    pub max_attempts_per_ship: usize,
    /// Fresh starts before giving up with [`FleetError::RosterDoesNotFit`].
    pub max_restarts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            roster: ROSTER.to_vec(),
            max_attempts_per_ship: MAX_ATTEMPTS_PER_SHIP,
            max_restarts: MAX_RESTARTS,
        }
    }
}

/// Places a roster of ships at random inside a field.
#[derive(Debug, Clone, Default)]
pub struct FleetGenerator {
    config: GeneratorConfig,
}

impl FleetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fleet that passes [`validate`] against `bounds`.
    ///
    /// Each ship is sampled with a fair coin for its orientation and a uniform
    /// top-left cell that keeps it inside `bounds`, then kept only if the fleet
    /// so far is still valid. A ship that keeps failing restarts the whole
    /// fleet, which lets earlier ships move out of the way.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, bounds: &Rect) -> Result<Fleet, FleetError> {
        for &size in &self.config.roster {
            if !fits(size, Orientation::Horizontal, bounds) && !fits(size, Orientation::Vertical, bounds) {
                return Err(FleetError::ShipTooLarge {
                    size,
                    bounds: *bounds,
                });
            }
        }

        for restart in 0..=self.config.max_restarts {
            if let Some(ships) = self.try_place(rng, bounds) {
                log::debug!(
                    "generated fleet of {} ships in {:?} after {} restarts",
                    ships.len(),
                    bounds,
                    restart
                );
                return Fleet::normalize(ships);
            }
            log::debug!("fleet generation restart {} in {:?}", restart + 1, bounds);
        }

        Err(FleetError::RosterDoesNotFit {
            restarts: self.config.max_restarts,
            attempts: self.config.max_attempts_per_ship,
        })
    }

    /// One pass over the roster. `None` when some ship ran out of attempts.
    fn try_place<R: Rng + ?Sized>(&self, rng: &mut R, bounds: &Rect) -> Option<Vec<Ship>> {
        let mut ships: Vec<Ship> = Vec::with_capacity(self.config.roster.len());
        for (id, &size) in self.config.roster.iter().enumerate() {
            let mut placed = false;
            for _ in 0..self.config.max_attempts_per_ship {
                let orientation = if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if !fits(size, orientation, bounds) {
                    continue;
                }
                let (w, h) = orientation.extent(size);
                let x = bounds.x + rng.random_range(0..=bounds.width - w);
                let y = bounds.y + rng.random_range(0..=bounds.height - h);
                ships.push(Ship::new(id, x, y, size, orientation));
                if validate(&ships, bounds).is_valid() {
                    placed = true;
                    break;
                }
                ships.pop();
            }
            if !placed {
                return None;
            }
        }
        Some(ships)
    }
}

/// Generate a fleet for `roster` inside `bounds` with the default retry limits.
pub fn generate_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &[usize],
    bounds: &Rect,
) -> Result<Fleet, FleetError> {
    FleetGenerator::new(GeneratorConfig {
        roster: roster.to_vec(),
        ..GeneratorConfig::default()
    })
    .generate(rng, bounds)
}

fn fits(size: usize, orientation: Orientation, bounds: &Rect) -> bool {
    let (w, h) = orientation.extent(size);
    size > 0 && w <= bounds.width && h <= bounds.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLAYER_FIELD;
    use alloc::vec;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn standard_roster_is_valid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let fleet = generate_fleet(&mut rng, &ROSTER, &PLAYER_FIELD).unwrap();
        assert_eq!(fleet.len(), ROSTER.len());
        assert!(validate(fleet.iter(), &PLAYER_FIELD).is_valid());
        let sizes: Vec<_> = fleet.iter().map(Ship::size).collect();
        assert_eq!(sizes, ROSTER.to_vec());
        let ids: Vec<_> = fleet.iter().map(Ship::id).collect();
        assert_eq!(ids, (0..ROSTER.len()).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_fleet() {
        let a = generate_fleet(&mut SmallRng::seed_from_u64(99), &ROSTER, &PLAYER_FIELD).unwrap();
        let b = generate_fleet(&mut SmallRng::seed_from_u64(99), &ROSTER, &PLAYER_FIELD).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_ship_is_rejected_up_front() {
        let mut rng = SmallRng::seed_from_u64(1);
        let bounds = Rect::new(0, 0, 3, 3);
        let err = generate_fleet(&mut rng, &[4], &bounds).unwrap_err();
        assert_eq!(err, FleetError::ShipTooLarge { size: 4, bounds });
    }

    #[test]
    fn crowded_field_gives_up() {
        let mut rng = SmallRng::seed_from_u64(1);
        let generator = FleetGenerator::new(GeneratorConfig {
            roster: vec![1, 1, 1, 1, 1],
            max_attempts_per_ship: 20,
            max_restarts: 3,
        });
        let err = generator.generate(&mut rng, &Rect::new(0, 0, 2, 2)).unwrap_err();
        assert_eq!(
            err,
            FleetError::RosterDoesNotFit {
                restarts: 3,
                attempts: 20
            }
        );
    }

    #[test]
    fn tall_field_forces_vertical() {
        let mut rng = SmallRng::seed_from_u64(3);
        let bounds = Rect::new(0, 0, 1, 5);
        let fleet = generate_fleet(&mut rng, &[3], &bounds).unwrap();
        let ship = fleet.get(0).unwrap();
        assert_eq!(crate::geometry::Orientable::orientation(ship), Orientation::Vertical);
    }
}
