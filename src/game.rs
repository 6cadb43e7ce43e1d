use alloc::vec::Vec;
use rand::Rng;

use crate::{
    battle::{Battle, ShotOutcome},
    common::FleetError,
    config::{CANVAS, OPPONENT_FIELD, PLAYER_FIELD, ROSTER},
    generator::generate_fleet,
    geometry::Cell,
    placement::PlacementSession,
    ship::Ship,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Ships are still being arranged.
    Planning,
    InProgress,
    /// Every opponent ship is sunk.
    Won,
}

/// Battle phase: the player's confirmed ships and the shots at the opponent.
#[derive(Debug, Clone)]
pub struct BattlePhase {
    own: Vec<Ship>,
    battle: Battle,
}

impl BattlePhase {
    /// The player's ships, frozen at confirmation.
    pub fn own_ships(&self) -> &[Ship] {
        &self.own
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }
}

/// Whole game flow: placement, then battle against a static random fleet.
#[derive(Debug, Clone)]
pub enum Game {
    Planning(PlacementSession),
    Battle(BattlePhase),
}

impl Game {
    /// New game with a random player fleet on the player's field.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, FleetError> {
        Ok(Game::Planning(PlacementSession::generate(rng, PLAYER_FIELD, CANVAS)?))
    }

    /// Confirm the player's fleet and place the opponent's.
    ///
    /// Fails without changing anything while the player's fleet breaks the
    /// placement rules, or when the battle has already started.
    pub fn start_battle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), FleetError> {
        let session = match self {
            Game::Planning(session) => session,
            Game::Battle(_) => return Err(FleetError::BattleAlreadyStarted),
        };
        let own = session.confirm()?;
        let enemy = generate_fleet(rng, &ROSTER, &OPPONENT_FIELD)?;
        log::info!("battle started against {} ships", enemy.len());
        *self = Game::Battle(BattlePhase {
            own,
            battle: Battle::new(enemy),
        });
        Ok(())
    }

    pub fn placement(&self) -> Option<&PlacementSession> {
        match self {
            Game::Planning(session) => Some(session),
            Game::Battle(_) => None,
        }
    }

    pub fn placement_mut(&mut self) -> Option<&mut PlacementSession> {
        match self {
            Game::Planning(session) => Some(session),
            Game::Battle(_) => None,
        }
    }

    pub fn battle(&self) -> Option<&BattlePhase> {
        match self {
            Game::Planning(_) => None,
            Game::Battle(phase) => Some(phase),
        }
    }

    /// Fire at an opponent cell. `None` outside the battle phase.
    pub fn fire(&mut self, cell: Cell) -> Option<ShotOutcome> {
        match self {
            Game::Planning(_) => None,
            Game::Battle(phase) => Some(phase.battle.register_shot(cell)),
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self {
            Game::Planning(_) => GameStatus::Planning,
            Game::Battle(phase) if phase.battle.all_sunk() => GameStatus::Won,
            Game::Battle(_) => GameStatus::InProgress,
        }
    }
}
