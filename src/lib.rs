#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battle;
mod common;
mod config;
mod game;
mod generator;
pub mod geometry;
#[cfg(feature = "std")]
mod logging;
mod normalized;
mod placement;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;
mod validator;

pub use battle::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use geometry::{flip, move_to, shift_by, Canvas, Cell, Orientable, Orientation, Positioned, Rect};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use normalized::*;
pub use placement::*;
pub use ship::*;
pub use validator::*;
