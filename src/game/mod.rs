//! # Game Module
//!
//! The turn-based simulation layer: the player and the [`Dungeon`]
//! aggregate that owns the generated world and exposes every engine
//! operation.

pub mod dungeon;
pub mod player;

pub use dungeon::Dungeon;
pub use player::Player;
