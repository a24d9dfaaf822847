//! Core building blocks: players, RNG, configuration and rule tables.
//!
//! Nothing here knows about phases or turns; the `game` module drives these.

pub mod config;
pub mod player;
pub mod rng;
pub mod tables;

pub use config::{GameConfig, PoolEntry};
pub use player::{Player, SessionId};
pub use rng::GameRng;
