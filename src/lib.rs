//! # thavalon
//!
//! Rules engine for THavalon, a hidden-role social deduction game in the
//! Avalon family.
//!
//! ## Design Principles
//!
//! 1. **One mutation surface**: every change to a game goes through a
//!    [`Game`] method that validates first and mutates second.
//!
//! 2. **Open role set**: characters implement the [`Role`] trait; the game
//!    never switches on role names to decide what someone sees.
//!
//! 3. **Deterministic when asked**: all randomness flows from a seeded
//!    [`GameRng`], so a seed reproduces seating, roles and card order.
//!
//! ## Modules
//!
//! - `core`: session ids, players, RNG, configuration, rule tables
//! - `roles`: the `Role` trait and every character
//! - `game`: lobby, setup, proposals, votes, missions and abilities
//! - `registry`: directory of running games
//! - `error`: error taxonomy
//!
//! Transport, sessions and persistence live outside this crate.

pub mod core;
pub mod error;
pub mod game;
pub mod registry;
pub mod roles;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PoolEntry, SessionId};

pub use crate::error::{ErrorKind, GameError, RegistryError, RoleError};

pub use crate::game::{
    mission_result, AbilityOutcome, CardOutcome, CastVote, Game, GamePhase, LobbyStatus,
    MissionInfo, MissionRecord, MissionReport, MissionResult, PlayerInfo, ProposalInfo,
    ProposalOutcome, RevealedRole, RoleReveal, RoundInfo, VoteOutcome, VoteTally,
};

pub use crate::registry::{GameId, GameRegistry, SharedGame};

pub use crate::roles::{AbilityKind, MissionCard, Role, SeenPlayer, Team};
