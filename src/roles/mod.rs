//! Characters: team, what each one learns about the table, and what it may
//! play on a mission.
//!
//! Every character implements [`Role`]. Visibility is decided by each role
//! looking at a [`SeenPlayer`] snapshot of another player, so adding a new
//! character means adding a new type, never editing an existing one.
//!
//! ```
//! use thavalon::roles::{Merlin, Mordred, Morgana, Role, SeenPlayer};
//!
//! let mut merlin = Merlin::new();
//! let morgana = SeenPlayer::of("Alice", &Morgana::new(false));
//! let mordred = SeenPlayer::of("Bob", &Mordred::new(false));
//!
//! assert_eq!(merlin.add_seen_player(&morgana), Ok(true));
//! assert_eq!(merlin.add_seen_player(&mordred), Ok(false));
//! ```

mod ability;
mod catalog;
mod evil;

mod agravaine;
mod colgrevance;
mod lancelot;
mod lover;
mod maelegant;
mod maeve;
mod merlin;
mod mordred;
mod morgana;
mod nimue;
mod oberon;
mod percival;
mod titania;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RoleError;

pub use ability::{UseCounter, DEFAULT_ABILITY_USES};
pub use catalog::{build_role, is_known_role, ROLE_NAMES};
pub use evil::EvilSight;

pub use agravaine::Agravaine;
pub use colgrevance::Colgrevance;
pub use lancelot::Lancelot;
pub use lover::Lover;
pub use maelegant::Maelegant;
pub use maeve::Maeve;
pub use merlin::Merlin;
pub use mordred::Mordred;
pub use morgana::Morgana;
pub use nimue::Nimue;
pub use oberon::Oberon;
pub use percival::Percival;
pub use titania::Titania;

/// Role names, used when one role needs to recognise another.
pub mod names {
    pub const MERLIN: &str = "Merlin";
    pub const PERCIVAL: &str = "Percival";
    pub const TRISTAN: &str = "Tristan";
    pub const ISEULT: &str = "Iseult";
    pub const NIMUE: &str = "Nimue";
    pub const LANCELOT: &str = "Lancelot";
    pub const TITANIA: &str = "Titania";
    pub const MORDRED: &str = "Mordred";
    pub const MORGANA: &str = "Morgana";
    pub const MAELEGANT: &str = "Maelegant";
    pub const MAEVE: &str = "Maeve";
    pub const OBERON: &str = "Oberon";
    pub const AGRAVAINE: &str = "Agravaine";
    pub const COLGREVANCE: &str = "Colgrevance";
}

/// The two sides of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Good,
    Evil,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Good => write!(f, "GOOD"),
            Team::Evil => write!(f, "EVIL"),
        }
    }
}

/// A card played face-down on a mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionCard {
    Success,
    Fail,
    Reverse,
}

impl fmt::Display for MissionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionCard::Success => write!(f, "SUCCESS"),
            MissionCard::Fail => write!(f, "FAIL"),
            MissionCard::Reverse => write!(f, "REVERSE"),
        }
    }
}

/// What a role's ability does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Hide the per-player breakdown of the current vote.
    ObscureVote,
    /// Declare the mission just completed as failed.
    DeclareFail,
}

/// Snapshot of another player, as handed to [`Role::add_seen_player`].
///
/// Roles keep their own copy, so nothing they do can reach back into the
/// player they were told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeenPlayer {
    /// Display name of the player.
    pub name: String,
    /// Name of the player's role.
    pub role_name: &'static str,
    /// The player's true team.
    pub team: Team,
}

impl SeenPlayer {
    /// Snapshot a player with the given name holding `role`.
    pub fn of(name: impl Into<String>, role: &dyn Role) -> Self {
        Self {
            name: name.into(),
            role_name: role.name(),
            team: role.team(),
        }
    }

    /// Whether this player is the named role.
    #[must_use]
    pub fn is(&self, role_name: &str) -> bool {
        self.role_name == role_name
    }
}

/// A THavalon character.
///
/// Team and capability flags are fixed at construction. The list of seen
/// players is filled once during setup, in the order the table reports it.
pub trait Role: fmt::Debug + Send {
    /// The character's name, e.g. `"Merlin"`.
    fn name(&self) -> &'static str;

    /// The character's team.
    fn team(&self) -> Team;

    /// Whether this player was picked as the assassin.
    fn is_assassin(&self) -> bool {
        false
    }

    /// Whether this role may play Reverse cards.
    fn can_reverse(&self) -> bool {
        false
    }

    /// Players this role has learned about, in the order they were recorded.
    fn seen_players(&self) -> &[SeenPlayer];

    /// Offer another player to this role. Returns whether the role recorded it.
    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError>;

    /// The briefing shown to the player holding this role.
    fn description(&self) -> String;

    /// Whether this role may play `card`.
    fn validate_mission_card(&self, card: MissionCard) -> bool {
        match card {
            MissionCard::Reverse => self.can_reverse(),
            MissionCard::Fail => self.team() == Team::Evil,
            MissionCard::Success => true,
        }
    }

    /// The ability this role carries, if any.
    fn ability(&self) -> Option<AbilityKind> {
        None
    }

    /// Use this role's ability.
    fn use_ability(&mut self) -> Result<AbilityKind, RoleError> {
        Err(RoleError::NoAbility { role: self.name() })
    }

    /// Uses left on a limited ability, if the role has one.
    fn ability_uses_left(&self) -> Option<usize> {
        None
    }

    /// Whether this role has obscured the vote in progress.
    fn has_obscured_vote(&self) -> bool {
        false
    }

    /// Consume a pending vote obscure, returning whether one was pending.
    fn take_obscured_vote(&mut self) -> bool {
        false
    }
}

/// Joins description lines the way every briefing is laid out.
pub(crate) fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}
