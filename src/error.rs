//! Error types for roles, games and the registry.
//!
//! Every rejected operation leaves the game exactly as it was before the
//! call, so callers can report the message and carry on.

use thiserror::Error;

use crate::core::SessionId;
use crate::game::{GamePhase, LobbyStatus};
use crate::registry::GameId;
use crate::roles::MissionCard;

/// Broad classification of a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The game is not in a state where the operation makes sense.
    Precondition,
    /// The operation is allowed now, but the requested move is not.
    IllegalMove,
    /// A looked-up identifier does not exist.
    NotFound,
}

/// Errors raised by a role when asked to do something it cannot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("{role} does not have an ability to use.")]
    NoAbility { role: &'static str },

    #[error("You have already used your ability max {limit} times.")]
    AbilityExhausted { role: &'static str, limit: usize },

    #[error("{role} has already used their ability this round.")]
    AbilityAlreadyActive { role: &'static str },

    #[error("{role} can see at most one other person.")]
    TooManySeen { role: &'static str },
}

/// Errors raised by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Expected lobby to be {expected:?}, but it is {actual:?}.")]
    WrongLobbyStatus {
        expected: LobbyStatus,
        actual: LobbyStatus,
    },

    #[error("Expected phase {expected:?}, but the game is in {actual:?}.")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("This game is currently full ({max} players).")]
    GameFull { max: usize },

    #[error("Session id {0} already in game.")]
    DuplicateSession(SessionId),

    #[error("Player with name {0} already in game.")]
    DuplicateName(String),

    #[error("Player with session id {0} does not exist.")]
    UnknownPlayer(SessionId),

    #[error("{0} is not in the game.")]
    UnknownName(String),

    #[error("Games need between {min} and {max} players, found {count}.")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("It is not {0}'s turn to propose.")]
    NotProposer(String),

    #[error("Proposal must contain {expected} players, got {actual}.")]
    ProposalSize { expected: usize, actual: usize },

    #[error("{0} appears on the proposal more than once.")]
    DuplicateProposal(String),

    #[error("{0} has already voted.")]
    AlreadyVoted(String),

    #[error("{0} is not on the mission.")]
    NotOnMission(String),

    #[error("{0} has already played a card.")]
    AlreadyPlayed(String),

    #[error("{role} cannot play a {card} card.")]
    IllegalCard { role: &'static str, card: MissionCard },

    #[error("The ability can't be used right now: {0}")]
    AbilityUnavailable(String),

    #[error(transparent)]
    Role(#[from] RoleError),

    #[error("Invalid game configuration: {0}")]
    Config(String),
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::WrongLobbyStatus { .. }
            | GameError::WrongPhase { .. }
            | GameError::GameFull { .. }
            | GameError::DuplicateSession(_)
            | GameError::DuplicateName(_)
            | GameError::UnknownPlayer(_)
            | GameError::PlayerCount { .. }
            | GameError::Config(_) => ErrorKind::Precondition,
            GameError::NotProposer(_)
            | GameError::UnknownName(_)
            | GameError::ProposalSize { .. }
            | GameError::DuplicateProposal(_)
            | GameError::AlreadyVoted(_)
            | GameError::NotOnMission(_)
            | GameError::AlreadyPlayed(_)
            | GameError::IllegalCard { .. }
            | GameError::AbilityUnavailable(_)
            | GameError::Role(_) => ErrorKind::IllegalMove,
        }
    }
}

/// Errors raised by the game registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("UUID {0} is not a valid game uuid.")]
    NotFound(GameId),
}

impl RegistryError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_error_messages() {
        let err = RoleError::NoAbility { role: "Merlin" };
        assert_eq!(err.to_string(), "Merlin does not have an ability to use.");

        let err = RoleError::AbilityExhausted { role: "Maeve", limit: 3 };
        assert_eq!(err.to_string(), "You have already used your ability max 3 times.");
    }

    #[test]
    fn test_role_errors_are_illegal_moves() {
        let err: GameError = RoleError::TooManySeen { role: "Iseult" }.into();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert_eq!(err.to_string(), "Iseult can see at most one other person.");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(GameError::GameFull { max: 10 }.kind(), ErrorKind::Precondition);
        assert_eq!(
            GameError::ProposalSize { expected: 2, actual: 3 }.kind(),
            ErrorKind::IllegalMove
        );
        assert_eq!(
            RegistryError::NotFound(GameId::new()).kind(),
            ErrorKind::NotFound
        );
    }
}
