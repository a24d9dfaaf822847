//! Player identification and per-round player state.
//!
//! ## SessionId
//!
//! Opaque key for a connected participant, handed in by the transport layer.
//!
//! ## Player
//!
//! One seat at the table: display name, dealt role, and the vote or card the
//! player has committed this round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::roles::{MissionCard, Role};

/// Opaque session key for a participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a session key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A seated participant.
///
/// Equality is by session only; two players with the same session are the
/// same player whatever their state.
#[derive(Debug)]
pub struct Player {
    session_id: SessionId,
    name: String,
    pub(crate) role: Option<Box<dyn Role>>,
    pub(crate) vote: Option<bool>,
    pub(crate) card: Option<MissionCard>,
}

impl Player {
    /// Create a player with no role and no committed actions.
    pub fn new(session_id: SessionId, name: impl Into<String>) -> Self {
        Self {
            session_id,
            name: name.into(),
            role: None,
            vote: None,
            card: None,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dealt role, once the game has started.
    #[must_use]
    pub fn role(&self) -> Option<&dyn Role> {
        self.role.as_deref()
    }

    /// This round's vote, if cast.
    #[must_use]
    pub fn vote(&self) -> Option<bool> {
        self.vote
    }

    /// This round's mission card, if played.
    #[must_use]
    pub fn card(&self) -> Option<MissionCard> {
        self.card
    }

    /// Clear the per-round vote and card.
    pub fn reset_round(&mut self) {
        self.vote = None;
        self.card = None;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.session_id == other.session_id
    }
}

impl Eq for Player {}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {}", self.name)
    }
}
