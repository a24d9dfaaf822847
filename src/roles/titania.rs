//! Titania: Good, appears Evil to the Evil players.

use crate::error::RoleError;

use super::{names, Role, SeenPlayer, Team};

#[derive(Clone, Debug, Default)]
pub struct Titania;

impl Titania {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Role for Titania {
    fn name(&self) -> &'static str {
        names::TITANIA
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &[]
    }

    fn add_seen_player(&mut self, _other: &SeenPlayer) -> Result<bool, RoleError> {
        Ok(false)
    }

    fn description(&self) -> String {
        [
            "You are Titania [GOOD].\n",
            "You appear as Evil to all Evil players (except Colgrevance).",
        ]
        .join("\n")
    }
}
