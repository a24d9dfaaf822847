//! Lancelot: Good, may play Reverse cards.

use crate::error::RoleError;

use super::{names, Role, SeenPlayer, Team};

#[derive(Clone, Debug, Default)]
pub struct Lancelot;

impl Lancelot {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Role for Lancelot {
    fn name(&self) -> &'static str {
        names::LANCELOT
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn can_reverse(&self) -> bool {
        true
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &[]
    }

    fn add_seen_player(&mut self, _other: &SeenPlayer) -> Result<bool, RoleError> {
        Ok(false)
    }

    fn description(&self) -> String {
        [
            "You are Lancelot [GOOD].",
            "You may play Reversal cards while on missions.",
            "You appear Evil to Merlin.",
        ]
        .join("\n")
    }
}
