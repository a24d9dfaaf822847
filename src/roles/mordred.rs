//! Mordred: Evil, hidden from Merlin.

use crate::error::RoleError;

use super::{names, EvilSight, Role, SeenPlayer, Team};

#[derive(Clone, Debug)]
pub struct Mordred {
    sight: EvilSight,
}

impl Mordred {
    #[must_use]
    pub fn new(is_assassin: bool) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
        }
    }
}

impl Role for Mordred {
    fn name(&self) -> &'static str {
        names::MORDRED
    }

    fn team(&self) -> Team {
        Team::Evil
    }

    fn is_assassin(&self) -> bool {
        self.sight.is_assassin()
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        self.sight.seen()
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        Ok(self.sight.add(other))
    }

    fn description(&self) -> String {
        self.sight.describe(&[
            "You are Mordred [EVIL].\n",
            "You are hidden from all Good Information roles.",
        ])
    }
}
