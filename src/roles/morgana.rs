//! Morgana: Evil, looks like Merlin to Percival.

use crate::error::RoleError;

use super::{names, EvilSight, Role, SeenPlayer, Team};

#[derive(Clone, Debug)]
pub struct Morgana {
    sight: EvilSight,
}

impl Morgana {
    #[must_use]
    pub fn new(is_assassin: bool) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
        }
    }
}

impl Role for Morgana {
    fn name(&self) -> &'static str {
        names::MORGANA
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
            "You are Morgana [EVIL].\n",
            "You appear like Merlin to Percival.",
        ])
    }
}
