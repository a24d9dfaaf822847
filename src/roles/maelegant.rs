//! Maelegant: Evil, may play Reverse cards.

use crate::error::RoleError;

use super::{names, EvilSight, Role, SeenPlayer, Team};

#[derive(Clone, Debug)]
pub struct Maelegant {
    sight: EvilSight,
}

impl Maelegant {
    #[must_use]
    pub fn new(is_assassin: bool) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
        }
    }
}

impl Role for Maelegant {
    fn name(&self) -> &'static str {
        names::MAELEGANT
    }

    fn team(&self) -> Team {
        Team::Evil
    }

    fn is_assassin(&self) -> bool {
        self.sight.is_assassin()
    }

    fn can_reverse(&self) -> bool {
        true
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        self.sight.seen()
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        Ok(self.sight.add(other))
    }

    fn description(&self) -> String {
        self.sight.describe(&[
            "You are Maelegant [EVIL].\n",
            "You may play Reversal cards while on missions.",
        ])
    }
}
