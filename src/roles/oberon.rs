//! Oberon: Evil, shares Maeve's power to obscure votes.

use crate::error::RoleError;

use super::ability::VoteObscurer;
use super::maeve::OBSCURE_LINES;
use super::{names, AbilityKind, EvilSight, Role, SeenPlayer, Team};

#[derive(Clone, Debug)]
pub struct Oberon {
    sight: EvilSight,
    obscurer: VoteObscurer,
}

impl Oberon {
    #[must_use]
    pub fn new(is_assassin: bool, ability_uses: usize) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
            obscurer: VoteObscurer::new(ability_uses),
        }
    }
}

impl Role for Oberon {
    fn name(&self) -> &'static str {
        names::OBERON
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
        self.sight
            .describe(&["You are Oberon [EVIL].\n", OBSCURE_LINES[0], OBSCURE_LINES[1]])
    }

    fn ability(&self) -> Option<AbilityKind> {
        Some(AbilityKind::ObscureVote)
    }

    fn use_ability(&mut self) -> Result<AbilityKind, RoleError> {
        self.obscurer.activate(names::OBERON)?;
        Ok(AbilityKind::ObscureVote)
    }

    fn ability_uses_left(&self) -> Option<usize> {
        Some(self.obscurer.remaining())
    }

    fn has_obscured_vote(&self) -> bool {
        self.obscurer.is_pending()
    }

    fn take_obscured_vote(&mut self) -> bool {
        self.obscurer.take()
    }
}
