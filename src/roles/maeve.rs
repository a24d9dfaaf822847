//! Maeve: Evil, can hide how each player voted.

use crate::error::RoleError;

use super::ability::VoteObscurer;
use super::{names, AbilityKind, EvilSight, Role, SeenPlayer, Team};

pub(super) const OBSCURE_LINES: [&str; 2] = [
    "Once per round (except the first), during a vote on a proposal, you can secretly choose to obscure how",
    "each player voted on the proposal and instead have only the amount of upvotes and downvotes presented.",
];

#[derive(Clone, Debug)]
pub struct Maeve {
    sight: EvilSight,
    obscurer: VoteObscurer,
}

impl Maeve {
    #[must_use]
    pub fn new(is_assassin: bool, ability_uses: usize) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
            obscurer: VoteObscurer::new(ability_uses),
        }
    }
}

impl Role for Maeve {
    fn name(&self) -> &'static str {
        names::MAEVE
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
            .describe(&["You are Maeve [EVIL].\n", OBSCURE_LINES[0], OBSCURE_LINES[1]])
    }

    fn ability(&self) -> Option<AbilityKind> {
        Some(AbilityKind::ObscureVote)
    }

    fn use_ability(&mut self) -> Result<AbilityKind, RoleError> {
        self.obscurer.activate(names::MAEVE)?;
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
