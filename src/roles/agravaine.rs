//! Agravaine: Evil, must fail missions and may declare a passed one failed.

use crate::error::RoleError;

use super::{names, AbilityKind, EvilSight, MissionCard, Role, SeenPlayer, Team, UseCounter};

#[derive(Clone, Debug)]
pub struct Agravaine {
    sight: EvilSight,
    declarations: UseCounter,
}

impl Agravaine {
    #[must_use]
    pub fn new(is_assassin: bool, ability_uses: usize) -> Self {
        Self {
            sight: EvilSight::new(is_assassin),
            declarations: UseCounter::new(ability_uses),
        }
    }
}

impl Role for Agravaine {
    fn name(&self) -> &'static str {
        names::AGRAVAINE
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
            "You are Agravaine [EVIL].\n",
            "You may declare to fail a mission that you were on and would otherwise have succeeded.",
        ])
    }

    fn validate_mission_card(&self, card: MissionCard) -> bool {
        card == MissionCard::Fail
    }

    fn ability(&self) -> Option<AbilityKind> {
        Some(AbilityKind::DeclareFail)
    }

    fn use_ability(&mut self) -> Result<AbilityKind, RoleError> {
        self.declarations.try_use(names::AGRAVAINE)?;
        Ok(AbilityKind::DeclareFail)
    }

    fn ability_uses_left(&self) -> Option<usize> {
        Some(self.declarations.remaining())
    }
}
