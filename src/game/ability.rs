//! Role abilities, checked against the game's timing rules first.
//!
//! Timing is validated before the role is asked, so a rejected attempt never
//! spends one of the role's uses.

use serde::Serialize;
use tracing::info;

use super::info::RoleReveal;
use super::{Game, GamePhase, LobbyStatus, MissionResult};
use crate::core::SessionId;
use crate::error::{GameError, RoleError};
use crate::roles::{AbilityKind, Team};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AbilityOutcome {
    /// The vote in progress will be tallied without a per-player breakdown.
    VoteObscured,
    /// The last mission now counts as failed.
    MissionDeclared {
        mission: usize,
        phase: GamePhase,
        reveal: Option<RoleReveal>,
    },
}

impl Game {
    /// Use the ability of the player's role.
    pub fn use_ability(&mut self, session_id: &SessionId) -> Result<AbilityOutcome, GameError> {
        self.require_status(LobbyStatus::InProgress)?;
        let player = self.player(session_id)?;
        let role = player
            .role()
            .ok_or_else(|| GameError::UnknownPlayer(session_id.clone()))?;
        let kind = role.ability().ok_or(RoleError::NoAbility { role: role.name() })?;

        match kind {
            AbilityKind::ObscureVote => {
                self.require_phase(GamePhase::Vote)?;
                if self.mission_index == 0 {
                    return Err(GameError::AbilityUnavailable(
                        "votes on the first mission cannot be obscured".to_string(),
                    ));
                }
                // A repeat by the same role is rejected by the role itself.
                let obscured_by_other = self.players.iter().any(|(id, other)| {
                    id != session_id && other.role().map_or(false, |held| held.has_obscured_vote())
                });
                if obscured_by_other {
                    return Err(GameError::AbilityUnavailable(
                        "this vote is already obscured".to_string(),
                    ));
                }
            }
            AbilityKind::DeclareFail => {
                if !self.declaration_open {
                    return Err(GameError::AbilityUnavailable(
                        "there is no just-passed mission to declare".to_string(),
                    ));
                }
                let on_last = self.history.last().map_or(false, |record| {
                    record.participants.iter().any(|name| name == player.name())
                });
                if !on_last {
                    return Err(GameError::AbilityUnavailable(format!(
                        "{} was not on the last mission",
                        player.name()
                    )));
                }
            }
        }

        let role = self
            .players
            .get_mut(session_id)
            .and_then(|player| player.role.as_mut())
            .ok_or_else(|| GameError::UnknownPlayer(session_id.clone()))?;
        role.use_ability()?;
        info!(session = %session_id, role = role.name(), ?kind, "ability used");

        Ok(match kind {
            AbilityKind::ObscureVote => AbilityOutcome::VoteObscured,
            AbilityKind::DeclareFail => self.declare_fail(),
        })
    }

    fn declare_fail(&mut self) -> AbilityOutcome {
        self.declaration_open = false;
        let mission = self.history.len().saturating_sub(1);
        if let Some(record) = self.history.last_mut() {
            record.result = MissionResult::Fail;
            record.declared = true;
        }

        let reveal = if self.evil_has_won_missions() {
            Some(self.end_game(Team::Evil))
        } else {
            if self.phase == GamePhase::Assassination && !self.good_has_won_missions() {
                self.phase = GamePhase::Proposal;
            }
            None
        };
        AbilityOutcome::MissionDeclared {
            mission,
            phase: self.phase,
            reveal,
        }
    }
}
