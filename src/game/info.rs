//! Read-only views of a game, shaped for handing to a client.

use serde::Serialize;

use super::{Game, GamePhase, LobbyStatus};
use crate::core::SessionId;
use crate::error::GameError;
use crate::roles::Team;

/// What a player knows about their own character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    pub name: String,
    pub role: &'static str,
    pub team: Team,
    pub description: String,
    pub is_assassin: bool,
    /// Uses left on a limited ability, for roles that have one.
    pub ability_uses_left: Option<usize>,
}

/// The state of proposing for the current mission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProposalInfo {
    /// Seat order, by display name.
    pub proposal_order: Vec<String>,
    pub proposer: String,
    pub proposer_id: SessionId,
    pub proposer_index: usize,
    pub proposal_size: usize,
    pub max_proposers: usize,
    pub proposal_num: usize,
}

/// Which mission is up, plus a note on anything unusual about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundInfo {
    pub mission: usize,
    pub note: Option<String>,
}

/// Who is going on the current mission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MissionInfo {
    pub players: Vec<String>,
    pub sessions: Vec<SessionId>,
}

impl MissionInfo {
    #[must_use]
    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.contains(session_id)
    }
}

/// One seat's character, revealed at the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevealedRole {
    pub name: String,
    pub role: &'static str,
    pub team: Team,
    pub is_assassin: bool,
}

/// Every character at the table, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleReveal {
    pub winner: Option<Team>,
    pub roles: Vec<RevealedRole>,
}

impl Game {
    /// The caller's own character and briefing.
    pub fn get_player_info(&self, session_id: &SessionId) -> Result<PlayerInfo, GameError> {
        let player = self.player(session_id)?;
        let role = player.role().ok_or(GameError::WrongLobbyStatus {
            expected: LobbyStatus::InProgress,
            actual: self.lobby_status,
        })?;
        Ok(PlayerInfo {
            name: player.name().to_string(),
            role: role.name(),
            team: role.team(),
            description: role.description(),
            is_assassin: role.is_assassin(),
            ability_uses_left: role.ability_uses_left(),
        })
    }

    pub fn get_proposal_info(&self) -> Result<ProposalInfo, GameError> {
        self.require_status(LobbyStatus::InProgress)?;
        Ok(self.proposal_info())
    }

    pub fn get_round_info(&self) -> Result<RoundInfo, GameError> {
        self.require_status(LobbyStatus::InProgress)?;
        let note = if self.mission_index == 0 {
            Some("Two proposals are made for the first mission, and the vote picks between them.".to_string())
        } else if self.is_hard_mission() {
            Some("This mission requires two fails to fail.".to_string())
        } else {
            None
        };
        Ok(RoundInfo {
            mission: self.mission_index,
            note,
        })
    }

    /// Players on the mission being played.
    pub fn get_mission_info(&self) -> Result<MissionInfo, GameError> {
        self.require_phase(GamePhase::Mission)?;
        Ok(self.mission_info())
    }

    /// Every seat's character. Only available once the game is over.
    pub fn role_reveal(&self) -> Result<RoleReveal, GameError> {
        self.require_status(LobbyStatus::Done)?;
        Ok(self.reveal())
    }

    pub(crate) fn proposal_info(&self) -> ProposalInfo {
        let proposer_id = self.current_proposer().cloned().unwrap_or_else(|| SessionId::new(""));
        ProposalInfo {
            proposal_order: self.names_of(&self.proposal_order),
            proposer: self.name_of(&proposer_id).to_string(),
            proposer_id,
            proposer_index: self.proposer_index,
            proposal_size: self.proposal_size(),
            max_proposers: self.max_proposers(),
            proposal_num: self.proposal_num,
        }
    }

    pub(crate) fn mission_info(&self) -> MissionInfo {
        MissionInfo {
            players: self.names_of(&self.mission_players),
            sessions: self.mission_players.clone(),
        }
    }

    pub(crate) fn reveal(&self) -> RoleReveal {
        let roles = self
            .proposal_order
            .iter()
            .filter_map(|session| self.players.get(session))
            .filter_map(|player| {
                player.role().map(|role| RevealedRole {
                    name: player.name().to_string(),
                    role: role.name(),
                    team: role.team(),
                    is_assassin: role.is_assassin(),
                })
            })
            .collect();
        RoleReveal {
            winner: self.winner,
            roles,
        }
    }
}
