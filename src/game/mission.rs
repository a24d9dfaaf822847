//! Playing and resolving missions.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::info::{ProposalInfo, RoleReveal};
use super::{Game, GamePhase, LobbyStatus};
use crate::core::SessionId;
use crate::error::GameError;
use crate::roles::{MissionCard, Team};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionResult {
    Pass,
    Fail,
}

/// A resolved mission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionRecord {
    pub result: MissionResult,
    /// Display names of the players who went.
    pub participants: Vec<String>,
    /// Cards in shuffled order.
    pub cards: Vec<MissionCard>,
    /// Whether Agravaine declared this mission failed after it passed.
    pub declared: bool,
}

/// The public result of a completed mission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    pub mission: usize,
    pub result: MissionResult,
    pub cards: Vec<MissionCard>,
    pub participants: Vec<String>,
    pub phase: GamePhase,
    /// Set when proposing continues.
    pub proposal_info: Option<ProposalInfo>,
    /// Set when the game is over.
    pub reveal: Option<RoleReveal>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CardOutcome {
    /// Still waiting on other participants; echoes the card back.
    Pending { card: MissionCard },
    Resolved(MissionReport),
}

/// Decide a mission from its cards.
///
/// An odd number of Reverses inverts a normal mission. On a hard mission a
/// Reverse instead cancels one Fail, and two effective Fails are needed.
#[must_use]
pub fn mission_result(cards: &[MissionCard], hard: bool) -> MissionResult {
    let fails = cards.iter().filter(|card| **card == MissionCard::Fail).count();
    let reverses = cards.iter().filter(|card| **card == MissionCard::Reverse).count();
    let reversed = reverses % 2 == 1;

    let failed = if hard {
        let effective = if reversed { fails.saturating_sub(1) } else { fails };
        effective >= 2
    } else {
        (fails > 0) != reversed
    };
    if failed {
        MissionResult::Fail
    } else {
        MissionResult::Pass
    }
}

impl Game {
    /// Play a card on the current mission. Resolves once every participant
    /// has played.
    pub fn play_mission_card(
        &mut self,
        session_id: &SessionId,
        card: MissionCard,
    ) -> Result<CardOutcome, GameError> {
        self.require_phase(GamePhase::Mission)?;
        let player = self.player(session_id)?;
        if !self.mission_players.contains(session_id) {
            return Err(GameError::NotOnMission(player.name().to_string()));
        }
        if player.card().is_some() {
            return Err(GameError::AlreadyPlayed(player.name().to_string()));
        }
        let role = player
            .role()
            .ok_or_else(|| GameError::UnknownPlayer(session_id.clone()))?;
        if !role.validate_mission_card(card) {
            return Err(GameError::IllegalCard {
                role: role.name(),
                card,
            });
        }

        if let Some(player) = self.players.get_mut(session_id) {
            player.card = Some(card);
        }
        self.cards_played += 1;
        debug!(session = %session_id, played = self.cards_played, "mission card played");

        if self.cards_played < self.mission_players.len() {
            return Ok(CardOutcome::Pending { card });
        }
        Ok(CardOutcome::Resolved(self.resolve_mission()))
    }

    fn resolve_mission(&mut self) -> MissionReport {
        let mut cards: Vec<MissionCard> = self
            .mission_players
            .iter()
            .filter_map(|session| self.players.get(session))
            .filter_map(|player| player.card())
            .collect();
        self.card_rng.shuffle(&mut cards);

        let mission = self.mission_index;
        let result = mission_result(&cards, self.is_hard_mission());
        let participants = self.names_of(&self.mission_players);
        info!(mission, ?result, ?cards, "mission resolved");

        self.history.push(MissionRecord {
            result,
            participants: participants.clone(),
            cards: cards.clone(),
            declared: false,
        });
        for player in self.players.values_mut() {
            player.card = None;
        }
        self.cards_played = 0;
        self.mission_index += 1;
        self.next_proposer();
        self.declaration_open = result == MissionResult::Pass;

        let (proposal_info, reveal) = self.after_mission();
        MissionReport {
            mission,
            result,
            cards,
            participants,
            phase: self.phase,
            proposal_info,
            reveal,
        }
    }

    /// Move on from a resolved mission: end the game, wait on the assassin,
    /// or open the next proposal.
    pub(crate) fn after_mission(&mut self) -> (Option<ProposalInfo>, Option<RoleReveal>) {
        if self.evil_has_won_missions() {
            return (None, Some(self.end_game(Team::Evil)));
        }
        if self.good_has_won_missions() {
            info!("good has three passes");
            self.phase = GamePhase::Assassination;
            return (None, None);
        }
        self.phase = GamePhase::Proposal;
        (Some(self.proposal_info()), None)
    }

    /// Open proposing for the next mission.
    pub(crate) fn next_proposer(&mut self) {
        self.proposals.clear();
        self.advance_proposer();
        self.proposal_num = 1;
    }

    pub(crate) fn end_game(&mut self, winner: Team) -> RoleReveal {
        info!(%winner, "game over");
        self.winner = Some(winner);
        self.declaration_open = false;
        self.lobby_status = LobbyStatus::Done;
        self.phase = GamePhase::Done;
        self.reveal()
    }
}
