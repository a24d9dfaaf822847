//! Voting on proposals.

use serde::Serialize;
use tracing::{debug, info};

use super::info::{MissionInfo, ProposalInfo};
use super::{Game, GamePhase};
use crate::core::SessionId;
use crate::error::GameError;

/// One player's vote, as shown in an unobscured tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CastVote {
    pub name: String,
    pub upvote: bool,
}

/// The result of a completed vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub mission: usize,
    /// Whether a strict majority upvoted.
    pub passed: bool,
    pub upvotes: usize,
    pub downvotes: usize,
    /// Per-player votes in seat order. `None` when the vote was obscured.
    pub votes: Option<Vec<CastVote>>,
    pub obscured: bool,
    pub phase: GamePhase,
    /// Set when a mission was launched.
    pub mission_info: Option<MissionInfo>,
    /// Set when proposing starts again.
    pub proposal_info: Option<ProposalInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum VoteOutcome {
    /// Still waiting on other players; echoes the vote back.
    Pending { vote: bool },
    Resolved(VoteTally),
}

impl Game {
    /// Record a vote. Resolves once every seated player has voted.
    pub fn set_vote(&mut self, session_id: &SessionId, upvote: bool) -> Result<VoteOutcome, GameError> {
        self.require_phase(GamePhase::Vote)?;
        let player = self.player(session_id)?;
        if player.vote().is_some() {
            return Err(GameError::AlreadyVoted(player.name().to_string()));
        }

        if let Some(player) = self.players.get_mut(session_id) {
            player.vote = Some(upvote);
        }
        self.votes_cast += 1;
        debug!(session = %session_id, upvote, cast = self.votes_cast, "vote cast");

        if self.votes_cast < self.players.len() {
            return Ok(VoteOutcome::Pending { vote: upvote });
        }
        Ok(VoteOutcome::Resolved(self.resolve_vote()))
    }

    fn resolve_vote(&mut self) -> VoteTally {
        let count = self.players.len();
        let breakdown: Vec<CastVote> = self
            .proposal_order
            .iter()
            .filter_map(|session| self.players.get(session))
            .map(|player| CastVote {
                name: player.name().to_string(),
                upvote: player.vote() == Some(true),
            })
            .collect();
        let upvotes = breakdown.iter().filter(|vote| vote.upvote).count();
        let downvotes = count - upvotes;
        let passed = upvotes * 2 > count;

        // Every pending obscure is consumed, whoever armed it.
        let mut obscured = false;
        for player in self.players.values_mut() {
            if let Some(role) = player.role.as_mut() {
                obscured |= role.take_obscured_vote();
            }
            player.vote = None;
        }
        self.votes_cast = 0;

        info!(
            mission = self.mission_index,
            upvotes,
            downvotes,
            passed,
            obscured,
            "vote resolved"
        );

        let mission = self.mission_index;
        let (mission_info, proposal_info) = if mission == 0 {
            // Upvote sends the first proposal, anything else the second.
            self.launch_mission(if passed { 0 } else { 1 });
            (Some(self.mission_info()), None)
        } else if passed {
            self.launch_mission(0);
            (Some(self.mission_info()), None)
        } else {
            self.proposals.clear();
            self.advance_proposer();
            self.proposal_num += 1;
            self.phase = GamePhase::Proposal;
            (None, Some(self.proposal_info()))
        };

        VoteTally {
            mission,
            passed,
            upvotes,
            downvotes,
            votes: if obscured { None } else { Some(breakdown) },
            obscured,
            phase: self.phase,
            mission_info,
            proposal_info,
        }
    }
}
