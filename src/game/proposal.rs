//! Nominating players for a mission.

use serde::Serialize;
use tracing::{debug, info};

use super::info::{MissionInfo, ProposalInfo};
use super::{Game, GamePhase, Proposal};
use crate::core::SessionId;
use crate::error::GameError;

/// What happened after a proposal was accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ProposalOutcome {
    /// First of the two first-mission proposals; the next seat proposes.
    Collected(ProposalInfo),
    /// The table now votes on the listed proposals.
    Vote { proposals: Vec<Vec<String>> },
    /// The last allowed proposer's pick goes out without a vote.
    Forced(MissionInfo),
}

impl Game {
    /// Submit a proposal by display name.
    ///
    /// The first mission collects two proposals before voting. On later
    /// missions the last allowed proposer's pick skips the vote.
    pub fn set_proposal<S: AsRef<str>>(&mut self, names: &[S]) -> Result<ProposalOutcome, GameError> {
        self.require_phase(GamePhase::Proposal)?;
        let proposal = self.resolve_proposal(names)?;

        self.declaration_open = false;
        info!(
            mission = self.mission_index,
            proposal_num = self.proposal_num,
            players = ?self.names_of(&proposal),
            "proposal made"
        );
        self.proposals.push(proposal);

        if self.mission_index == 0 && self.proposals.len() < 2 {
            self.advance_proposer();
            self.proposal_num += 1;
            return Ok(ProposalOutcome::Collected(self.proposal_info()));
        }

        if self.mission_index > 0 && self.proposal_num >= self.max_proposers() {
            debug!(mission = self.mission_index, "proposal forced through");
            self.launch_mission(0);
            self.proposal_num = 1;
            return Ok(ProposalOutcome::Forced(self.mission_info()));
        }

        self.phase = GamePhase::Vote;
        let proposals = self
            .proposals
            .iter()
            .map(|proposal| self.names_of(proposal))
            .collect();
        Ok(ProposalOutcome::Vote { proposals })
    }

    /// Submit a proposal, checking that `session_id` holds the proposal.
    pub fn propose<S: AsRef<str>>(
        &mut self,
        session_id: &SessionId,
        names: &[S],
    ) -> Result<ProposalOutcome, GameError> {
        self.require_phase(GamePhase::Proposal)?;
        let player = self.player(session_id)?;
        if self.current_proposer() != Some(session_id) {
            return Err(GameError::NotProposer(player.name().to_string()));
        }
        self.set_proposal(names)
    }

    fn resolve_proposal<S: AsRef<str>>(&self, names: &[S]) -> Result<Proposal, GameError> {
        let expected = self.proposal_size();
        if names.len() != expected {
            return Err(GameError::ProposalSize {
                expected,
                actual: names.len(),
            });
        }

        let mut proposal = Proposal::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let session = self
                .sessions_by_name
                .get(name)
                .filter(|session| self.proposal_order.contains(session))
                .ok_or_else(|| GameError::UnknownName(name.to_string()))?;
            if proposal.contains(session) {
                return Err(GameError::DuplicateProposal(name.to_string()));
            }
            proposal.push(session.clone());
        }
        Ok(proposal)
    }

    /// Send the chosen in-flight proposal on its mission.
    pub(crate) fn launch_mission(&mut self, index: usize) {
        let chosen = self.proposals.drain(..).nth(index).unwrap_or_default();
        info!(
            mission = self.mission_index,
            players = ?self.names_of(&chosen),
            "mission launched"
        );
        self.mission_players = chosen;
        self.cards_played = 0;
        self.phase = GamePhase::Mission;
    }
}
