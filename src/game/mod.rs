//! The game aggregate: lobby membership, setup, and the
//! proposal → vote → mission cycle.
//!
//! `Game` is the only mutation surface. Every operation validates fully
//! before touching state, so a rejected call leaves the game exactly as it
//! was. Operations are synchronous; callers serialize access per game (the
//! registry wraps each game in a mutex).
//!
//! ```
//! use thavalon::{Game, GameConfig, GamePhase, LobbyStatus};
//!
//! let mut game = Game::with_seed(GameConfig::default(), 7).unwrap();
//! for (session, name) in [("s1", "Ann"), ("s2", "Ben"), ("s3", "Cat"), ("s4", "Dan"), ("s5", "Eve")] {
//!     game.add_player(session, name).unwrap();
//! }
//! game.start_game().unwrap();
//!
//! assert_eq!(game.lobby_status(), LobbyStatus::InProgress);
//! assert_eq!(game.phase(), GamePhase::Proposal);
//! assert_eq!(game.get_proposal_info().unwrap().proposal_size, 2);
//! ```

mod ability;
mod info;
mod lobby;
mod mission;
mod proposal;
mod setup;
mod vote;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tables::{self, RESULTS_TO_WIN};
use crate::core::{GameConfig, GameRng, Player, SessionId};
use crate::error::GameError;
use crate::roles::Team;

pub use ability::AbilityOutcome;
pub use info::{MissionInfo, PlayerInfo, ProposalInfo, RevealedRole, RoleReveal, RoundInfo};
pub use mission::{mission_result, CardOutcome, MissionRecord, MissionReport, MissionResult};
pub use proposal::ProposalOutcome;
pub use vote::{CastVote, VoteOutcome, VoteTally};

/// Lobby lifecycle. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LobbyStatus {
    Joining,
    InProgress,
    Done,
}

/// The phase of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Proposal,
    Vote,
    Mission,
    /// Good has three passes. Assassination itself is not modelled yet.
    Assassination,
    Done,
}

/// Players nominated for a mission, in the order they were named.
pub(crate) type Proposal = Vec<SessionId>;

/// One THavalon game.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    card_rng: GameRng,

    lobby_status: LobbyStatus,
    phase: GamePhase,

    players: FxHashMap<SessionId, Player>,
    join_order: Vec<SessionId>,
    sessions_by_name: FxHashMap<String, SessionId>,

    proposal_order: Vec<SessionId>,
    proposer_index: usize,
    proposal_num: usize,
    mission_index: usize,
    proposals: SmallVec<[Proposal; 2]>,
    mission_players: Proposal,
    votes_cast: usize,
    cards_played: usize,

    history: Vec<MissionRecord>,
    winner: Option<Team>,
    /// Set while the last mission passed and no proposal has been made since.
    declaration_open: bool,
}

impl Game {
    /// Create a game seeded from the operating system.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a fully deterministic game.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;
        let card_rng = rng.for_context("cards");
        Ok(Self {
            config,
            rng,
            card_rng,
            lobby_status: LobbyStatus::Joining,
            phase: GamePhase::Proposal,
            players: FxHashMap::default(),
            join_order: Vec::new(),
            sessions_by_name: FxHashMap::default(),
            proposal_order: Vec::new(),
            proposer_index: 0,
            proposal_num: 1,
            mission_index: 0,
            proposals: SmallVec::new(),
            mission_players: Vec::new(),
            votes_cast: 0,
            cards_played: 0,
            history: Vec::new(),
            winner: None,
            declaration_open: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed every random choice in this game derives from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn lobby_status(&self) -> LobbyStatus {
        self.lobby_status
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Index of the mission currently being proposed or played.
    #[must_use]
    pub fn mission_index(&self) -> usize {
        self.mission_index
    }

    /// The winning team, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Every resolved mission, oldest first.
    #[must_use]
    pub fn get_all_mission_results(&self) -> &[MissionRecord] {
        &self.history
    }

    /// Look up a seated player.
    #[must_use]
    pub fn get_player(&self, session_id: &SessionId) -> Option<&Player> {
        self.players.get(session_id)
    }

    fn require_status(&self, expected: LobbyStatus) -> Result<(), GameError> {
        if self.lobby_status != expected {
            return Err(GameError::WrongLobbyStatus {
                expected,
                actual: self.lobby_status,
            });
        }
        Ok(())
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        self.require_status(LobbyStatus::InProgress)?;
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn player(&self, session_id: &SessionId) -> Result<&Player, GameError> {
        self.players
            .get(session_id)
            .ok_or_else(|| GameError::UnknownPlayer(session_id.clone()))
    }

    fn name_of(&self, session_id: &SessionId) -> &str {
        self.players
            .get(session_id)
            .map_or("", |player| player.name())
    }

    fn names_of(&self, sessions: &[SessionId]) -> Vec<String> {
        sessions
            .iter()
            .map(|session| self.name_of(session).to_string())
            .collect()
    }

    fn current_proposer(&self) -> Option<&SessionId> {
        self.proposal_order.get(self.proposer_index)
    }

    fn proposal_size(&self) -> usize {
        tables::mission_size(self.players.len(), self.mission_index).unwrap_or(0)
    }

    /// Proposers allowed this mission before the last one is forced through.
    fn max_proposers(&self) -> usize {
        if self.mission_index == 0 {
            2
        } else {
            tables::evil_count(self.players.len()).unwrap_or(0) + 1
        }
    }

    fn is_hard_mission(&self) -> bool {
        tables::is_hard_mission(self.players.len(), self.mission_index)
    }

    /// Hand the proposal to the next seat. Starts a fresh vote count.
    fn advance_proposer(&mut self) {
        if !self.proposal_order.is_empty() {
            self.proposer_index = (self.proposer_index + 1) % self.proposal_order.len();
        }
        self.votes_cast = 0;
    }

    fn count_results(&self, result: MissionResult) -> usize {
        self.history
            .iter()
            .filter(|record| record.result == result)
            .count()
    }

    fn good_has_won_missions(&self) -> bool {
        self.count_results(MissionResult::Pass) >= RESULTS_TO_WIN
    }

    fn evil_has_won_missions(&self) -> bool {
        self.count_results(MissionResult::Fail) >= RESULTS_TO_WIN
    }
}
