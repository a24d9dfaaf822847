//! Shared helpers for integration tests.

#![allow(dead_code)]

use thavalon::{
    CardOutcome, Game, GameConfig, MissionCard, ProposalOutcome, SessionId, VoteOutcome,
};

/// Opt into log output with `RUST_LOG=thavalon=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn session(i: usize) -> SessionId {
    SessionId::from(format!("s{i}"))
}

/// A lobby with players `P0..` on sessions `s0..`.
pub fn lobby(count: usize, seed: u64) -> Game {
    init_tracing();
    let mut game = Game::with_seed(GameConfig::default(), seed).unwrap();
    for i in 0..count {
        game.add_player(session(i), format!("P{i}")).unwrap();
    }
    game
}

pub fn started(count: usize, seed: u64) -> Game {
    let mut game = lobby(count, seed);
    game.start_game().unwrap();
    game
}

/// Sessions in seat order.
pub fn seats(game: &Game) -> Vec<SessionId> {
    game.get_proposal_info()
        .unwrap()
        .proposal_order
        .iter()
        .map(|name| SessionId::from(format!("s{}", &name[1..])))
        .collect()
}

pub fn name_of(game: &Game, session: &SessionId) -> String {
    game.get_player(session).unwrap().name().to_string()
}

pub fn names(game: &Game, sessions: &[SessionId]) -> Vec<String> {
    sessions.iter().map(|session| name_of(game, session)).collect()
}

/// The session holding `role`, if it was dealt.
pub fn holder(game: &Game, role: &str) -> Option<SessionId> {
    (0..game.num_players())
        .map(session)
        .find(|session| game.get_player_info(session).unwrap().role == role)
}

/// Find a seed whose deal includes every listed role.
pub fn started_with(count: usize, roles: &[&str]) -> Game {
    for seed in 0..10_000 {
        let game = started(count, seed);
        if roles.iter().all(|role| holder(&game, role).is_some()) {
            return game;
        }
    }
    panic!("no seed deals {roles:?} at {count} players");
}

/// Propose the first `size` seats for the current mission. On the first
/// mission both proposals name the same players.
pub fn propose_front(game: &mut Game) -> ProposalOutcome {
    let size = game.get_proposal_info().unwrap().proposal_size;
    let pick = names(game, &seats(game)[..size]);
    let outcome = game.set_proposal(&pick).unwrap();
    match outcome {
        ProposalOutcome::Collected(_) => game.set_proposal(&pick).unwrap(),
        other => other,
    }
}

pub fn vote_all(game: &mut Game, upvote: bool) -> VoteOutcome {
    let mut last = None;
    for session in seats(game) {
        last = Some(game.set_vote(&session, upvote).unwrap());
    }
    last.unwrap()
}

/// Every participant plays the card `choose` picks for them.
pub fn play_all(game: &mut Game, choose: impl Fn(&Game, &SessionId) -> MissionCard) -> CardOutcome {
    let mission = game.get_mission_info().unwrap();
    let mut last = None;
    for session in &mission.sessions {
        let card = choose(game, session);
        last = Some(game.play_mission_card(session, card).unwrap());
    }
    last.unwrap()
}

/// Success for Good, Fail for Evil.
pub fn by_team(game: &Game, session: &SessionId) -> MissionCard {
    match game.get_player_info(session).unwrap().team {
        thavalon::Team::Good => MissionCard::Success,
        thavalon::Team::Evil => MissionCard::Fail,
    }
}

/// Run one full round: propose the front seats, approve, and play.
pub fn run_mission(game: &mut Game, choose: impl Fn(&Game, &SessionId) -> MissionCard) -> CardOutcome {
    if let ProposalOutcome::Vote { .. } = propose_front(game) {
        vote_all(game, true);
    }
    play_all(game, choose)
}
