//! Dealing roles and seating the table.

use tracing::{debug, info};

use super::{Game, GamePhase, LobbyStatus};
use crate::core::tables::{self, TABLE_MAX_PLAYERS, TABLE_MIN_PLAYERS};
use crate::core::GameRng;
use crate::error::GameError;
use crate::roles::{build_role, names, Role, SeenPlayer};

impl Game {
    /// Seat the players, deal roles, and open the first proposal.
    ///
    /// Roles and visibility are worked out off to the side and only
    /// committed once everything succeeded.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.require_status(LobbyStatus::Joining)?;

        let count = self.players.len();
        if count < self.config.min_players || count > self.config.max_players {
            return Err(GameError::PlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }
        let (Some(good_count), Some(evil_count)) = (tables::good_count(count), tables::evil_count(count))
        else {
            return Err(GameError::PlayerCount {
                count,
                min: TABLE_MIN_PLAYERS,
                max: TABLE_MAX_PLAYERS,
            });
        };

        let mut seating = self.join_order.clone();
        self.rng.for_context("seating").shuffle(&mut seating);

        let mut role_rng = self.rng.for_context("roles");
        let good_pool = self.config.good_roles(count);
        let evil_pool = self.config.evil_roles(count);
        if good_pool.len() < good_count || evil_pool.len() < evil_count {
            return Err(GameError::Config(format!(
                "not enough roles in the pools for {count} players"
            )));
        }
        let mut good_roles = role_rng.sample(&good_pool, good_count);
        let evil_roles = role_rng.sample(&evil_pool, evil_count);
        pair_lovers(&mut good_roles, &good_pool, &mut role_rng)?;
        let assassin = role_rng.gen_range_usize(0..evil_count);

        let uses = self.config.ability_uses;
        let dealt = good_roles
            .iter()
            .map(|name| (*name, false))
            .chain(evil_roles.iter().enumerate().map(|(i, name)| (*name, i == assassin)));
        let mut roles: Vec<Box<dyn Role>> = Vec::with_capacity(count);
        for (name, is_assassin) in dealt {
            let role = build_role(name, is_assassin, uses)
                .ok_or_else(|| GameError::Config(format!("unknown role {name}")))?;
            roles.push(role);
        }

        // Each seat learns about every other seat, in seat order.
        let snapshots: Vec<SeenPlayer> = seating
            .iter()
            .zip(&roles)
            .map(|(session, role)| SeenPlayer::of(self.name_of(session), role.as_ref()))
            .collect();
        for i in 0..count {
            for j in (i + 1)..count {
                roles[i].add_seen_player(&snapshots[j])?;
                roles[j].add_seen_player(&snapshots[i])?;
            }
        }

        for (session, role) in seating.iter().zip(roles) {
            debug!(session = %session, role = role.name(), "role dealt");
            if let Some(player) = self.players.get_mut(session) {
                player.role = Some(role);
                player.reset_round();
            }
        }

        self.proposal_order = seating;
        self.proposer_index = count - 2;
        self.proposal_num = 1;
        self.mission_index = 0;
        self.lobby_status = LobbyStatus::InProgress;
        self.phase = GamePhase::Proposal;
        info!(
            players = count,
            good = good_count,
            evil = evil_count,
            seed = self.rng.seed(),
            "game started"
        );
        Ok(())
    }
}

fn is_lover(role: &str) -> bool {
    role == names::TRISTAN || role == names::ISEULT
}

/// Tristan and Iseult are dealt together or not at all.
///
/// When only one was drawn, either swap it for an undrawn role or swap some
/// other drawn role for its partner, picking between the two evenly when both
/// are possible.
fn pair_lovers<'a>(
    dealt: &mut [&'a str],
    pool: &[&'a str],
    rng: &mut GameRng,
) -> Result<(), GameError> {
    let (present, missing) = match (dealt.contains(&names::TRISTAN), dealt.contains(&names::ISEULT)) {
        (true, false) => (names::TRISTAN, names::ISEULT),
        (false, true) => (names::ISEULT, names::TRISTAN),
        _ => return Ok(()),
    };

    let spares: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|role| !is_lover(role) && !dealt.contains(role))
        .collect();
    let others: Vec<usize> = (0..dealt.len()).filter(|&i| !is_lover(dealt[i])).collect();

    let can_swap_out = !spares.is_empty();
    let can_pair_up = !others.is_empty() && pool.contains(&missing);
    let swap_out = match (can_swap_out, can_pair_up) {
        (true, true) => rng.gen_bool(0.5),
        (true, false) => true,
        (false, true) => false,
        (false, false) => {
            return Err(GameError::Config(format!(
                "cannot deal {missing} alongside {present}"
            )))
        }
    };

    if swap_out {
        let spare = spares[rng.gen_range_usize(0..spares.len())];
        if let Some(slot) = dealt.iter_mut().find(|role| **role == present) {
            *slot = spare;
        }
        debug!(removed = present, added = spare, "lover swapped out");
    } else {
        let slot = others[rng.gen_range_usize(0..others.len())];
        debug!(removed = dealt[slot], added = missing, "lover paired up");
        dealt[slot] = missing;
    }
    Ok(())
}
