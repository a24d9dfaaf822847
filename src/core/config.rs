//! Rules configuration.
//!
//! A `GameConfig` decides how many players a lobby accepts, how often limited
//! abilities may be used, and which characters may be dealt at which table
//! sizes. The defaults reproduce the standard THavalon pools.

use serde::{Deserialize, Serialize};

use super::tables::{evil_count, good_count, TABLE_MAX_PLAYERS, TABLE_MIN_PLAYERS};
use crate::error::GameError;
use crate::roles::{build_role, names, Team, DEFAULT_ABILITY_USES};

/// A character that may be dealt once the table reaches `min_players`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Character name, as accepted by [`build_role`].
    pub role: String,
    /// Smallest table at which the character is in the pool.
    pub min_players: usize,
}

impl PoolEntry {
    pub fn new(role: impl Into<String>, min_players: usize) -> Self {
        Self {
            role: role.into(),
            min_players,
        }
    }

    /// Whether this entry is eligible at the given table size.
    #[must_use]
    pub fn is_eligible(&self, player_count: usize) -> bool {
        player_count >= self.min_players
    }
}

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players `start_game` accepts.
    pub min_players: usize,
    /// Most players the lobby accepts.
    pub max_players: usize,
    /// Uses allowed for each limited ability.
    pub ability_uses: usize,
    /// Good characters that may be dealt.
    pub good_pool: Vec<PoolEntry>,
    /// Evil characters that may be dealt.
    pub evil_pool: Vec<PoolEntry>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: TABLE_MIN_PLAYERS,
            max_players: TABLE_MAX_PLAYERS,
            ability_uses: DEFAULT_ABILITY_USES,
            good_pool: vec![
                PoolEntry::new(names::MERLIN, 2),
                PoolEntry::new(names::PERCIVAL, 2),
                PoolEntry::new(names::TRISTAN, 2),
                PoolEntry::new(names::ISEULT, 2),
                PoolEntry::new(names::NIMUE, 2),
                PoolEntry::new(names::LANCELOT, 7),
            ],
            evil_pool: vec![
                PoolEntry::new(names::MORDRED, 2),
                PoolEntry::new(names::MORGANA, 2),
                PoolEntry::new(names::MAEVE, 2),
                PoolEntry::new(names::MAELEGANT, 7),
                PoolEntry::new(names::AGRAVAINE, 8),
                PoolEntry::new(names::OBERON, 10),
            ],
        }
    }
}

impl GameConfig {
    /// Set the accepted player range.
    #[must_use]
    pub fn with_player_range(mut self, min_players: usize, max_players: usize) -> Self {
        self.min_players = min_players;
        self.max_players = max_players;
        self
    }

    /// Set how many times each limited ability may be used.
    #[must_use]
    pub fn with_ability_uses(mut self, uses: usize) -> Self {
        self.ability_uses = uses;
        self
    }

    /// Add a character to the Good pool.
    #[must_use]
    pub fn with_good_role(mut self, role: impl Into<String>, min_players: usize) -> Self {
        self.good_pool.push(PoolEntry::new(role, min_players));
        self
    }

    /// Add a character to the Evil pool.
    #[must_use]
    pub fn with_evil_role(mut self, role: impl Into<String>, min_players: usize) -> Self {
        self.evil_pool.push(PoolEntry::new(role, min_players));
        self
    }

    /// Remove a character from both pools.
    #[must_use]
    pub fn without_role(mut self, role: &str) -> Self {
        self.good_pool.retain(|entry| entry.role != role);
        self.evil_pool.retain(|entry| entry.role != role);
        self
    }

    /// Good characters eligible at the given table size.
    pub fn good_roles(&self, player_count: usize) -> Vec<&str> {
        eligible(&self.good_pool, player_count)
    }

    /// Evil characters eligible at the given table size.
    pub fn evil_roles(&self, player_count: usize) -> Vec<&str> {
        eligible(&self.evil_pool, player_count)
    }

    /// Check that every supported table size can be dealt.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players < TABLE_MIN_PLAYERS || self.max_players > TABLE_MAX_PLAYERS {
            return Err(GameError::Config(format!(
                "player range {}..={} is outside the supported {}..={}",
                self.min_players, self.max_players, TABLE_MIN_PLAYERS, TABLE_MAX_PLAYERS
            )));
        }
        if self.min_players > self.max_players {
            return Err(GameError::Config(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            )));
        }

        check_pool(&self.good_pool, Team::Good)?;
        check_pool(&self.evil_pool, Team::Evil)?;
        for entry in &self.good_pool {
            if self.evil_pool.iter().any(|evil| evil.role == entry.role) {
                return Err(GameError::Config(format!("{} is in both pools", entry.role)));
            }
        }
        check_lovers(&self.good_pool)?;

        for players in self.min_players..=self.max_players {
            let good = self.good_roles(players).len();
            let evil = self.evil_roles(players).len();
            // The tables cover the whole supported range, checked above.
            let need_good = good_count(players).unwrap_or(0);
            let need_evil = evil_count(players).unwrap_or(0);
            if good < need_good || evil < need_evil {
                return Err(GameError::Config(format!(
                    "{players} players need {need_good} Good and {need_evil} Evil roles, \
                     but the pools offer {good} and {evil}"
                )));
            }
        }
        Ok(())
    }
}

fn eligible(pool: &[PoolEntry], player_count: usize) -> Vec<&str> {
    pool.iter()
        .filter(|entry| entry.is_eligible(player_count))
        .map(|entry| entry.role.as_str())
        .collect()
}

fn check_pool(pool: &[PoolEntry], team: Team) -> Result<(), GameError> {
    for (i, entry) in pool.iter().enumerate() {
        let role = build_role(&entry.role, false, 0)
            .ok_or_else(|| GameError::Config(format!("unknown role {}", entry.role)))?;
        if role.team() != team {
            return Err(GameError::Config(format!(
                "{} is {}, not {}",
                entry.role,
                role.team(),
                team
            )));
        }
        if pool[..i].iter().any(|earlier| earlier.role == entry.role) {
            return Err(GameError::Config(format!("{} is listed twice", entry.role)));
        }
    }
    Ok(())
}

/// Tristan and Iseult must be dealt together, so they enter the pool together.
fn check_lovers(pool: &[PoolEntry]) -> Result<(), GameError> {
    let find = |name: &str| pool.iter().find(|entry| entry.role == name);
    match (find(names::TRISTAN), find(names::ISEULT)) {
        (None, None) => Ok(()),
        (Some(tristan), Some(iseult)) if tristan.min_players == iseult.min_players => Ok(()),
        _ => Err(GameError::Config(
            "Tristan and Iseult must share a pool entry size".to_string(),
        )),
    }
}
