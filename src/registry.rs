//! Directory of running games.
//!
//! The registry is constructed explicitly and handed to whatever drives
//! connections. Each game sits behind its own mutex, so one game's players
//! never wait on another's.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::GameConfig;
use crate::error::{GameError, RegistryError};
use crate::game::Game;

/// Opaque identifier of a registered game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// A fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A game shared between the connections playing it.
pub type SharedGame = Arc<Mutex<Game>>;

/// Maps game identifiers to running games.
#[derive(Debug)]
pub struct GameRegistry {
    config: GameConfig,
    games: RwLock<FxHashMap<GameId, SharedGame>>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            games: RwLock::default(),
        }
    }
}

impl GameRegistry {
    /// Create a registry whose new games use `config`.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            games: RwLock::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create and register a new game.
    pub fn create(&self) -> Result<GameId, GameError> {
        let game = Game::new(self.config.clone())?;
        Ok(self.insert(game))
    }

    /// Register an existing game, e.g. one built with a fixed seed.
    pub fn insert(&self, game: Game) -> GameId {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        let mut id = GameId::new();
        while games.contains_key(&id) {
            warn!(game = %id, "game id collision, drawing another");
            id = GameId::new();
        }
        games.insert(id, Arc::new(Mutex::new(game)));
        info!(game = %id, total = games.len(), "game created");
        id
    }

    /// Fetch a game by id.
    pub fn get(&self, id: &GameId) -> Result<SharedGame, RegistryError> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games.get(id).cloned().ok_or(RegistryError::NotFound(*id))
    }

    /// Remove a game. Connections still holding it keep it alive until they
    /// drop it.
    pub fn delete(&self, id: &GameId) -> Result<(), RegistryError> {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        if games.remove(id).is_none() {
            return Err(RegistryError::NotFound(*id));
        }
        info!(game = %id, total = games.len(), "game deleted");
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers of every registered game, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }
}
