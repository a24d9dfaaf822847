//! Registration while the lobby is open.

use tracing::info;

use super::{Game, LobbyStatus};
use crate::core::{Player, SessionId};
use crate::error::GameError;

impl Game {
    /// Seat a new player.
    ///
    /// Returns every display name in join order.
    pub fn add_player(
        &mut self,
        session_id: impl Into<SessionId>,
        name: impl Into<String>,
    ) -> Result<Vec<String>, GameError> {
        let session_id = session_id.into();
        let name = name.into();

        self.require_status(LobbyStatus::Joining)?;
        if self.is_game_full() {
            return Err(GameError::GameFull {
                max: self.config.max_players,
            });
        }
        if self.players.contains_key(&session_id) {
            return Err(GameError::DuplicateSession(session_id));
        }
        if self.sessions_by_name.contains_key(&name) {
            return Err(GameError::DuplicateName(name));
        }

        info!(session = %session_id, name = %name, "player joined");
        self.sessions_by_name.insert(name.clone(), session_id.clone());
        self.join_order.push(session_id.clone());
        self.players.insert(session_id.clone(), Player::new(session_id, name));
        Ok(self.player_names())
    }

    /// Remove a player before the game starts.
    ///
    /// Returns the remaining display names in join order.
    pub fn remove_player(&mut self, session_id: &SessionId) -> Result<Vec<String>, GameError> {
        self.require_status(LobbyStatus::Joining)?;
        let player = self
            .players
            .remove(session_id)
            .ok_or_else(|| GameError::UnknownPlayer(session_id.clone()))?;

        info!(session = %session_id, name = player.name(), "player left");
        self.sessions_by_name.remove(player.name());
        self.join_order.retain(|seated| seated != session_id);
        Ok(self.player_names())
    }

    /// Display names in join order.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        self.names_of(&self.join_order)
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_game_full(&self) -> bool {
        self.players.len() >= self.config.max_players
    }

    #[must_use]
    pub fn is_player_in_game(&self, session_id: &SessionId) -> bool {
        self.players.contains_key(session_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{GameConfig, SessionId};
    use crate::error::GameError;
    use crate::game::Game;

    fn game() -> Game {
        Game::with_seed(GameConfig::default(), 3).unwrap()
    }

    #[test]
    fn test_add_player() {
        let mut game = game();
        assert_eq!(game.add_player("a", "Paul").unwrap(), vec!["Paul"]);
        assert_eq!(game.add_player("b", "Andrew").unwrap(), vec!["Paul", "Andrew"]);
        assert_eq!(game.num_players(), 2);
        assert!(game.is_player_in_game(&SessionId::from("a")));
        assert!(!game.is_player_in_game(&SessionId::from("c")));
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut game = game();
        game.add_player("a", "Paul").unwrap();
        assert_eq!(
            game.add_player("a", "Other"),
            Err(GameError::DuplicateSession("a".into()))
        );
        assert_eq!(
            game.add_player("b", "Paul"),
            Err(GameError::DuplicateName("Paul".to_string()))
        );
        // Names are case-sensitive.
        assert!(game.add_player("b", "paul").is_ok());
    }

    #[test]
    fn test_game_full() {
        let mut game = game();
        for i in 0..10 {
            game.add_player(format!("s{i}"), format!("P{i}")).unwrap();
        }
        assert!(game.is_game_full());
        assert_eq!(
            game.add_player("s10", "P10"),
            Err(GameError::GameFull { max: 10 })
        );
    }

    #[test]
    fn test_remove_player() {
        let mut game = game();
        game.add_player("a", "Paul").unwrap();
        game.add_player("b", "Andrew").unwrap();
        assert_eq!(game.remove_player(&"a".into()).unwrap(), vec!["Andrew"]);
        assert_eq!(
            game.remove_player(&"a".into()),
            Err(GameError::UnknownPlayer("a".into()))
        );
        // The name is free again.
        assert!(game.add_player("c", "Paul").is_ok());
    }
}
