//! Nimue: Good, knows every role in play but not who holds it.

use crate::error::RoleError;

use super::{join_lines, names, Role, SeenPlayer, Team};

#[derive(Clone, Debug, Default)]
pub struct Nimue {
    seen: Vec<SeenPlayer>,
}

impl Nimue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Role for Nimue {
    fn name(&self) -> &'static str {
        names::NIMUE
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &self.seen
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        self.seen.push(other.clone());
        Ok(true)
    }

    fn description(&self) -> String {
        let mut lines = vec![
            "You are Nimue [GOOD].\n".to_string(),
            "You know which Good and Evil roles are in the game, but not who has any given role.".to_string(),
            "You appear Evil to Merlin.".to_string(),
            "You are a valid Assassination target.\n".to_string(),
            "The following roles are in the game:".to_string(),
        ];
        lines.extend(self.seen.iter().map(|player| player.role_name.to_string()));
        join_lines(&lines)
    }
}
