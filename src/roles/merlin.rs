//! Merlin: Good, sees Evil except Mordred.

use crate::error::RoleError;

use super::{join_lines, names, Role, SeenPlayer, Team};

#[derive(Clone, Debug, Default)]
pub struct Merlin {
    seen: Vec<SeenPlayer>,
}

impl Merlin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Role for Merlin {
    fn name(&self) -> &'static str {
        names::MERLIN
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &self.seen
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        // Lancelot and Nimue appear Evil to Merlin.
        let looks_evil = (other.team == Team::Evil && !other.is(names::MORDRED))
            || other.is(names::LANCELOT)
            || other.is(names::NIMUE);
        if looks_evil {
            self.seen.push(other.clone());
        }
        Ok(looks_evil)
    }

    fn description(&self) -> String {
        let mut lines = vec![
            "You are Merlin [GOOD].\n".to_string(),
            "You know which people have Evil roles, but not who has any specific role.".to_string(),
            "You are a valid Assassination target.\n".to_string(),
        ];
        lines.extend(
            self.seen
                .iter()
                .map(|player| format!("You see {} as evil.", player.name)),
        );
        join_lines(&lines)
    }
}
