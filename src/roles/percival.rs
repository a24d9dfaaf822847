//! Percival: Good, sees Merlin and Morgana without telling them apart.

use crate::error::RoleError;

use super::{join_lines, names, Role, SeenPlayer, Team};

#[derive(Clone, Debug, Default)]
pub struct Percival {
    seen: Vec<SeenPlayer>,
}

impl Percival {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Role for Percival {
    fn name(&self) -> &'static str {
        names::PERCIVAL
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &self.seen
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        if other.is(names::MERLIN) || other.is(names::MORGANA) {
            self.seen.push(other.clone());
            return Ok(true);
        }
        Ok(false)
    }

    fn description(&self) -> String {
        let mut lines = vec![
            "You are Percival [GOOD].\n".to_string(),
            "You know which people have the Merlin or Morgana roles, but not specifically who has each."
                .to_string(),
        ];
        lines.extend(
            self.seen
                .iter()
                .map(|player| format!("{} is Merlin or Morgana.", player.name)),
        );
        join_lines(&lines)
    }
}
