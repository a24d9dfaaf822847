//! Colgrevance: Evil, unseen by the other Evil players but knows their roles.

use crate::error::RoleError;

use super::{join_lines, names, Role, SeenPlayer, Team};

#[derive(Clone, Debug)]
pub struct Colgrevance {
    seen: Vec<SeenPlayer>,
    is_assassin: bool,
}

impl Colgrevance {
    #[must_use]
    pub fn new(is_assassin: bool) -> Self {
        Self {
            seen: Vec::new(),
            is_assassin,
        }
    }
}

impl Role for Colgrevance {
    fn name(&self) -> &'static str {
        names::COLGREVANCE
    }

    fn team(&self) -> Team {
        Team::Evil
    }

    fn is_assassin(&self) -> bool {
        self.is_assassin
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &self.seen
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        if other.team != Team::Evil {
            return Ok(false);
        }
        self.seen.push(other.clone());
        Ok(true)
    }

    fn description(&self) -> String {
        let mut lines = vec![
            "You are Colgrevance [EVIL].\n".to_string(),
            "You know not only who else is Evil, but what role each other Evil player possesses.".to_string(),
            "Evil players know that there is a Colgrevance, but do not know that it is you.\n".to_string(),
        ];
        lines.extend(
            self.seen
                .iter()
                .map(|player| format!("{} is {}.", player.name, player.role_name)),
        );
        let mut description = join_lines(&lines).trim_end().to_string();
        if self.is_assassin {
            description.push_str("\n\nYou are the assassin!");
        }
        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Merlin, Mordred};

    #[test]
    fn test_sees_evil_roles() {
        let mut colgrevance = Colgrevance::new(false);
        assert_eq!(
            colgrevance.add_seen_player(&SeenPlayer::of("Bob", &Mordred::new(false))),
            Ok(true)
        );
        assert_eq!(
            colgrevance.add_seen_player(&SeenPlayer::of("Alice", &Merlin::new())),
            Ok(false)
        );

        let expected = "You are Colgrevance [EVIL].\n\nYou know not only who else is Evil, but what role each \
                        other Evil player possesses.\nEvil players know that there is a Colgrevance, but do not \
                        know that it is you.\n\nBob is Mordred.";
        assert_eq!(colgrevance.description(), expected);
    }
}
