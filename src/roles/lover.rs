//! Tristan and Iseult: Good lovers who only see each other.

use crate::error::RoleError;

use super::{join_lines, names, Role, SeenPlayer, Team};

/// One half of the lovers pair.
#[derive(Clone, Debug)]
pub struct Lover {
    name: &'static str,
    lover: &'static str,
    seen: Vec<SeenPlayer>,
}

impl Lover {
    /// A lover role named `name` whose counterpart is `lover`.
    #[must_use]
    pub fn new(name: &'static str, lover: &'static str) -> Self {
        Self {
            name,
            lover,
            seen: Vec::new(),
        }
    }

    #[must_use]
    pub fn tristan() -> Self {
        Self::new(names::TRISTAN, names::ISEULT)
    }

    #[must_use]
    pub fn iseult() -> Self {
        Self::new(names::ISEULT, names::TRISTAN)
    }

    /// Name of the counterpart role.
    #[must_use]
    pub fn lover_name(&self) -> &'static str {
        self.lover
    }
}

impl Role for Lover {
    fn name(&self) -> &'static str {
        self.name
    }

    fn team(&self) -> Team {
        Team::Good
    }

    fn seen_players(&self) -> &[SeenPlayer] {
        &self.seen
    }

    fn add_seen_player(&mut self, other: &SeenPlayer) -> Result<bool, RoleError> {
        if !other.is(self.lover) {
            return Ok(false);
        }
        if !self.seen.is_empty() {
            return Err(RoleError::TooManySeen { role: self.name });
        }
        self.seen.push(other.clone());
        Ok(true)
    }

    fn description(&self) -> String {
        let mut lines = vec![
            format!("You are {} [GOOD].\n", self.name),
            "The person you see is also Good and is aware that you are Good.".to_string(),
            format!("You and {} are collectively a valid Assassination target.\n", self.lover),
        ];
        if let Some(lover) = self.seen.first() {
            lines.push(format!("{} is {}.", lover.name, self.lover));
        }
        join_lines(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sees_counterpart() {
        let mut tristan = Lover::tristan();
        let merlin = SeenPlayer {
            name: "Alice".to_string(),
            role_name: names::MERLIN,
            team: Team::Good,
        };
        assert_eq!(tristan.add_seen_player(&merlin), Ok(false));
        assert!(tristan.seen_players().is_empty());
        assert_eq!(tristan.lover_name(), names::ISEULT);
    }
}
