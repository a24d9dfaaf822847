//! Sight shared by the Evil characters.
//!
//! Evil players know each other, except Colgrevance who hides among them.
//! Titania is Good but shows up as one of them.

use super::{join_lines, names, SeenPlayer, Team};

/// What an Evil role has learned about its teammates.
#[derive(Clone, Debug, Default)]
pub struct EvilSight {
    seen: Vec<SeenPlayer>,
    saw_colgrevance: bool,
    saw_titania: bool,
    is_assassin: bool,
}

impl EvilSight {
    /// Create an empty sight for an Evil role.
    #[must_use]
    pub fn new(is_assassin: bool) -> Self {
        Self {
            is_assassin,
            ..Self::default()
        }
    }

    /// Whether this player is the assassin.
    #[must_use]
    pub fn is_assassin(&self) -> bool {
        self.is_assassin
    }

    /// Players recorded so far.
    #[must_use]
    pub fn seen(&self) -> &[SeenPlayer] {
        &self.seen
    }

    /// Apply the shared Evil rule to `other`.
    pub fn add(&mut self, other: &SeenPlayer) -> bool {
        if other.is(names::COLGREVANCE) {
            self.saw_colgrevance = true;
            return false;
        }
        if other.is(names::TITANIA) {
            self.saw_titania = true;
        } else if other.team != Team::Evil {
            return false;
        }
        self.seen.push(other.clone());
        true
    }

    /// The part of the briefing every Evil role shares.
    #[must_use]
    pub fn shared_description(&self) -> String {
        let mut lines =
            vec!["Like other Evil characters, you know who else is Evil (except Colgrevance).\n".to_string()];
        lines.extend(self.seen.iter().map(|player| format!("{} is Evil.", player.name)));
        if self.saw_colgrevance {
            lines.push(
                "Colgrevance lurks in the shadows. (There is another evil that you do not see).".to_string(),
            );
        }
        if self.saw_titania {
            lines.push("Titania has infiltrated your ranks. (One of the people is not Evil).".to_string());
        }
        join_lines(&lines).trim().to_string()
    }

    /// Build a full Evil briefing from the role-specific lines.
    #[must_use]
    pub fn describe(&self, lines: &[&str]) -> String {
        let mut all: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        all.push(self.shared_description());
        let mut description = join_lines(&all);
        if self.is_assassin {
            description.push_str("\n\nYou are the assassin!");
        }
        description
    }
}
