//! Name-keyed construction of every known character.

use super::{
    names, Agravaine, Colgrevance, Lancelot, Lover, Maelegant, Maeve, Merlin, Mordred, Morgana,
    Nimue, Oberon, Percival, Role, Titania,
};

/// Every character this crate knows how to build.
pub const ROLE_NAMES: [&str; 14] = [
    names::MERLIN,
    names::PERCIVAL,
    names::TRISTAN,
    names::ISEULT,
    names::NIMUE,
    names::LANCELOT,
    names::TITANIA,
    names::MORDRED,
    names::MORGANA,
    names::MAELEGANT,
    names::MAEVE,
    names::OBERON,
    names::AGRAVAINE,
    names::COLGREVANCE,
];

/// Whether `name` is a character [`build_role`] can construct.
#[must_use]
pub fn is_known_role(name: &str) -> bool {
    ROLE_NAMES.contains(&name)
}

/// Build the named character.
///
/// `is_assassin` only applies to Evil characters. `ability_uses` caps the
/// limited abilities. Returns `None` for unknown names.
#[must_use]
pub fn build_role(name: &str, is_assassin: bool, ability_uses: usize) -> Option<Box<dyn Role>> {
    let role: Box<dyn Role> = match name {
        names::MERLIN => Box::new(Merlin::new()),
        names::PERCIVAL => Box::new(Percival::new()),
        names::TRISTAN => Box::new(Lover::tristan()),
        names::ISEULT => Box::new(Lover::iseult()),
        names::NIMUE => Box::new(Nimue::new()),
        names::LANCELOT => Box::new(Lancelot::new()),
        names::TITANIA => Box::new(Titania::new()),
        names::MORDRED => Box::new(Mordred::new(is_assassin)),
        names::MORGANA => Box::new(Morgana::new(is_assassin)),
        names::MAELEGANT => Box::new(Maelegant::new(is_assassin)),
        names::MAEVE => Box::new(Maeve::new(is_assassin, ability_uses)),
        names::OBERON => Box::new(Oberon::new(is_assassin, ability_uses)),
        names::AGRAVAINE => Box::new(Agravaine::new(is_assassin, ability_uses)),
        names::COLGREVANCE => Box::new(Colgrevance::new(is_assassin)),
        _ => return None,
    };
    Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Team;

    #[test]
    fn test_builds_every_known_role() {
        for name in ROLE_NAMES {
            let role = build_role(name, false, 3).unwrap();
            assert_eq!(role.name(), name);
        }
        assert!(build_role("Arthur", false, 3).is_none());
        assert!(!is_known_role("Arthur"));
    }

    #[test]
    fn test_assassin_flag_only_sticks_to_evil() {
        let morgana = build_role(names::MORGANA, true, 3).unwrap();
        assert_eq!(morgana.team(), Team::Evil);
        assert!(morgana.is_assassin());

        let merlin = build_role(names::MERLIN, true, 3).unwrap();
        assert!(!merlin.is_assassin());
    }
}
