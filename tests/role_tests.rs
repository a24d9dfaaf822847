//! Role visibility and briefing tests.
//!
//! Briefings are compared byte for byte; the lines seen depend on the order
//! players were offered.

use thavalon::roles::{
    build_role, names, Agravaine, Colgrevance, Lancelot, Lover, Maelegant, Maeve, Merlin, Mordred,
    Morgana, Nimue, Oberon, Percival, Titania,
};
use thavalon::{AbilityKind, MissionCard, Role, RoleError, SeenPlayer, Team};

fn seen(name: &str, role: &dyn Role) -> SeenPlayer {
    SeenPlayer::of(name, role)
}

fn table() -> Vec<SeenPlayer> {
    vec![
        seen("Merlin", &Merlin::new()),
        seen("Percival", &Percival::new()),
        seen("Tristan", &Lover::tristan()),
        seen("Iseult", &Lover::iseult()),
        seen("Nimue", &Nimue::new()),
        seen("Lancelot", &Lancelot::new()),
        seen("Titania", &Titania::new()),
        seen("Mordred", &Mordred::new(false)),
        seen("Morgana", &Morgana::new(false)),
        seen("Maelegant", &Maelegant::new(false)),
        seen("Maeve", &Maeve::new(false, 3)),
        seen("Oberon", &Oberon::new(false, 3)),
        seen("Agravaine", &Agravaine::new(false, 3)),
        seen("Colgrevance", &Colgrevance::new(false)),
    ]
}

/// Offer the whole table (minus the role itself) and return who was recorded.
fn recorded(role: &mut dyn Role) -> Vec<&'static str> {
    let own = role.name();
    table()
        .iter()
        .filter(|other| !other.is(own))
        .filter(|other| role.add_seen_player(other).unwrap())
        .map(|other| other.role_name)
        .collect()
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn test_merlin_sees_evil_except_mordred() {
    let mut merlin = Merlin::new();
    assert_eq!(
        recorded(&mut merlin),
        vec![
            names::NIMUE,
            names::LANCELOT,
            names::MORGANA,
            names::MAELEGANT,
            names::MAEVE,
            names::OBERON,
            names::AGRAVAINE,
            names::COLGREVANCE,
        ]
    );
}

#[test]
fn test_percival_sees_merlin_and_morgana() {
    let mut percival = Percival::new();
    assert_eq!(recorded(&mut percival), vec![names::MERLIN, names::MORGANA]);
}

#[test]
fn test_lovers_see_each_other() {
    let mut tristan = Lover::tristan();
    assert_eq!(recorded(&mut tristan), vec![names::ISEULT]);
    let mut iseult = Lover::iseult();
    assert_eq!(recorded(&mut iseult), vec![names::TRISTAN]);
}

#[test]
fn test_lover_rejects_second_partner() {
    let mut iseult = Lover::iseult();
    iseult.add_seen_player(&seen("Test", &Lover::tristan())).unwrap();
    assert_eq!(
        iseult.add_seen_player(&seen("Name", &Lover::tristan())),
        Err(RoleError::TooManySeen { role: "Iseult" })
    );
    assert_eq!(iseult.seen_players().len(), 1);
}

#[test]
fn test_nimue_sees_everyone() {
    let mut nimue = Nimue::new();
    assert_eq!(recorded(&mut nimue).len(), 13);
}

#[test]
fn test_blind_roles() {
    assert!(recorded(&mut Lancelot::new()).is_empty());
    assert!(recorded(&mut Titania::new()).is_empty());
}

#[test]
fn test_evil_sees_evil_and_titania() {
    let expected = vec![
        names::TITANIA,
        names::MORGANA,
        names::MAELEGANT,
        names::MAEVE,
        names::OBERON,
        names::AGRAVAINE,
    ];
    assert_eq!(recorded(&mut Mordred::new(false)), expected);

    let mut maeve = Maeve::new(false, 3);
    let seen = recorded(&mut maeve);
    assert!(seen.contains(&names::MORDRED));
    assert!(!seen.contains(&names::COLGREVANCE));
}

#[test]
fn test_colgrevance_sees_true_evil() {
    let mut colgrevance = Colgrevance::new(false);
    assert_eq!(
        recorded(&mut colgrevance),
        vec![
            names::MORDRED,
            names::MORGANA,
            names::MAELEGANT,
            names::MAEVE,
            names::OBERON,
            names::AGRAVAINE,
        ]
    );
}

#[test]
fn test_add_seen_player_leaves_other_untouched() {
    let other = seen("Morgana", &Morgana::new(false));
    let before = other.clone();
    let mut merlin = Merlin::new();
    merlin.add_seen_player(&other).unwrap();
    assert_eq!(other, before);
}

// =============================================================================
// Briefings
// =============================================================================

#[test]
fn test_merlin_description() {
    let mut merlin = Merlin::new();
    merlin.add_seen_player(&seen("Morgana", &Morgana::new(false))).unwrap();
    merlin.add_seen_player(&seen("Mordred", &Mordred::new(false))).unwrap();

    let expected = "You are Merlin [GOOD].\n\nYou know which people have Evil roles, but not who has any specific \
                    role.\nYou are a valid Assassination target.\n\nYou see Morgana as evil.";
    assert_eq!(merlin.description(), expected);
}

#[test]
fn test_nimue_description() {
    let mut nimue = Nimue::new();
    nimue.add_seen_player(&seen("Alice", &Lover::iseult())).unwrap();
    nimue.add_seen_player(&seen("Bob", &Morgana::new(false))).unwrap();

    let expected = "You are Nimue [GOOD].\n\nYou know which Good and Evil roles are in the game, but not who has \
                    any given role.\nYou appear Evil to Merlin.\nYou are a valid Assassination target.\n\nThe \
                    following roles are in the game:\nIseult\nMorgana";
    assert_eq!(nimue.description(), expected);
}

#[test]
fn test_iseult_description() {
    let mut iseult = Lover::iseult();
    iseult.add_seen_player(&seen("Test", &Lover::tristan())).unwrap();

    let expected = "You are Iseult [GOOD].\n\nThe person you see is also Good and is aware that you are Good.\n\
                    You and Tristan are collectively a valid Assassination target.\n\nTest is Tristan.";
    assert_eq!(iseult.description(), expected);
}

#[test]
fn test_lancelot_description() {
    assert_eq!(
        Lancelot::new().description(),
        "You are Lancelot [GOOD].\nYou may play Reversal cards while on missions.\nYou appear Evil to Merlin."
    );
}

#[test]
fn test_percival_description() {
    let mut percival = Percival::new();
    percival.add_seen_player(&seen("Ann", &Merlin::new())).unwrap();
    percival.add_seen_player(&seen("Ben", &Morgana::new(false))).unwrap();

    let expected = "You are Percival [GOOD].\n\nYou know which people have the Merlin or Morgana roles, but not \
                    specifically who has each.\nAnn is Merlin or Morgana.\nBen is Merlin or Morgana.";
    assert_eq!(percival.description(), expected);
}

#[test]
fn test_mordred_description() {
    for is_assassin in [false, true] {
        let mut mordred = Mordred::new(is_assassin);
        mordred.add_seen_player(&seen("Morgana", &Morgana::new(false))).unwrap();

        let mut expected = "You are Mordred [EVIL].\n\nYou are hidden from all Good Information roles.\nLike other \
                            Evil characters, you know who else is Evil (except Colgrevance).\n\nMorgana is Evil."
            .to_string();
        if is_assassin {
            expected.push_str("\n\nYou are the assassin!");
        }
        assert_eq!(mordred.description(), expected);
    }
}

#[test]
fn test_maeve_description() {
    for is_assassin in [false, true] {
        let mut maeve = Maeve::new(is_assassin, 3);
        maeve.add_seen_player(&seen("Morgana", &Morgana::new(false))).unwrap();

        let mut expected = "You are Maeve [EVIL].\n\nOnce per round (except the first), during a vote on a proposal, \
                            you can secretly choose to obscure how\neach player voted on the proposal and instead \
                            have only the amount of upvotes and downvotes presented.\nLike other Evil characters, \
                            you know who else is Evil (except Colgrevance).\n\nMorgana is Evil."
            .to_string();
        if is_assassin {
            expected.push_str("\n\nYou are the assassin!");
        }
        assert_eq!(maeve.description(), expected);
    }
}

#[test]
fn test_every_briefing_names_its_role() {
    for name in thavalon::roles::ROLE_NAMES {
        let role = build_role(name, false, 3).unwrap();
        assert!(
            role.description().starts_with(&format!("You are {name} [")),
            "{name} briefing does not open with its name"
        );
    }
}

// =============================================================================
// Cards and abilities
// =============================================================================

#[test]
fn test_agravaine_only_fails() {
    let agravaine = Agravaine::new(false, 3);
    assert!(agravaine.validate_mission_card(MissionCard::Fail));
    assert!(!agravaine.validate_mission_card(MissionCard::Success));
    assert!(!agravaine.validate_mission_card(MissionCard::Reverse));
    assert_eq!(agravaine.team(), Team::Evil);
}

#[test]
fn test_roles_without_ability() {
    for name in [names::MERLIN, names::NIMUE, names::LANCELOT, names::ISEULT, names::MORDRED] {
        let mut role = build_role(name, false, 3).unwrap();
        assert_eq!(role.ability(), None);
        assert_eq!(role.use_ability(), Err(RoleError::NoAbility { role: role.name() }));
    }
}

#[test]
fn test_maeve_use_limit() {
    let mut maeve = Maeve::new(false, 3);
    for used in 1..=3 {
        assert_eq!(maeve.use_ability(), Ok(AbilityKind::ObscureVote));
        assert!(maeve.has_obscured_vote());
        assert!(maeve.take_obscured_vote());
        assert!(!maeve.has_obscured_vote());
        assert_eq!(maeve.ability_uses_left(), Some(3 - used));
    }
    assert_eq!(
        maeve.use_ability(),
        Err(RoleError::AbilityExhausted { role: "Maeve", limit: 3 })
    );
    assert!(!maeve.take_obscured_vote());
}

#[test]
fn test_oberon_shares_obscure() {
    let mut oberon = Oberon::new(true, 1);
    assert_eq!(oberon.ability(), Some(AbilityKind::ObscureVote));
    oberon.use_ability().unwrap();
    assert!(oberon.take_obscured_vote());
    assert!(oberon.use_ability().is_err());
    assert!(oberon.is_assassin());
}
