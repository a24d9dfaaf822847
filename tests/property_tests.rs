//! Property tests over seeds and table sizes.

mod common;

use proptest::prelude::*;
use thavalon::core::tables;
use thavalon::roles::names;
use thavalon::{mission_result, MissionCard, MissionResult, Team};

fn card() -> impl Strategy<Value = MissionCard> {
    prop_oneof![
        Just(MissionCard::Success),
        Just(MissionCard::Fail),
        Just(MissionCard::Reverse),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deal_matches_table(count in 2usize..=10, seed in any::<u64>()) {
        let game = common::started(count, seed);
        let infos: Vec<_> = (0..count)
            .map(|i| game.get_player_info(&common::session(i)).unwrap())
            .collect();

        let evil = infos.iter().filter(|info| info.team == Team::Evil).count();
        prop_assert_eq!(evil, tables::evil_count(count).unwrap());

        let mut roles: Vec<_> = infos.iter().map(|info| info.role).collect();
        roles.sort_unstable();
        roles.dedup();
        prop_assert_eq!(roles.len(), count);

        let tristan = roles.contains(&names::TRISTAN);
        let iseult = roles.contains(&names::ISEULT);
        prop_assert_eq!(tristan, iseult);

        prop_assert_eq!(infos.iter().filter(|info| info.is_assassin).count(), 1);
    }

    #[test]
    fn prop_add_remove_roundtrip(count in 0usize..9, seed in any::<u64>()) {
        let mut game = common::lobby(count, seed);
        let before = game.player_names();
        game.add_player("extra", "Extra").unwrap();
        let after = game.remove_player(&"extra".into()).unwrap();
        prop_assert_eq!(after, before);
        prop_assert!(!game.is_player_in_game(&"extra".into()));
    }

    #[test]
    fn prop_queries_are_stable(count in 2usize..=10, seed in any::<u64>()) {
        let game = common::started(count, seed);
        prop_assert_eq!(game.get_proposal_info().unwrap(), game.get_proposal_info().unwrap());
        prop_assert_eq!(game.get_round_info().unwrap(), game.get_round_info().unwrap());
        let session = common::session(0);
        prop_assert_eq!(
            game.get_player_info(&session).unwrap(),
            game.get_player_info(&session).unwrap()
        );
    }

    #[test]
    fn prop_result_ignores_card_order(mut cards in prop::collection::vec(card(), 1..6), hard in any::<bool>()) {
        let result = mission_result(&cards, hard);
        cards.reverse();
        prop_assert_eq!(mission_result(&cards, hard), result);
    }

    #[test]
    fn prop_all_success_passes(len in 1usize..6, hard in any::<bool>()) {
        let cards = vec![MissionCard::Success; len];
        prop_assert_eq!(mission_result(&cards, hard), MissionResult::Pass);
    }
}

#[test]
fn test_payloads_serialize() {
    let game = common::started(5, 3);
    let info = game.get_player_info(&common::session(0)).unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["name"], "P0");
    assert!(json["description"].as_str().unwrap().starts_with("You are"));

    let proposal = serde_json::to_value(game.get_proposal_info().unwrap()).unwrap();
    assert_eq!(proposal["proposal_size"], 2);
    assert_eq!(proposal["proposal_order"].as_array().unwrap().len(), 5);
}
