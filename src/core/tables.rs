//! Fixed lookup tables keyed by player count.
//!
//! These encode the table-top rules: how many players are Good, how many go
//! on each mission, and which mission needs two fails.

/// Number of missions in a game.
pub const MISSION_COUNT: usize = 5;

/// Mission results needed by either side to end the mission phase.
pub const RESULTS_TO_WIN: usize = 3;

/// Smallest player count the tables cover.
pub const TABLE_MIN_PLAYERS: usize = 2;

/// Largest player count the tables cover.
pub const TABLE_MAX_PLAYERS: usize = 10;

/// Mission index that requires two effective fails in large games.
pub const HARD_MISSION_INDEX: usize = 3;

/// Player count from which the hard mission applies.
pub const HARD_MISSION_MIN_PLAYERS: usize = 7;

/// Number of Good players for a given table size.
#[must_use]
pub fn good_count(player_count: usize) -> Option<usize> {
    let good = match player_count {
        2 => 1,
        3 => 2,
        4 => 3,
        5 => 3,
        6 => 4,
        7 => 4,
        8 => 5,
        9 => 6,
        10 => 6,
        _ => return None,
    };
    Some(good)
}

/// Number of Evil players for a given table size.
#[must_use]
pub fn evil_count(player_count: usize) -> Option<usize> {
    good_count(player_count).map(|good| player_count - good)
}

/// Proposal sizes for all five missions at a given table size.
#[must_use]
pub fn mission_sizes(player_count: usize) -> Option<[usize; MISSION_COUNT]> {
    let sizes = match player_count {
        2 => [1, 1, 1, 2, 2],
        3 => [1, 2, 2, 2, 3],
        4 => [2, 2, 2, 3, 3],
        5 => [2, 3, 2, 3, 3],
        6 => [2, 3, 4, 3, 4],
        7 => [2, 3, 3, 4, 4],
        8..=10 => [3, 4, 4, 5, 5],
        _ => return None,
    };
    Some(sizes)
}

/// Proposal size for one mission.
#[must_use]
pub fn mission_size(player_count: usize, mission: usize) -> Option<usize> {
    mission_sizes(player_count).and_then(|sizes| sizes.get(mission).copied())
}

/// Whether a mission needs two effective fails to fail.
#[must_use]
pub fn is_hard_mission(player_count: usize, mission: usize) -> bool {
    mission == HARD_MISSION_INDEX && player_count >= HARD_MISSION_MIN_PLAYERS
}
