// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::HashSet;

use itertools::Itertools;
use team_draw::{PlayerId, Team, TeamAssignment};


#[allow(dead_code)]
pub fn team_ids(team: &Team) -> HashSet<PlayerId> { team.iter().map(|p| p.id).collect() }

#[allow(dead_code)]
pub fn all_ids_sorted(teams: &TeamAssignment) -> Vec<PlayerId> {
    teams.players().map(|p| p.id).sorted().collect()
}

#[allow(dead_code)]
pub fn team_names(teams: &TeamAssignment) -> Vec<Vec<String>> {
    teams.teams().iter().map(|team| team.iter().map(|p| p.name.clone()).collect()).collect()
}

// Asserts that every player appears exactly once across all teams.
#[allow(dead_code)]
pub fn assert_partition(teams: &TeamAssignment, expected_ids: impl IntoIterator<Item = PlayerId>) {
    let expected = expected_ids.into_iter().sorted().collect_vec();
    let actual = all_ids_sorted(teams);
    assert_eq!(actual, expected, "teams: {:?}", team_names(teams));
}
