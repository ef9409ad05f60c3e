// Team assignment: splits a roster into teams of `TEAM_SIZE`, spreading female players across
// teams and avoiding teams that mostly repeat the same slot of the previous round.

use std::collections::HashSet;
use std::mem;

use itertools::Itertools;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};


pub const TEAM_SIZE: usize = 4;

// A team may keep at most this many players from the team with the same index in the previous
// round. Anything above triggers a rebalance of that team.
pub const MAX_REPEATED_PLAYERS: usize = 2;

// Order within a team is for display only.
pub type Team = Vec<Player>;

// Teams of one round. Team index determines team number and color.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAssignment {
    teams: Vec<Team>,
}

impl TeamAssignment {
    pub fn new(teams: Vec<Team>) -> Self { Self { teams } }

    pub fn teams(&self) -> &[Team] { &self.teams }
    pub fn team(&self, team_idx: usize) -> Option<&Team> { self.teams.get(team_idx) }
    pub fn num_teams(&self) -> usize { self.teams.len() }
    pub fn is_empty(&self) -> bool { self.teams.is_empty() }
    pub fn num_players(&self) -> usize { self.teams.iter().map(Vec::len).sum() }
    pub fn players(&self) -> impl Iterator<Item = &Player> { self.teams.iter().flatten() }
    pub fn into_teams(self) -> Vec<Team> { self.teams }

    pub fn team_of(&self, id: PlayerId) -> Option<usize> {
        self.teams.iter().position(|team| team.iter().any(|p| p.id == id))
    }

    // Drops players from their teams. Teams themselves are kept even if they become empty, so
    // that the remaining teams keep their numbers.
    pub fn retain_players(&mut self, mut f: impl FnMut(&Player) -> bool) {
        for team in self.teams.iter_mut() {
            team.retain(&mut f);
        }
    }
}

pub fn num_teams(num_players: usize) -> usize { num_players.div_ceil(TEAM_SIZE) }

// Never fails. Rosters smaller than two full teams simply produce fewer (or smaller) teams.
pub fn assign(
    roster: &[Player], previous: Option<&TeamAssignment>, rng: &mut impl Rng,
) -> TeamAssignment {
    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);
    let mut teams = distribute(shuffled);
    if let Some(previous) = previous.filter(|previous| !previous.is_empty()) {
        rebalance(&mut teams, previous);
    }
    TeamAssignment { teams }
}

pub fn assign_random(roster: &[Player], previous: Option<&TeamAssignment>) -> TeamAssignment {
    assign(roster, previous, &mut rand::rng())
}

// Splits an already shuffled list of players into `num_teams(players.len())` teams.
//
// Seed pass: each team gets one female player while they last. Fill pass: everybody else goes
// round-robin starting from the first team, taken from the tail of "males, then females".
pub fn distribute(players: Vec<Player>) -> Vec<Team> {
    let team_count = num_teams(players.len());
    let mut teams: Vec<Team> = vec![Vec::new(); team_count];
    let (mut females, males): (Vec<_>, Vec<_>) = players.into_iter().partition(Player::is_female);
    for team in teams.iter_mut() {
        let Some(female) = females.pop() else {
            break;
        };
        team.push(female);
    }
    let pool = males.into_iter().chain(females).collect_vec();
    for (index, player) in pool.into_iter().rev().enumerate() {
        teams[index % team_count].push(player);
    }
    teams
}

// Anti-repetition pass. For every team (in index order) that shares more than
// `MAX_REPEATED_PLAYERS` players with the previous team at the same index, swaps the repeated
// players with the first players from other teams that were not in that previous team.
//
// This is a single pass: a team is looked at exactly once, and a swap is never undone or
// re-checked, so the result is not guaranteed to be free of repetitions. Previous teams that do
// not exist (previous round had fewer teams) count as empty.
pub fn rebalance(teams: &mut [Team], previous: &TeamAssignment) {
    for team_idx in 0..teams.len() {
        let previous_ids: HashSet<PlayerId> = previous
            .team(team_idx)
            .map(|team| team.iter().map(|p| p.id).collect())
            .unwrap_or_default();
        let repeated = teams[team_idx]
            .iter()
            .positions(|p| previous_ids.contains(&p.id))
            .collect_vec();
        if repeated.len() <= MAX_REPEATED_PLAYERS {
            continue;
        }
        let previous_ids = &previous_ids;
        let replacements = teams
            .iter()
            .enumerate()
            .filter(|&(other_idx, _)| other_idx != team_idx)
            .flat_map(move |(other_idx, other)| {
                other
                    .iter()
                    .positions(move |p| !previous_ids.contains(&p.id))
                    .map(move |pos| (other_idx, pos))
            })
            .take(repeated.len())
            .collect_vec();
        if replacements.len() < repeated.len() {
            debug!(
                "Team {}: only {} replacement(s) for {} repeated players",
                team_idx + 1,
                replacements.len(),
                repeated.len()
            );
        }
        for (&pos, &(other_idx, other_pos)) in repeated.iter().zip(&replacements) {
            debug!(
                "Team {}: swapping {} with {} from team {}",
                team_idx + 1,
                teams[team_idx][pos].name,
                teams[other_idx][other_pos].name,
                other_idx + 1
            );
            swap_between_teams(teams, (team_idx, pos), (other_idx, other_pos));
        }
    }
}

fn swap_between_teams(teams: &mut [Team], a: (usize, usize), b: (usize, usize)) {
    let ((a_team, a_pos), (b_team, b_pos)) = (a, b);
    assert_ne!(a_team, b_team);
    let (a_player, b_player) = if a_team < b_team {
        let (left, right) = teams.split_at_mut(b_team);
        (&mut left[a_team][a_pos], &mut right[0][b_pos])
    } else {
        let (left, right) = teams.split_at_mut(a_team);
        (&mut right[0][a_pos], &mut left[b_team][b_pos])
    };
    mem::swap(a_player, b_player);
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::player::Gender;
    use crate::test_util::*;

    fn all_ids(teams: &[Team]) -> Vec<PlayerId> {
        teams.iter().flatten().map(|p| p.id).sorted().collect()
    }

    #[test]
    fn empty_roster() {
        let teams = assign(&[], None, &mut deterministic_rng());
        assert!(teams.is_empty());
        let previous = TeamAssignment::new(vec![vec![sample_player(0, "A", Gender::Male)]]);
        assert!(assign(&[], Some(&previous), &mut deterministic_rng()).is_empty());
    }

    #[test]
    fn partition_invariants() {
        for seed in 0..20 {
            let mut rng = seeded_rng(seed);
            for num_males in 0..=7 {
                for num_females in 0..=7 {
                    let roster = sample_roster(num_males, num_females);
                    let teams = assign(roster.players(), None, &mut rng);
                    let expected_ids = roster.players().iter().map(|p| p.id).sorted().collect_vec();
                    assert_eq!(all_ids(teams.teams()), expected_ids);
                    assert_eq!(teams.num_teams(), num_teams(roster.len()));
                    if !roster.is_empty() {
                        let sizes = teams.teams().iter().map(Vec::len).collect_vec();
                        let (min, max) = sizes.iter().minmax().into_option().unwrap();
                        assert!(max - min <= 2, "{:?}", sizes);
                    }
                }
            }
        }
    }

    #[test]
    fn team_count() {
        assert_eq!(num_teams(0), 0);
        assert_eq!(num_teams(1), 1);
        assert_eq!(num_teams(4), 1);
        assert_eq!(num_teams(5), 2);
        assert_eq!(num_teams(8), 2);
        assert_eq!(num_teams(9), 3);
    }

    #[test]
    fn small_roster_degrades_gracefully() {
        let roster = sample_roster(2, 1);
        let teams = assign(roster.players(), None, &mut deterministic_rng());
        assert_eq!(teams.num_teams(), 1);
        assert_eq!(teams.num_players(), 3);
    }

    #[test]
    fn eight_players_two_full_teams() {
        let roster = sample_roster(4, 4);
        for seed in 0..50 {
            let teams = assign(roster.players(), None, &mut seeded_rng(seed));
            assert_eq!(teams.num_teams(), 2);
            for team in teams.teams() {
                assert_eq!(team.len(), 4);
                assert!(team.iter().any(Player::is_female));
            }
        }
    }

    #[test]
    fn females_spread_across_teams() {
        let roster = sample_roster(9, 3);
        for seed in 0..50 {
            let teams = assign(roster.players(), None, &mut seeded_rng(seed));
            assert_eq!(teams.num_teams(), 3);
            for team in teams.teams() {
                assert_eq!(team.iter().filter(|p| p.is_female()).count(), 1);
            }
        }
    }

    #[test]
    fn distribute_is_deterministic() {
        let m = |id, name| sample_player(id, name, Gender::Male);
        let f = |id, name| sample_player(id, name, Gender::Female);
        let players = vec![m(0, "A"), f(1, "B"), m(2, "C"), m(3, "D"), f(4, "E")];
        let teams = distribute(players);
        // Seeds: E, B. Pool popped from the tail: D, C, A.
        let names = teams.iter().map(|t| t.iter().map(|p| p.name.as_str()).collect_vec()).collect_vec();
        assert_eq!(names, vec![vec!["E", "D", "A"], vec!["B", "C"]]);
    }

    #[test]
    fn rebalance_breaks_repeated_team() {
        let players = (0..8).map(|i| sample_player(i, &format!("P{i}"), Gender::Male)).collect_vec();
        let [a, b, c, d, e, f, g, h]: [Player; 8] = players.clone().try_into().unwrap();
        let previous = TeamAssignment::new(vec![
            vec![a.clone(), b.clone(), c.clone(), d.clone()],
            vec![e.clone(), f.clone(), g.clone(), h.clone()],
        ]);
        let mut teams = vec![vec![a, b, c, e], vec![d, f, g, h]];
        rebalance(&mut teams, &previous);

        let previous_0: HashSet<_> = previous.teams()[0].iter().map(|p| p.id).collect();
        let repeated = teams[0].iter().filter(|p| previous_0.contains(&p.id)).count();
        assert!(repeated <= MAX_REPEATED_PLAYERS);
        assert_eq!(all_ids(&teams), players.iter().map(|p| p.id).collect_vec());
        assert_eq!(teams[0].len(), 4);
        assert_eq!(teams[1].len(), 4);
    }

    #[test]
    fn rebalance_keeps_teams_within_limit() {
        let players = (0..6).map(|i| sample_player(i, &format!("P{i}"), Gender::Male)).collect_vec();
        let previous = TeamAssignment::new(vec![players[..3].to_vec(), players[3..].to_vec()]);
        let p = |i: usize| players[i].clone();
        // Exactly two players repeat in each team: allowed.
        let mut teams = vec![vec![p(0), p(1), p(3)], vec![p(2), p(4), p(5)]];
        let expected = teams.clone();
        rebalance(&mut teams, &previous);
        assert_eq!(teams, expected);
    }

    #[test]
    fn rebalance_without_replacements() {
        let players = (0..4).map(|i| sample_player(i, &format!("P{i}"), Gender::Male)).collect_vec();
        let previous = TeamAssignment::new(vec![players.clone()]);
        let mut teams = vec![players.clone()];
        rebalance(&mut teams, &previous);
        assert_eq!(teams, vec![players]);
    }

    #[test]
    fn rebalance_missing_previous_team_is_empty() {
        let players = (0..8).map(|i| sample_player(i, &format!("P{i}"), Gender::Male)).collect_vec();
        let previous = TeamAssignment::new(vec![players[4..].to_vec()]);
        let mut teams = vec![players[..4].to_vec(), players[4..].to_vec()];
        let expected = teams.clone();
        rebalance(&mut teams, &previous);
        assert_eq!(teams, expected);
    }

    #[test]
    fn repeated_draws_avoid_same_teams() {
        let roster = sample_roster(4, 4);
        let mut rng = deterministic_rng();
        let mut previous = assign(roster.players(), None, &mut rng);
        for _ in 0..50 {
            let teams = assign(roster.players(), Some(&previous), &mut rng);
            for (team, previous_team) in teams.teams().iter().zip(previous.teams()) {
                let repeated = team.iter().filter(|p| previous_team.contains(p)).count();
                assert!(repeated <= MAX_REPEATED_PLAYERS, "{:?} vs {:?}", team, previous_team);
            }
            assert_eq!(teams.num_players(), 8);
            previous = teams;
        }
    }

    #[test]
    fn retain_players_keeps_team_numbers() {
        let players = (0..3).map(|i| sample_player(i, &format!("P{i}"), Gender::Male)).collect_vec();
        let mut teams = TeamAssignment::new(vec![vec![players[0].clone()], players[1..].to_vec()]);
        teams.retain_players(|p| p.id != PlayerId(0));
        assert_eq!(teams.num_teams(), 2);
        assert!(teams.teams()[0].is_empty());
        assert_eq!(teams.team_of(PlayerId(2)), Some(1));
        assert_eq!(teams.team_of(PlayerId(0)), None);
    }
}
