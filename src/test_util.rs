// Test utilities shared by unit tests and the integration tests in the "tests" folder.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::player::{Gender, Player, PlayerId};
use crate::roster::Roster;


// In theory random tests verify properties that should always hold, but let's fix the seed to
// avoid sporadic failures.
pub fn deterministic_rng() -> StdRng { StdRng::from_seed([0; 32]) }

pub fn seeded_rng(seed: u64) -> StdRng { StdRng::seed_from_u64(seed) }

pub fn sample_player(id: u64, name: &str, gender: Gender) -> Player {
    Player::new(PlayerId(id), name.to_owned(), gender)
}

// Males are named "M1", "M2", ..., females "F1", "F2", ...; males are added first.
pub fn sample_roster(num_males: usize, num_females: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 1..=num_males {
        roster.add_player(&format!("M{i}"), Gender::Male).unwrap();
    }
    for i in 1..=num_females {
        roster.add_player(&format!("F{i}"), Gender::Female).unwrap();
    }
    roster
}
