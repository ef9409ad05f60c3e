use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "♂️",
            Gender::Female => "♀️",
        }
    }
}

// Handed out by `Roster` in increasing order. Never reused, even after the player is removed.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    // Returns the current value and advances the counter.
    pub fn inc(&mut self) -> PlayerId {
        let id = *self;
        self.0 += 1;
        id
    }
}

#[derive(Clone, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
}

impl Player {
    pub fn is_female(&self) -> bool { self.gender == Gender::Female }
}

// Display names are stored as typed by the user, but in upper case.
pub fn normalize_player_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() { None } else { Some(name.to_uppercase()) }
}
