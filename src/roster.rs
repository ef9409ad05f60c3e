use enum_map::{EnumMap, enum_map};
use serde::{Deserialize, Serialize};

use crate::player::{Gender, Player, PlayerId, normalize_player_name};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RosterError {
    EmptyName,
}

// Number of players of each gender in a group of players.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Composition {
    pub by_gender: EnumMap<Gender, usize>,
}

impl Composition {
    pub fn of<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut by_gender = enum_map! { _ => 0 };
        for p in players {
            by_gender[p.gender] += 1;
        }
        Composition { by_gender }
    }

    pub fn total(&self) -> usize { self.by_gender.values().sum() }
    pub fn males(&self) -> usize { self.by_gender[Gender::Male] }
    pub fn females(&self) -> usize { self.by_gender[Gender::Female] }
}

// Players registered for the game, in the order they were added.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    #[serde(default)]
    next_id: PlayerId,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    pub fn players(&self) -> &[Player] { &self.players }
    pub fn len(&self) -> usize { self.players.len() }
    pub fn is_empty(&self) -> bool { self.players.is_empty() }
    pub fn get(&self, id: PlayerId) -> Option<&Player> { self.players.iter().find(|p| p.id == id) }
    pub fn contains(&self, id: PlayerId) -> bool { self.get(id).is_some() }
    pub fn composition(&self) -> Composition { Composition::of(&self.players) }

    pub fn add_player(&mut self, name: &str, gender: Gender) -> Result<PlayerId, RosterError> {
        let name = normalize_player_name(name).ok_or(RosterError::EmptyName)?;
        // Rosters saved by older versions may lack `next_id`, so never trust it blindly.
        if let Some(max_id) = self.players.iter().map(|p| p.id).max() {
            if self.next_id <= max_id {
                self.next_id = PlayerId(max_id.0 + 1);
            }
        }
        let id = self.next_id.inc();
        self.players.push(Player::new(id, name, gender));
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let pos = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(pos))
    }

    // Removes all players. Ids keep growing so that stale references never match a new player.
    pub fn clear(&mut self) { self.players.clear(); }
}
