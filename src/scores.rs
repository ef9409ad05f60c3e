use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Enum, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

// Running score of a two-team game. Scores never go below zero.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores {
    per_side: EnumMap<Side, u32>,
}

impl Scores {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, side: Side) -> u32 { self.per_side[side] }
    pub fn increment(&mut self, side: Side) { self.per_side[side] += 1; }
    pub fn decrement(&mut self, side: Side) {
        self.per_side[side] = self.per_side[side].saturating_sub(1);
    }
    pub fn reset(&mut self) { *self = Self::default(); }
}
