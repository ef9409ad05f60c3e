use log::info;
use rand::Rng;

use crate::assign::{TeamAssignment, assign};
use crate::player::{Player, PlayerId};


// Draws teams round after round, remembering only the latest round. The previous round is used
// to avoid handing out nearly the same teams twice in a row.
#[derive(Clone, Debug, Default)]
pub struct TeamDrawer {
    previous: Option<TeamAssignment>,
}

impl TeamDrawer {
    pub fn new() -> Self { Self::default() }

    pub fn with_previous(previous: TeamAssignment) -> Self {
        TeamDrawer {
            previous: if previous.is_empty() { None } else { Some(previous) },
        }
    }

    pub fn previous(&self) -> Option<&TeamAssignment> { self.previous.as_ref() }

    pub fn draw(&mut self, roster: &[Player], rng: &mut impl Rng) -> TeamAssignment {
        let teams = assign(roster, self.previous.as_ref(), rng);
        info!(
            "Drew {} team(s) for {} player(s){}",
            teams.num_teams(),
            roster.len(),
            if self.previous.is_some() { ", rebalanced against previous round" } else { "" }
        );
        self.previous = Some(teams.clone());
        teams
    }

    pub fn forget_player(&mut self, id: PlayerId) {
        self.previous.as_mut().map(|previous| previous.retain_players(|p| p.id != id));
    }

    pub fn reset(&mut self) { self.previous = None; }
}
