use log::info;
use rand::Rng;

use crate::assign::{TEAM_SIZE, TeamAssignment};
use crate::dirty::Dirty;
use crate::drawer::TeamDrawer;
use crate::export::export_teams;
use crate::persistence::{KeyValueStore, StoreKey, load_or_default, save};
use crate::player::{Gender, Player, PlayerId};
use crate::roster::{Roster, RosterError};
use crate::scores::{Scores, Side};


// Everything the app knows: registered players, current teams, the previous round and the score.
// Every mutating method writes the changed parts back to the store before returning.
pub struct Session<S: KeyValueStore> {
    store: S,
    roster: Dirty<Roster>,
    teams: Dirty<TeamAssignment>,
    scores: Dirty<Scores>,
    drawer: TeamDrawer,
}

impl<S: KeyValueStore> Session<S> {
    pub fn load(store: S) -> Self {
        let roster: Roster = load_or_default(&store, StoreKey::Players);
        let mut teams: TeamAssignment = load_or_default(&store, StoreKey::Teams);
        let scores: Scores = load_or_default(&store, StoreKey::Scores);

        let num_stored_players = teams.num_players();
        teams.retain_players(|p| roster.contains(p.id));
        let teams_pruned = teams.num_players() != num_stored_players;

        // The teams on display are the latest round, so they are what the next draw should avoid.
        let drawer = TeamDrawer::with_previous(teams.clone());
        let mut session = Session {
            store,
            roster: Dirty::new(roster),
            teams: Dirty::new(teams),
            scores: Dirty::new(scores),
            drawer,
        };
        if teams_pruned {
            session.teams.mark_dirty();
            session.flush();
        }
        session
    }

    pub fn roster(&self) -> &Roster { &self.roster }
    pub fn teams(&self) -> &TeamAssignment { &self.teams }
    pub fn scores(&self) -> &Scores { &self.scores }
    pub fn previous_teams(&self) -> Option<&TeamAssignment> { self.drawer.previous() }
    pub fn store(&self) -> &S { &self.store }
    pub fn into_store(self) -> S { self.store }

    pub fn add_player(&mut self, name: &str, gender: Gender) -> Result<PlayerId, RosterError> {
        let id = self.roster.get_mut().add_player(name, gender)?;
        self.flush();
        Ok(id)
    }

    // Also removes the player from the current teams and from the previous round.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let player = self.roster.get_mut().remove_player(id)?;
        if self.teams.team_of(id).is_some() {
            self.teams.get_mut().retain_players(|p| p.id != id);
        }
        self.drawer.forget_player(id);
        self.flush();
        Some(player)
    }

    pub fn reset(&mut self) {
        info!("Resetting {} player(s) and {} team(s)", self.roster.len(), self.teams.num_teams());
        self.roster.get_mut().clear();
        self.teams.set(TeamAssignment::default());
        self.drawer.reset();
        self.flush();
    }

    // The draw itself works with any number of players, but fewer than two full teams is not a
    // game worth drawing for.
    pub fn can_draw(&self) -> bool { self.roster.len() >= 2 * TEAM_SIZE }

    pub fn draw_teams(&mut self, rng: &mut impl Rng) -> &TeamAssignment {
        let teams = self.drawer.draw(self.roster.players(), rng);
        self.teams.set(teams);
        self.flush();
        &self.teams
    }

    pub fn export_text(&self) -> String { export_teams(&self.teams) }

    pub fn increment_score(&mut self, side: Side) {
        self.scores.get_mut().increment(side);
        self.flush();
    }

    pub fn decrement_score(&mut self, side: Side) {
        self.scores.get_mut().decrement(side);
        self.flush();
    }

    pub fn reset_scores(&mut self) {
        self.scores.set(Scores::default());
        self.flush();
    }

    // Writes modified values. A value that failed to save stays dirty and is retried on the next
    // flush.
    fn flush(&mut self) {
        if self.roster.take_dirt() && !save(&mut self.store, StoreKey::Players, &*self.roster) {
            self.roster.mark_dirty();
        }
        if self.teams.take_dirt() && !save(&mut self.store, StoreKey::Teams, &*self.teams) {
            self.teams.mark_dirty();
        }
        if self.scores.take_dirt() && !save(&mut self.store, StoreKey::Scores, &*self.scores) {
            self.scores.mark_dirty();
        }
    }
}
