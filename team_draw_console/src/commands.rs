use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use log::info;
use rand::Rng;

use team_draw::{FileStore, Gender, PlayerId, RosterError, Session, Side, TEAM_SIZE};

use crate::tui;


pub type ConsoleSession = Session<FileStore>;

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn parse_gender(s: &str) -> anyhow::Result<Gender> {
    match s {
        "M" | "m" => Ok(Gender::Male),
        "F" | "f" => Ok(Gender::Female),
        _ => bail!("Unknown gender '{s}', expected M or F."),
    }
}

pub fn parse_side(s: &str) -> anyhow::Result<Side> {
    match s {
        "A" | "a" => Ok(Side::A),
        "B" | "b" => Ok(Side::B),
        _ => bail!("Unknown side '{s}', expected A or B."),
    }
}

pub fn add(session: &mut ConsoleSession, name: &str, gender: Gender) -> anyhow::Result<()> {
    match session.add_player(name, gender) {
        Ok(id) => {
            let player = session.roster().get(id).context("Player vanished after adding")?;
            println!("Added {} {} (id {})", player.name, gender.symbol(), id.0);
            Ok(())
        }
        Err(RosterError::EmptyName) => bail!("Player name cannot be empty."),
    }
}

pub fn remove(session: &mut ConsoleSession, id: u64) -> anyhow::Result<()> {
    match session.remove_player(PlayerId(id)) {
        Some(player) => {
            println!("Removed {}", player.name);
            Ok(())
        }
        None => bail!("No player with id {id}."),
    }
}

pub fn list(session: &ConsoleSession) {
    println!("{}", tui::render_roster(session.roster()));
}

pub fn reset(session: &mut ConsoleSession, skip_confirmation: bool) -> anyhow::Result<()> {
    if session.roster().is_empty() && session.teams().is_empty() {
        println!("Nothing to reset.");
        return Ok(());
    }
    if !skip_confirmation && !confirm("Remove all players and teams?")? {
        return Ok(());
    }
    session.reset();
    println!("Players and teams removed.");
    Ok(())
}

pub fn draw(
    session: &mut ConsoleSession, rng: &mut impl Rng, skip_confirmation: bool,
) -> anyhow::Result<()> {
    if !session.can_draw() {
        bail!(
            "Need at least {} players to draw teams, have {}.",
            2 * TEAM_SIZE,
            session.roster().len()
        );
    }
    if !skip_confirmation && !confirm("Draw new teams?")? {
        return Ok(());
    }
    session.draw_teams(rng);
    info!("Teams saved to {}", session.store().dir().display());
    println!("{}", tui::render_teams(session.teams(), rng));
    Ok(())
}

pub fn teams(session: &ConsoleSession, rng: &mut impl Rng) {
    println!("{}", tui::render_teams(session.teams(), rng));
}

pub fn export(session: &ConsoleSession) -> anyhow::Result<()> {
    if session.teams().is_empty() {
        bail!("No teams drawn yet.");
    }
    println!("{}", session.export_text());
    Ok(())
}

pub enum ScoreAction {
    Show,
    Up(Side),
    Down(Side),
    Reset,
}

pub fn score(
    session: &mut ConsoleSession, action: ScoreAction, skip_confirmation: bool,
) -> anyhow::Result<()> {
    match action {
        ScoreAction::Show => {}
        ScoreAction::Up(side) => session.increment_score(side),
        ScoreAction::Down(side) => session.decrement_score(side),
        ScoreAction::Reset => {
            if !skip_confirmation && !confirm("Reset the score?")? {
                return Ok(());
            }
            session.reset_scores();
        }
    }
    println!("{}", tui::render_scores(session.scores()));
    Ok(())
}
