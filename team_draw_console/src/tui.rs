use crossterm::style::{Color, Stylize};
use itertools::Itertools;
use rand::Rng;

use team_draw::{Gender, Roster, Scores, Side, TeamAssignment, TeamColor};


fn gender_color(gender: Gender) -> Color {
    match gender {
        Gender::Male => Color::Blue,
        Gender::Female => Color::Magenta,
    }
}

fn team_color(color: TeamColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

pub fn render_roster(roster: &Roster) -> String {
    let composition = roster.composition();
    let mut lines = vec![format!(
        "Total: {} | Men: {} | Women: {}",
        composition.total(),
        composition.males(),
        composition.females()
    )];
    lines.extend(roster.players().iter().map(|p| {
        format!(
            "  {:>4}  {} {}",
            p.id.0,
            p.name.as_str().with(gender_color(p.gender)),
            p.gender.symbol()
        )
    }));
    lines.join("\n")
}

// Teams past the palette get a new random color on every render, same as the web version.
pub fn render_teams(teams: &TeamAssignment, rng: &mut impl Rng) -> String {
    if teams.is_empty() {
        return "No teams drawn yet.".to_owned();
    }
    teams
        .teams()
        .iter()
        .enumerate()
        .map(|(team_idx, team)| {
            let color = team_color(TeamColor::for_team(team_idx, rng));
            let header = format!("Time {}", team_idx + 1).with(color).bold();
            let players = team
                .iter()
                .map(|p| format!("  {} {}", "•".with(gender_color(p.gender)), p.name))
                .join("\n");
            format!("{header}\n{players}\n")
        })
        .join("\n")
}

pub fn render_scores(scores: &Scores) -> String {
    format!(
        "{}  {} : {}  {}",
        "Time A".with(Color::Red).bold(),
        scores.get(Side::A),
        scores.get(Side::B),
        "Time B".with(Color::Blue).bold()
    )
}
