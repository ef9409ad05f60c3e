use std::fmt::Write;

use crate::assign::TeamAssignment;
use crate::palette::team_emoji;


pub const EXPORT_HEADER: &str = "🚨 *TIMES SORTEADOS!* 🚨";
pub const EXPORT_SIGNATURE: &str = "By Marquinhos & Luquinhas App ©";

// Renders teams as a message ready to be pasted into a chat.
pub fn export_teams(teams: &TeamAssignment) -> String {
    let mut text = format!("{EXPORT_HEADER}\n\n");
    for (team_idx, team) in teams.teams().iter().enumerate() {
        let number = team_idx + 1;
        // Writing to a `String` is infallible.
        let _ = match team_emoji(team_idx) {
            Some(emoji) => writeln!(text, "{emoji} *Time {number}:*"),
            None => writeln!(text, "*Time {number}:*"),
        };
        for player in team {
            let _ = writeln!(text, "- {} {}", player.name, player.gender.symbol());
        }
        text.push('\n');
    }
    text.push_str("\n\n");
    text.push_str(EXPORT_SIGNATURE);
    text
}
