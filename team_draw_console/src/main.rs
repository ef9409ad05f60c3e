// Command-line front end: every invocation loads the saved state, applies one action and saves
// the result.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod commands;
mod console_config;
mod tui;

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command, arg};
use team_draw::{FileStore, Session};

use commands::ScoreAction;
use console_config::ConsoleConfig;


fn yes_arg() -> Arg {
    arg!(-y --yes "Don't ask for confirmation").action(ArgAction::SetTrue)
}

fn side_arg() -> Arg { arg!(<side> "Team: A or B").value_parser(["A", "B", "a", "b"]) }

fn cli() -> Command {
    Command::new("Team Draw")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Draws balanced teams for casual games and keeps the score")
        .subcommand_required(true)
        .arg(
            arg!(--"config" <file> "Path to the configuration file: yaml-serialized ConsoleConfig.")
                .global(true),
        )
        .arg(
            arg!(--"data-dir" <dir> "Directory with saved players, teams and scores.")
                .global(true),
        )
        .subcommand(
            Command::new("add")
                .about("Register a player")
                .arg(arg!(<name> "Player name"))
                .arg(
                    arg!(-g --gender <gender> "Player gender: M or F")
                        .value_parser(["M", "F", "m", "f"])
                        .default_value("M"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a player")
                .arg(arg!(<id> "Player id, as shown by `list`").value_parser(clap::value_parser!(u64))),
        )
        .subcommand(Command::new("list").about("Show registered players"))
        .subcommand(Command::new("reset").about("Remove all players and teams").arg(yes_arg()))
        .subcommand(Command::new("draw").about("Draw new teams").arg(yes_arg()))
        .subcommand(Command::new("teams").about("Show the current teams"))
        .subcommand(Command::new("export").about("Print the current teams as a shareable message"))
        .subcommand(
            Command::new("score")
                .about("Show or change the score")
                .subcommand(Command::new("show").about("Show the score"))
                .subcommand(Command::new("up").about("Add a point").arg(side_arg()))
                .subcommand(Command::new("down").about("Take a point away").arg(side_arg()))
                .subcommand(Command::new("reset").about("Set both scores to zero").arg(yes_arg())),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<ConsoleConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ConsoleConfig::read(Path::new(path))?,
        None => ConsoleConfig::default(),
    };
    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config.data_dir = PathBuf::from(dir);
    }
    Ok(config)
}

fn score_action(matches: &ArgMatches) -> anyhow::Result<(ScoreAction, bool)> {
    let side = |m: &ArgMatches| commands::parse_side(m.get_one::<String>("side").unwrap());
    Ok(match matches.subcommand() {
        None | Some(("show", _)) => (ScoreAction::Show, false),
        Some(("up", m)) => (ScoreAction::Up(side(m)?), false),
        Some(("down", m)) => (ScoreAction::Down(side(m)?), false),
        Some(("reset", m)) => (ScoreAction::Reset, m.get_flag("yes")),
        _ => unreachable!("Exhausted list of score subcommands"),
    })
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout is reserved for output that users may want to copy.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let mut rng = config.rng();
    let mut session = Session::load(FileStore::new(&config.data_dir));

    match matches.subcommand() {
        Some(("add", m)) => {
            let gender = commands::parse_gender(m.get_one::<String>("gender").unwrap())?;
            commands::add(&mut session, m.get_one::<String>("name").unwrap(), gender)
        }
        Some(("remove", m)) => commands::remove(&mut session, *m.get_one::<u64>("id").unwrap()),
        Some(("list", _)) => {
            commands::list(&session);
            Ok(())
        }
        Some(("reset", m)) => commands::reset(&mut session, m.get_flag("yes")),
        Some(("draw", m)) => commands::draw(&mut session, &mut rng, m.get_flag("yes")),
        Some(("teams", _)) => {
            commands::teams(&session, &mut rng);
            Ok(())
        }
        Some(("export", _)) => commands::export(&session),
        Some(("score", m)) => {
            let (action, skip_confirmation) = score_action(m)?;
            commands::score(&mut session, action, skip_confirmation)
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
