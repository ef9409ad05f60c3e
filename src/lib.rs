#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod assign;
pub mod dirty;
pub mod drawer;
pub mod export;
pub mod palette;
pub mod persistence;
pub mod player;
pub mod roster;
pub mod scores;
pub mod session;
pub mod test_util;

pub use assign::{MAX_REPEATED_PLAYERS, TEAM_SIZE, Team, TeamAssignment, assign, assign_random};
pub use drawer::TeamDrawer;
pub use export::export_teams;
pub use palette::{PaletteColor, TeamColor};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, StoreKey};
pub use player::{Gender, Player, PlayerId};
pub use roster::{Composition, Roster, RosterError};
pub use scores::{Scores, Side};
pub use session::Session;
