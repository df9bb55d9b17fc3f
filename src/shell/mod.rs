//! Line-oriented command interface over the player
//!
//! One command per line in, one report out. Searches read a second line
//! holding the number of the video to play.

mod command;
mod session;

pub use command::{Command, ParseError, HELP};
pub use session::Shell;
