//! Player engine
//!
//! Owns the catalog, the single playback slot and the playlists, and
//! implements every user command on top of them.

pub mod config;
mod engine;
mod error;
mod report;
mod search;
pub mod state;

pub use config::PlayerConfig;
pub use engine::{CommandResult, VideoPlayer};
pub use error::{Action, CommandError, Failure};
pub use report::Report;
pub use search::{SearchMatch, SearchResults};
pub use state::{Playback, PlaybackState};
