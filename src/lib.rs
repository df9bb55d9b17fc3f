//! Video Player - single-user video catalog player
//!
//! This library models a video catalog with moderation flags, a single
//! play/pause/stop slot, and named playlists, driven by text commands.

pub mod library;
pub mod model;
pub mod player;
pub mod shell;

pub use player::config::PlayerConfig;
pub use player::VideoPlayer;
pub use shell::Shell;
