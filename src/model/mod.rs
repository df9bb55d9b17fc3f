//! Video catalog data model
//!
//! This module defines the catalog, its videos and their moderation
//! flags, and the playlists that reference videos by ID.

mod catalog;
mod flag;
mod playlist;
mod video;

pub use catalog::{Catalog, VideoCatalog};
pub use flag::{Flag, DEFAULT_FLAG_REASON};
pub use playlist::{Playlist, Playlists};
pub use video::{sort_by_title, Video};
