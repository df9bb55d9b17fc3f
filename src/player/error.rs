//! Command failure reporting

use super::state::TransitionError;
use std::fmt;
use thiserror::Error;

/// The command a failure belongs to, rendered after "Cannot "
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    Pause,
    Continue,
    Flag,
    Allow,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play => write!(f, "play video"),
            Action::Stop => write!(f, "stop video"),
            Action::Pause => write!(f, "pause video"),
            Action::Continue => write!(f, "continue video"),
            Action::Flag => write!(f, "flag video"),
            Action::Allow => write!(f, "remove flag from video"),
            Action::CreatePlaylist => write!(f, "create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {}", name),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {}", name),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {}", name),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {}", name),
            Action::ShowPlaylist(name) => write!(f, "show playlist {}", name),
        }
    }
}

/// Why a command was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

impl From<TransitionError> for Failure {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NothingPlaying => Failure::NothingPlaying,
            TransitionError::NotPaused => Failure::NotPaused,
        }
    }
}

/// A refused command. The player state is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Cannot {action}: {reason}")]
    Rejected { action: Action, reason: Failure },

    /// Every catalog video is flagged, or the catalog is empty
    #[error("No videos available")]
    NoVideosAvailable,
}

impl CommandError {
    pub fn new(action: Action, reason: Failure) -> Self {
        CommandError::Rejected { action, reason }
    }

    /// The refusal reason, if this is a plain rejection
    pub fn reason(&self) -> Option<&Failure> {
        match self {
            CommandError::Rejected { reason, .. } => Some(reason),
            CommandError::NoVideosAvailable => None,
        }
    }
}
