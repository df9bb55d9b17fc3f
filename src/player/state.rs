//! Playback state machine
//!
//! The single playback slot is a value; every command that touches it is a
//! pure transition from one [`Playback`] to the next.

use thiserror::Error;

/// Coarse playback state, for callers that only need the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// The playback slot. A video ID is present exactly when not stopped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

/// Commands that move the playback slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Start a video, replacing whatever is current
    Play(String),
    Stop,
    Pause,
    Continue,
}

/// What a successful transition did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `replaced` is the video that was playing or paused before, if any
    Started { id: String, replaced: Option<String> },
    Stopped { id: String },
    Paused { id: String },
    /// Pause on an already paused video; the state is unchanged
    AlreadyPaused { id: String },
    Resumed { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,
}

impl Playback {
    pub fn state(&self) -> PlaybackState {
        match self {
            Playback::Stopped => PlaybackState::Stopped,
            Playback::Playing(_) => PlaybackState::Playing,
            Playback::Paused(_) => PlaybackState::Paused,
        }
    }

    /// ID of the playing or paused video
    pub fn current(&self) -> Option<&str> {
        match self {
            Playback::Stopped => None,
            Playback::Playing(id) | Playback::Paused(id) => Some(id),
        }
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current() == Some(id)
    }

    /// Compute the state after `transition`, without touching `self`
    pub fn apply(&self, transition: Transition) -> Result<(Playback, Effect), TransitionError> {
        match (self, transition) {
            (_, Transition::Play(id)) => {
                let replaced = self.current().map(str::to_string);
                Ok((
                    Playback::Playing(id.clone()),
                    Effect::Started { id, replaced },
                ))
            }

            (Playback::Stopped, _) => Err(TransitionError::NothingPlaying),

            (Playback::Playing(id) | Playback::Paused(id), Transition::Stop) => {
                Ok((Playback::Stopped, Effect::Stopped { id: id.clone() }))
            }

            (Playback::Playing(id), Transition::Pause) => Ok((
                Playback::Paused(id.clone()),
                Effect::Paused { id: id.clone() },
            )),
            (Playback::Paused(id), Transition::Pause) => {
                Ok((self.clone(), Effect::AlreadyPaused { id: id.clone() }))
            }

            (Playback::Paused(id), Transition::Continue) => Ok((
                Playback::Playing(id.clone()),
                Effect::Resumed { id: id.clone() },
            )),
            (Playback::Playing(_), Transition::Continue) => Err(TransitionError::NotPaused),
        }
    }
}
