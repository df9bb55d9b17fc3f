//! Successful command outcomes

use std::fmt;

/// What a successful command did, rendered as the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    VideoCount(usize),

    /// Rendered videos, sorted by title
    AllVideos(Vec<String>),

    Playing { title: String },
    Stopped { title: String },
    Paused { title: String },
    AlreadyPaused { title: String },
    Continued { title: String },

    /// Rendered current video
    NowPlaying { info: String, paused: bool },
    NothingPlaying,

    PlaylistCreated { name: String },
    AddedToPlaylist { playlist: String, title: String },
    RemovedFromPlaylist { playlist: String, title: String },
    PlaylistCleared { playlist: String },
    PlaylistDeleted { playlist: String },

    NoPlaylists,
    /// Playlist names in display order
    AllPlaylists(Vec<String>),
    /// Rendered member videos in playlist order
    Playlist { name: String, videos: Vec<String> },

    /// `stopped` is set when the flagged video had to be stopped first
    Flagged {
        title: String,
        reason: String,
        stopped: Option<String>,
    },
    Allowed { title: String },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::VideoCount(count) => write!(f, "{} videos in the library", count),
            Report::AllVideos(videos) => {
                write!(f, "Here's a list of all available videos:")?;
                for video in videos {
                    write!(f, "\n{}", video)?;
                }
                Ok(())
            }

            Report::Playing { title } => write!(f, "Playing video: {}", title),
            Report::Stopped { title } => write!(f, "Stopping video: {}", title),
            Report::Paused { title } => write!(f, "Pausing video: {}", title),
            Report::AlreadyPaused { title } => write!(f, "Video already paused: {}", title),
            Report::Continued { title } => write!(f, "Continuing video: {}", title),

            Report::NowPlaying { info, paused } => {
                write!(f, "Currently playing: {}", info)?;
                if *paused {
                    write!(f, " - PAUSED")?;
                }
                Ok(())
            }
            Report::NothingPlaying => write!(f, "No video is currently playing"),

            Report::PlaylistCreated { name } => {
                write!(f, "Successfully created new playlist: {}", name)
            }
            Report::AddedToPlaylist { playlist, title } => {
                write!(f, "Added video to {}: {}", playlist, title)
            }
            Report::RemovedFromPlaylist { playlist, title } => {
                write!(f, "Removed video from {}: {}", playlist, title)
            }
            Report::PlaylistCleared { playlist } => {
                write!(f, "Successfully removed all videos from {}", playlist)
            }
            Report::PlaylistDeleted { playlist } => write!(f, "Deleted playlist: {}", playlist),

            Report::NoPlaylists => write!(f, "No playlists exist yet"),
            Report::AllPlaylists(names) => {
                write!(f, "Showing all playlists:")?;
                for name in names {
                    write!(f, "\n{}", name)?;
                }
                Ok(())
            }
            Report::Playlist { name, videos } => {
                write!(f, "Showing playlist: {}", name)?;
                if videos.is_empty() {
                    return write!(f, "\nNo videos here yet");
                }
                for video in videos {
                    write!(f, "\n{}", video)?;
                }
                Ok(())
            }

            Report::Flagged {
                title,
                reason,
                stopped,
            } => {
                if let Some(stopped) = stopped {
                    writeln!(f, "Stopping video: {}", stopped)?;
                }
                write!(f, "Successfully flagged video: {} (reason: {})", title, reason)
            }
            Report::Allowed { title } => {
                write!(f, "Successfully removed flag from video: {}", title)
            }
        }
    }
}
