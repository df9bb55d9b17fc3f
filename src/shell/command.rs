//! Text command parsing

use std::str::FromStr;
use thiserror::Error;

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    /// The reason is every word after the video ID
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter {command} command followed by {arguments}.")]
    MissingArguments {
        command: &'static str,
        arguments: &'static str,
    },

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),
}

pub const HELP: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_uppercase();
        let args: Vec<&str> = words.collect();

        let missing = |command: &'static str, arguments: &'static str| {
            ParseError::MissingArguments { command, arguments }
        };
        let one = |command, arguments| -> Result<String, ParseError> {
            args.first()
                .map(|arg| arg.to_string())
                .ok_or_else(|| missing(command, arguments))
        };
        let two = |command, arguments| -> Result<(String, String), ParseError> {
            match args.as_slice() {
                [first, second, ..] => Ok((first.to_string(), second.to_string())),
                _ => Err(missing(command, arguments)),
            }
        };

        let command = match name.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(one("PLAY", "video_id")?),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(one("CREATE_PLAYLIST", "a playlist name")?)
            }
            "ADD_TO_PLAYLIST" => {
                let (playlist, video_id) = two(
                    "ADD_TO_PLAYLIST",
                    "a playlist name and video_id to add",
                )?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let (playlist, video_id) = two(
                    "REMOVE_FROM_PLAYLIST",
                    "a playlist name and video_id to remove",
                )?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(one("CLEAR_PLAYLIST", "a playlist name")?),
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(one("DELETE_PLAYLIST", "a playlist name")?)
            }
            "SHOW_PLAYLIST" => Command::ShowPlaylist(one("SHOW_PLAYLIST", "a playlist name")?),
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos(one("SEARCH_VIDEOS", "a search term")?),
            "SEARCH_VIDEOS_WITH_TAG" => {
                Command::SearchVideosWithTag(one("SEARCH_VIDEOS_WITH_TAG", "a video tag")?)
            }
            "FLAG_VIDEO" => {
                let video_id = one("FLAG_VIDEO", "a video_id and an optional flag reason")?;
                let reason = (args.len() > 1).then(|| args[1..].join(" "));
                Command::FlagVideo { video_id, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo(one("ALLOW_VIDEO", "a video_id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::Unknown(line.trim().to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!("play_random".parse::<Command>(), Ok(Command::PlayRandom));
        assert_eq!(
            "Play amazing_cats_video_id".parse::<Command>(),
            Ok(Command::Play("amazing_cats_video_id".to_string()))
        );
    }

    #[test]
    fn test_arguments_keep_their_case() {
        assert_eq!(
            "ADD_TO_PLAYLIST My_Playlist v1".parse::<Command>(),
            Ok(Command::AddToPlaylist {
                playlist: "My_Playlist".to_string(),
                video_id: "v1".to_string()
            })
        );
    }

    #[test]
    fn test_flag_reason_is_optional_and_multi_word() {
        assert_eq!(
            "FLAG_VIDEO v1".parse::<Command>(),
            Ok(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: None
            })
        );
        assert_eq!(
            "FLAG_VIDEO v1 not family friendly".parse::<Command>(),
            Ok(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: Some("not family friendly".to_string())
            })
        );
    }

    #[test]
    fn test_missing_arguments() {
        let err = "ADD_TO_PLAYLIST mix".parse::<Command>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id to add."
        );

        let err = "PLAY".parse::<Command>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter PLAY command followed by video_id."
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = "DANCE now".parse::<Command>().unwrap_err();
        assert_eq!(err, ParseError::Unknown("DANCE now".to_string()));
    }
}
