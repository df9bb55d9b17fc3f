//! Interactive command loop

use super::command::{Command, HELP};
use crate::model::VideoCatalog;
use crate::player::{CommandResult, SearchResults, VideoPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const WELCOME: &str = "Hello and welcome to the video player, what would you like to do? \
Enter HELP for list of available commands or EXIT to terminate.";

const GOODBYE: &str = "The video player has now terminated its execution. Thank you and goodbye!";

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads commands line by line and writes one report per command
pub struct Shell<C: VideoCatalog, R: BufRead, W: Write> {
    player: VideoPlayer<C>,
    input: R,
    output: W,
    prompt: Option<String>,
}

impl<C: VideoCatalog, R: BufRead, W: Write> Shell<C, R, W> {
    pub fn new(player: VideoPlayer<C>, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each command
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn player(&self) -> &VideoPlayer<C> {
        &self.player
    }

    /// Give back the player and the output sink
    pub fn into_parts(self) -> (VideoPlayer<C>, W) {
        (self.player, self.output)
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", WELCOME)?;

        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                log::debug!("End of input");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    log::debug!("Command: {:?}", command);
                    if self.execute(command)? == Flow::Exit {
                        break;
                    }
                }
                Err(err) => {
                    log::debug!("Rejected input {:?}", line);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }

        writeln!(self.output, "{}", GOODBYE)?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read command input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        let player = &mut self.player;
        let outcome: CommandResult = match command {
            Command::NumberOfVideos => Ok(player.count_videos()),
            Command::ShowAllVideos => Ok(player.list_all_videos()),
            Command::Play(id) => player.play(&id),
            Command::PlayRandom => player.play_random(),
            Command::Stop => player.stop(),
            Command::Pause => player.pause(),
            Command::Continue => player.continue_video(),
            Command::ShowPlaying => Ok(player.show_playing()),
            Command::CreatePlaylist(name) => player.create_playlist(&name),
            Command::AddToPlaylist { playlist, video_id } => {
                player.add_to_playlist(&playlist, &video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                player.remove_from_playlist(&playlist, &video_id)
            }
            Command::ClearPlaylist(name) => player.clear_playlist(&name),
            Command::DeletePlaylist(name) => player.delete_playlist(&name),
            Command::ShowPlaylist(name) => player.show_playlist(&name),
            Command::ShowAllPlaylists => Ok(player.show_all_playlists()),
            Command::SearchVideos(term) => {
                let results = player.search(&term);
                self.offer_selection(results)?;
                return Ok(Flow::Continue);
            }
            Command::SearchVideosWithTag(tag) => {
                let results = player.search_by_tag(&tag);
                self.offer_selection(results)?;
                return Ok(Flow::Continue);
            }
            Command::FlagVideo { video_id, reason } => {
                player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo(id) => player.allow_video(&id),
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Exit => return Ok(Flow::Exit),
        };

        self.write_outcome(outcome)?;
        Ok(Flow::Continue)
    }

    /// List search results and play the video picked on the next line
    fn offer_selection(&mut self, results: SearchResults) -> Result<()> {
        writeln!(self.output, "{}", results)?;
        if results.is_empty() {
            return Ok(());
        }
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        match self.player.play_selection(&results, &answer) {
            Some(outcome) => self.write_outcome(outcome),
            None => {
                log::debug!("No selection from {:?}", answer);
                Ok(())
            }
        }
    }

    fn write_outcome(&mut self, outcome: CommandResult) -> Result<()> {
        match outcome {
            Ok(report) => writeln!(self.output, "{}", report)?,
            Err(err) => {
                log::debug!("Command failed: {:?}", err);
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::bundled_catalog;
    use crate::player::PlaybackState;
    use std::io::Cursor;

    fn transcript(script: &str) -> Vec<String> {
        let player = VideoPlayer::with_seed(bundled_catalog().unwrap(), 3);
        let mut shell = Shell::new(player, Cursor::new(script.to_string()), Vec::new());
        shell.run().unwrap();

        let (_, output) = shell.into_parts();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_welcome_and_goodbye() {
        let lines = transcript("EXIT\nPLAY amazing_cats_video_id\n");
        assert_eq!(lines, vec![WELCOME, GOODBYE]);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let lines = transcript("NUMBER_OF_VIDEOS\n");
        assert_eq!(lines, vec![WELCOME, "5 videos in the library", GOODBYE]);
    }

    #[test]
    fn test_blank_and_invalid_lines() {
        let lines = transcript("\n   \nDANCE\nPLAY\n");
        assert_eq!(
            &lines[1..3],
            [
                "Please enter a valid command, type HELP for a list of available commands.",
                "Please enter PLAY command followed by video_id.",
            ]
        );
    }

    #[test]
    fn test_search_selection_plays() {
        let lines = transcript("SEARCH_VIDEOS cat\n2\nSHOW_PLAYING\n");
        assert!(lines.contains(
            &"1) Amazing Cats (amazing_cats_video_id) [#cat #animal]".to_string()
        ));
        assert!(lines.contains(&"Playing video: Another Cat Video".to_string()));
        assert!(lines.contains(
            &"Currently playing: Another Cat Video (another_cat_video_id) [#cat #animal]".to_string()
        ));
    }

    #[test]
    fn test_search_decline() {
        let lines = transcript("SEARCH_VIDEOS_WITH_TAG #cat\nno\nSHOW_PLAYING\n");
        assert!(!lines.iter().any(|line| line.starts_with("Playing video")));
        assert!(lines.contains(&"No video is currently playing".to_string()));
    }

    #[test]
    fn test_search_without_results_does_not_consume_next_line() {
        let lines = transcript("SEARCH_VIDEOS blah\nNUMBER_OF_VIDEOS\n");
        assert_eq!(
            &lines[1..3],
            ["No search results for blah", "5 videos in the library"]
        );
    }

    #[test]
    fn test_prompt() {
        let player = VideoPlayer::with_seed(bundled_catalog().unwrap(), 3);
        let mut shell =
            Shell::new(player, Cursor::new("STOP\n".to_string()), Vec::new()).with_prompt("> ");
        shell.run().unwrap();

        let (_, output) = shell.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("> Cannot stop video: No video is currently playing\n"));
    }

    #[test]
    fn test_help() {
        let lines = transcript("HELP\n");
        assert_eq!(lines[1], "Available commands:");
        assert_eq!(lines.len(), HELP.lines().count() + 2);
        assert_eq!(lines.last().unwrap(), GOODBYE);
    }

    #[test]
    fn test_player_state_survives_session() {
        let player = VideoPlayer::with_seed(bundled_catalog().unwrap(), 3);
        let script = "PLAY funny_dogs_video_id\nPAUSE\nCREATE_PLAYLIST mix\n";
        let mut shell = Shell::new(player, Cursor::new(script.to_string()), Vec::new());
        shell.run().unwrap();

        let player = shell.player();
        assert_eq!(player.playback().state(), PlaybackState::Paused);
        assert_eq!(player.playback().current(), Some("funny_dogs_video_id"));
        assert!(player.playlists().get("MIX").is_some());
    }
}
