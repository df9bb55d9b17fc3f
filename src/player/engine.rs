//! The video player: catalog queries, playback, playlists and moderation

use super::config::PlayerConfig;
use super::error::{Action, CommandError, Failure};
use super::report::Report;
use super::search::{SearchMatch, SearchResults};
use super::state::{Effect, Playback, Transition};
use crate::library;
use crate::model::{sort_by_title, Catalog, Playlists, Video, VideoCatalog, DEFAULT_FLAG_REASON};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Outcome of a single player command
pub type CommandResult = std::result::Result<Report, CommandError>;

/// Single-user video player over a catalog
///
/// Every command runs to completion and either applies fully or returns a
/// [`CommandError`] leaving the player untouched.
#[derive(Debug)]
pub struct VideoPlayer<C: VideoCatalog = Catalog> {
    catalog: C,
    playback: Playback,
    playlists: Playlists,
    rng: StdRng,
}

impl VideoPlayer<Catalog> {
    /// Build a player from configuration, loading its catalog
    pub fn from_config(config: &PlayerConfig) -> Result<Self> {
        let catalog = library::load_catalog(config.catalog_path.as_deref())?;

        let player = match config.seed {
            Some(seed) => Self::with_seed(catalog, seed),
            None => Self::new(catalog),
        };
        Ok(player)
    }
}

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Create a player with an OS-seeded random source
    pub fn new(catalog: C) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a player whose random selection is reproducible
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: C, rng: StdRng) -> Self {
        Self {
            catalog,
            playback: Playback::default(),
            playlists: Playlists::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playlists(&self) -> &Playlists {
        &self.playlists
    }

    // --- Catalog queries ---

    pub fn count_videos(&self) -> Report {
        Report::VideoCount(self.catalog.len())
    }

    /// All videos, flagged ones included, sorted by title
    pub fn list_all_videos(&self) -> Report {
        let mut videos: Vec<&Video> = self.catalog.videos().iter().collect();
        sort_by_title(&mut videos);
        Report::AllVideos(videos.iter().map(|v| v.to_string()).collect())
    }

    /// Visible videos whose title contains `term`, ignoring case
    pub fn search(&self, term: &str) -> SearchResults {
        self.search_where(term, |video| video.title_contains(term))
    }

    /// Visible videos carrying `tag`, ignoring case
    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        self.search_where(tag, |video| video.has_tag(tag))
    }

    fn search_where(&self, query: &str, predicate: impl Fn(&Video) -> bool) -> SearchResults {
        let mut matches: Vec<&Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|video| !video.is_flagged() && predicate(*video))
            .collect();
        sort_by_title(&mut matches);

        log::debug!("Search {:?}: {} visible matches", query, matches.len());

        SearchResults {
            query: query.to_string(),
            matches: matches
                .into_iter()
                .map(|video| SearchMatch {
                    id: video.id.clone(),
                    info: video.to_string(),
                })
                .collect(),
        }
    }

    /// Play the video picked from `results`
    ///
    /// Returns None when `input` declines (not a listed number).
    pub fn play_selection(
        &mut self,
        results: &SearchResults,
        input: &str,
    ) -> Option<CommandResult> {
        let id = results.selection(input)?.to_string();
        Some(self.play(&id))
    }

    // --- Playback ---

    /// Play a video, implicitly stopping whatever is current
    pub fn play(&mut self, id: &str) -> CommandResult {
        let video = self
            .catalog
            .video(id)
            .ok_or_else(|| CommandError::new(Action::Play, Failure::VideoNotFound))?;

        if video.is_flagged() {
            return Err(CommandError::new(
                Action::Play,
                Failure::VideoFlagged(video.flag.reason().to_string()),
            ));
        }

        let effect = self.transition(Action::Play, Transition::Play(id.to_string()))?;
        if let Effect::Started {
            replaced: Some(previous),
            ..
        } = &effect
        {
            log::debug!("Implicitly stopped {:?}", previous);
        }
        Ok(self.effect_report(effect))
    }

    pub fn stop(&mut self) -> CommandResult {
        let effect = self.transition(Action::Stop, Transition::Stop)?;
        Ok(self.effect_report(effect))
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> CommandResult {
        let candidates: Vec<&Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|video| !video.is_flagged())
            .collect();

        let id = candidates
            .choose(&mut self.rng)
            .map(|video| video.id.clone())
            .ok_or(CommandError::NoVideosAvailable)?;

        log::debug!("Random pick {:?} out of {}", id, candidates.len());
        self.play(&id)
    }

    pub fn pause(&mut self) -> CommandResult {
        let effect = self.transition(Action::Pause, Transition::Pause)?;
        Ok(self.effect_report(effect))
    }

    pub fn continue_video(&mut self) -> CommandResult {
        let effect = self.transition(Action::Continue, Transition::Continue)?;
        Ok(self.effect_report(effect))
    }

    pub fn show_playing(&self) -> Report {
        let current = self
            .playback
            .current()
            .and_then(|id| self.catalog.video(id));

        match current {
            Some(video) => Report::NowPlaying {
                info: video.to_string(),
                paused: matches!(self.playback, Playback::Paused(_)),
            },
            None => Report::NothingPlaying,
        }
    }

    fn transition(&mut self, action: Action, transition: Transition) -> Result<Effect, CommandError> {
        let (next, effect) = self
            .playback
            .apply(transition)
            .map_err(|err| CommandError::new(action, err.into()))?;

        log::debug!("Playback {:?} -> {:?}", self.playback.state(), next.state());
        self.playback = next;
        Ok(effect)
    }

    fn effect_report(&self, effect: Effect) -> Report {
        match effect {
            Effect::Started { id, .. } => Report::Playing {
                title: self.title_of(&id),
            },
            Effect::Stopped { id } => Report::Stopped {
                title: self.title_of(&id),
            },
            Effect::Paused { id } => Report::Paused {
                title: self.title_of(&id),
            },
            Effect::AlreadyPaused { id } => Report::AlreadyPaused {
                title: self.title_of(&id),
            },
            Effect::Resumed { id } => Report::Continued {
                title: self.title_of(&id),
            },
        }
    }

    fn title_of(&self, id: &str) -> String {
        self.catalog
            .video(id)
            .map(|video| video.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    // --- Playlists ---

    pub fn create_playlist(&mut self, name: &str) -> CommandResult {
        if !self.playlists.create(name) {
            return Err(CommandError::new(
                Action::CreatePlaylist,
                Failure::PlaylistExists,
            ));
        }

        log::debug!("Created playlist {:?}", name);
        Ok(Report::PlaylistCreated {
            name: name.to_string(),
        })
    }

    /// Append a visible video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> CommandResult {
        let reject = |reason| CommandError::new(Action::AddToPlaylist(name.to_string()), reason);

        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| reject(Failure::PlaylistNotFound))?;
        let video = self
            .catalog
            .video(id)
            .ok_or_else(|| reject(Failure::VideoNotFound))?;

        if video.is_flagged() {
            return Err(reject(Failure::VideoFlagged(
                video.flag.reason().to_string(),
            )));
        }
        if !playlist.add(id) {
            return Err(reject(Failure::AlreadyInPlaylist));
        }

        log::debug!("Playlist {:?} now has {} videos", playlist.name, playlist.len());
        Ok(Report::AddedToPlaylist {
            playlist: name.to_string(),
            title: video.title.clone(),
        })
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> CommandResult {
        let reject =
            |reason| CommandError::new(Action::RemoveFromPlaylist(name.to_string()), reason);

        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| reject(Failure::PlaylistNotFound))?;
        let video = self
            .catalog
            .video(id)
            .ok_or_else(|| reject(Failure::VideoNotFound))?;

        if !playlist.remove(id) {
            return Err(reject(Failure::NotInPlaylist));
        }

        Ok(Report::RemovedFromPlaylist {
            playlist: name.to_string(),
            title: video.title.clone(),
        })
    }

    pub fn clear_playlist(&mut self, name: &str) -> CommandResult {
        let playlist = self.playlists.get_mut(name).ok_or_else(|| {
            CommandError::new(
                Action::ClearPlaylist(name.to_string()),
                Failure::PlaylistNotFound,
            )
        })?;

        playlist.clear();
        Ok(Report::PlaylistCleared {
            playlist: name.to_string(),
        })
    }

    pub fn delete_playlist(&mut self, name: &str) -> CommandResult {
        let deleted = self.playlists.delete(name).ok_or_else(|| {
            CommandError::new(
                Action::DeletePlaylist(name.to_string()),
                Failure::PlaylistNotFound,
            )
        })?;

        log::debug!("Deleted playlist {:?} ({} videos)", deleted.name, deleted.len());
        Ok(Report::PlaylistDeleted {
            playlist: name.to_string(),
        })
    }

    pub fn show_all_playlists(&self) -> Report {
        if self.playlists.is_empty() {
            return Report::NoPlaylists;
        }
        Report::AllPlaylists(self.playlists.iter().map(|p| p.name.clone()).collect())
    }

    /// Members of a playlist in playlist order, flagged ones marked
    pub fn show_playlist(&self, name: &str) -> CommandResult {
        let playlist = self.playlists.get(name).ok_or_else(|| {
            CommandError::new(
                Action::ShowPlaylist(name.to_string()),
                Failure::PlaylistNotFound,
            )
        })?;

        let videos = playlist
            .videos()
            .iter()
            .filter_map(|id| self.catalog.video(id))
            .map(|video| video.to_string())
            .collect();

        Ok(Report::Playlist {
            name: name.to_string(),
            videos,
        })
    }

    // --- Moderation ---

    /// Flag a video, stopping it first if it is current
    pub fn flag_video(&mut self, id: &str, reason: Option<&str>) -> CommandResult {
        let reject = |reason| CommandError::new(Action::Flag, reason);

        let video = self
            .catalog
            .video(id)
            .ok_or_else(|| reject(Failure::VideoNotFound))?;
        if video.is_flagged() {
            return Err(reject(Failure::AlreadyFlagged));
        }
        let title = video.title.clone();

        let stopped = if self.playback.is_current(id) {
            self.transition(Action::Flag, Transition::Stop)?;
            Some(title.clone())
        } else {
            None
        };

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);
        let video = self
            .catalog
            .video_mut(id)
            .ok_or_else(|| reject(Failure::VideoNotFound))?;
        video.flag.set_flag(true);
        video.flag.set_reason(reason);

        log::info!("Flagged {:?} (reason: {})", id, reason);
        Ok(Report::Flagged {
            title,
            reason: reason.to_string(),
            stopped,
        })
    }

    /// Clear a video's flag and reset its reason
    pub fn allow_video(&mut self, id: &str) -> CommandResult {
        let reject = |reason| CommandError::new(Action::Allow, reason);

        let video = self
            .catalog
            .video_mut(id)
            .ok_or_else(|| reject(Failure::VideoNotFound))?;
        if !video.is_flagged() {
            return Err(reject(Failure::NotFlagged));
        }

        video.flag.clear();
        log::info!("Removed flag from {:?}", id);
        Ok(Report::Allowed {
            title: video.title.clone(),
        })
    }
}
