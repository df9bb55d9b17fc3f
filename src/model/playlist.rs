use serde::{Deserialize, Serialize};

/// A named, ordered playlist of video ids without duplicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, as first supplied
    pub name: String,

    /// Video ids in insertion order
    videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Append a video; returns false if it is already a member
    pub fn add(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.videos.push(video_id.to_string());
        true
    }

    /// Remove a video; returns false if it was not a member
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Video ids in playlist order
    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }

    fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// All playlists, unique by case-insensitive name and kept sorted by it
#[derive(Debug, Clone, Default)]
pub struct Playlists {
    playlists: Vec<Playlist>,
}

impl Playlists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist; returns false if the name is taken
    pub fn create(&mut self, name: &str) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        let playlist = Playlist::new(name);
        let key = playlist.sort_key();
        let index = self
            .playlists
            .partition_point(|existing| existing.sort_key() < key);
        self.playlists.insert(index, playlist);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.is_named(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.is_named(name))
    }

    /// Delete a playlist; returns the removed playlist if it existed
    pub fn delete(&mut self, name: &str) -> Option<Playlist> {
        let index = self.playlists.iter().position(|p| p.is_named(name))?;
        Some(self.playlists.remove(index))
    }

    /// Playlists sorted by name, case-insensitive
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut playlist = Playlist::new("My Playlist");
        assert!(playlist.add("b"));
        assert!(playlist.add("a"));
        assert_eq!(playlist.videos(), ["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("My Playlist");
        assert!(playlist.add("a"));
        assert!(!playlist.add("a"));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut playlist = Playlist::new("My Playlist");
        playlist.add("a");
        playlist.add("b");

        assert!(playlist.remove("a"));
        assert!(!playlist.remove("a"));
        assert!(!playlist.contains("a"));
        assert_eq!(playlist.len(), 1);

        playlist.clear();
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut playlists = Playlists::new();
        assert!(playlists.create("My_Playlist"));
        assert!(!playlists.create("my_PLAYLIST"));
        assert_eq!(playlists.len(), 1);

        let playlist = playlists.get("MY_playlist").unwrap();
        assert_eq!(playlist.name, "My_Playlist");
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let mut playlists = Playlists::new();
        playlists.create("beta");
        playlists.create("Gamma");
        playlists.create("Alpha");

        let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_delete() {
        let mut playlists = Playlists::new();
        playlists.create("Foo");
        assert!(playlists.delete("FOO").is_some());
        assert!(playlists.delete("foo").is_none());
        assert!(playlists.is_empty());
    }
}
