use super::Video;
use std::collections::HashMap;

/// Lookup contract the player needs from a video source
///
/// Videos are read-only apart from their flag, which the player mutates
/// through [`VideoCatalog::video_mut`].
pub trait VideoCatalog {
    /// All videos in a stable (not necessarily sorted) order
    fn videos(&self) -> &[Video];

    /// Get a video by ID
    fn video(&self, id: &str) -> Option<&Video>;

    /// Get a video by ID for flag updates
    fn video_mut(&mut self, id: &str) -> Option<&mut Video>;

    /// Number of videos in the catalog
    fn len(&self) -> usize {
        self.videos().len()
    }

    fn is_empty(&self) -> bool {
        self.videos().is_empty()
    }
}

/// In-memory video catalog, keeping the order videos were added in
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All videos in load order
    videos: Vec<Video>,

    /// Position of each video in `videos`, by ID
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video, replacing any earlier video with the same ID in place
    ///
    /// Returns the replaced video, if any.
    pub fn add_video(&mut self, video: Video) -> Option<Video> {
        match self.index.get(&video.id) {
            Some(&position) => Some(std::mem::replace(&mut self.videos[position], video)),
            None => {
                self.index.insert(video.id.clone(), self.videos.len());
                self.videos.push(video);
                None
            }
        }
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}

impl VideoCatalog for Catalog {
    fn videos(&self) -> &[Video] {
        &self.videos
    }

    fn video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    fn video_mut(&mut self, id: &str) -> Option<&mut Video> {
        let position = *self.index.get(id)?;
        self.videos.get_mut(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "Test Video", vec!["#test".to_string()]));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.video("v1").is_some());
        assert_eq!(catalog.video("v1").unwrap().title, "Test Video");
        assert!(catalog.video("missing").is_none());
    }

    #[test]
    fn test_keeps_load_order() {
        let catalog: Catalog = ["z", "a", "m"]
            .into_iter()
            .map(|id| Video::new(id, id.to_uppercase(), Vec::new()))
            .collect();

        let ids: Vec<&str> = catalog.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "First", Vec::new()));
        catalog.add_video(Video::new("v2", "Second", Vec::new()));

        let replaced = catalog.add_video(Video::new("v1", "Replacement", Vec::new()));

        assert_eq!(replaced.unwrap().title, "First");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.videos()[0].title, "Replacement");
    }

    #[test]
    fn test_flag_through_video_mut() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "Test Video", Vec::new()));

        catalog.video_mut("v1").unwrap().flag.set_flag(true);
        assert!(catalog.video("v1").unwrap().is_flagged());
    }
}
