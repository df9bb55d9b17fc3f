use super::Flag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in the order they were declared (e.g. "#cat")
    pub tags: Vec<String>,

    /// Moderation state, the only mutable part of a video
    #[serde(default)]
    pub flag: Flag,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: Flag::new(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_flagged()
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Renders `Title (id) [#tag1 #tag2]`, with a flag suffix when flagged
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if self.flag.is_flagged() {
            write!(f, " - FLAGGED (reason: {})", self.flag.reason())?;
        }
        Ok(())
    }
}

/// Sort videos by title using plain string ordering
pub fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title));
}
