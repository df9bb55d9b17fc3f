//! Search results and the follow-up selection

use std::fmt;

/// A visible video that matched a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub id: String,

    /// Rendered video, as in the full listing
    pub info: String,
}

/// Matches for one search, sorted by title and numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// The term or tag as typed
    pub query: String,
    pub matches: Vec<SearchMatch>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Resolve a follow-up answer to the ID of the chosen video
    ///
    /// Anything that is not a number in `1..=len` is a decline.
    pub fn selection(&self, input: &str) -> Option<&str> {
        let number: usize = input.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        self.matches.get(index).map(|m| m.id.as_str())
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return write!(f, "No search results for {}", self.query);
        }

        write!(f, "Here are the results for {}:", self.query)?;
        for (number, entry) in self.matches.iter().enumerate() {
            write!(f, "\n{}) {}", number + 1, entry.info)?;
        }
        write!(
            f,
            "\nWould you like to play any of the above? If yes, specify the number of the video."
        )?;
        write!(
            f,
            "\nIf your answer is not a valid number, we will assume it's a no."
        )
    }
}
