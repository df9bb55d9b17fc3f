use serde::{Deserialize, Serialize};

/// Reason reported for a flag raised without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Moderation marker attached to a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    flagged: bool,
    reason: String,
}

impl Flag {
    /// Create an unflagged marker
    pub fn new() -> Self {
        Self {
            flagged: false,
            reason: DEFAULT_FLAG_REASON.to_string(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn set_flag(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    /// Reset to the unflagged state with the default reason
    pub fn clear(&mut self) {
        self.flagged = false;
        self.reason = DEFAULT_FLAG_REASON.to_string();
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}
