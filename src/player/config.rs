//! Player configuration

use std::path::PathBuf;

/// Configuration for building a [`VideoPlayer`](super::VideoPlayer)
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Catalog file to load (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Seed for PLAY_RANDOM (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a configuration using the bundled catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a file
    pub fn with_catalog_path(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
