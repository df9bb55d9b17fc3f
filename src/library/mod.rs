//! Video catalog loading
//!
//! Reads the `videos.txt` line format into a [`Catalog`], either from a
//! file on disk or from the catalog bundled with the binary.

mod parser;

pub use parser::{parse_catalog, parse_catalog_file, CatalogError};

use crate::model::{Catalog, VideoCatalog};
use anyhow::{Context, Result};
use std::path::Path;

/// Catalog shipped with the player
const BUNDLED_CATALOG: &str = include_str!("../../data/videos.txt");

/// Load the bundled catalog
pub fn bundled_catalog() -> Result<Catalog> {
    parse_catalog(BUNDLED_CATALOG).context("Bundled video catalog is malformed")
}

/// Load a catalog from `path`, or the bundled one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            log::info!("Loading video catalog from {:?}", path);
            parse_catalog_file(path)?
        }
        None => {
            log::info!("Loading bundled video catalog");
            bundled_catalog()?
        }
    };

    log::debug!("Catalog ready: {} videos", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog() {
        let catalog = bundled_catalog().unwrap();
        assert_eq!(catalog.len(), 5);

        let bootcamp = catalog.video("life_at_bootcamp_video_id").unwrap();
        assert_eq!(bootcamp.title, "Life at Bootcamp");
        assert_eq!(bootcamp.tags, vec!["#bootcamp", "#training", "#career"]);
    }

    #[test]
    fn test_load_catalog_defaults_to_bundled() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.video("amazing_cats_video_id").is_some());
    }
}
