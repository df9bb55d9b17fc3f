//! Catalog file (videos.txt) parser
//!
//! One video per line: `Title | video_id | #tag1 , #tag2`.
//! The tag field is optional.

use crate::model::{Catalog, Video, VideoCatalog};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors for catalog lines that cannot describe a video
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("line {line}: expected `title | video_id | tags`, got {content:?}")]
    MissingId { line: usize, content: String },

    #[error("line {line}: video title is empty")]
    EmptyTitle { line: usize },
}

/// Parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let catalog = parse_catalog(&contents)
        .with_context(|| format!("Failed to parse video catalog: {:?}", path))?;

    Ok(catalog)
}

/// Parse catalog text
pub fn parse_catalog(contents: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    for (index, raw) in contents.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        let video = parse_line(index + 1, raw)?;
        if let Some(previous) = catalog.add_video(video) {
            log::warn!(
                "Duplicate video id {:?} on line {}, replacing {:?}",
                previous.id,
                index + 1,
                previous.title
            );
        }
    }

    log::info!("Parsed {} videos from catalog", catalog.videos().len());
    Ok(catalog)
}

/// Parse a single non-blank catalog line
fn parse_line(line: usize, raw: &str) -> Result<Video, CatalogError> {
    let mut fields = raw.split('|').map(str::trim);

    // split always yields at least one field
    let title = fields.next().unwrap_or_default();
    let id = fields.next().unwrap_or_default();
    let tags = fields.next().unwrap_or_default();

    if id.is_empty() {
        return Err(CatalogError::MissingId {
            line,
            content: raw.to_string(),
        });
    }
    if title.is_empty() {
        return Err(CatalogError::EmptyTitle { line });
    }

    let tags = tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_tags() {
        let video = parse_line(1, "Funny Dogs | funny_dogs_video_id |  #dog , #animal").unwrap();
        assert_eq!(video.title, "Funny Dogs");
        assert_eq!(video.id, "funny_dogs_video_id");
        assert_eq!(video.tags, vec!["#dog", "#animal"]);
        assert!(!video.is_flagged());
    }

    #[test]
    fn test_parse_line_without_tags() {
        let video = parse_line(1, "Video about nothing | nothing_video_id |").unwrap();
        assert!(video.tags.is_empty());

        let video = parse_line(1, "Video about nothing | nothing_video_id").unwrap();
        assert!(video.tags.is_empty());
    }

    #[test]
    fn test_missing_id_reports_line() {
        let err = parse_catalog("Good | good_id | #a\n\nJust a title\n").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingId {
                line: 3,
                content: "Just a title".to_string()
            }
        );
    }

    #[test]
    fn test_empty_title() {
        let err = parse_catalog(" | some_id | #a").unwrap_err();
        assert_eq!(err, CatalogError::EmptyTitle { line: 1 });
    }

    #[test]
    fn test_blank_lines_skipped() {
        let catalog = parse_catalog("\nA | a |\n   \nB | b | #b\n").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_id_keeps_latest() {
        let catalog = parse_catalog("Old | dup |\nNew | dup | #x\n").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.video("dup").unwrap().title, "New");
    }
}
