//! Shared test utilities for the knight-gal test suite.
//!
//! Builders for small hand-made photo sets and extractors that turn results
//! into id lists, so assertions read as `assert_eq!(ids(&result), vec!["A", "B"])`.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let photos = vec![
//!     photo("A", "Alpha", Category::Workshops, &["ctf"]),
//!     photo("B", "Bravo", Category::Events, &["ctf"]),
//! ];
//! let refs = refs(&photos);
//! ```

use chrono::NaiveDate;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Category, Photo};

// =========================================================================
// Builders
// =========================================================================

/// A photo with an empty description and a fixed date.
pub fn photo(id: &str, title: &str, category: Category, tags: &[&str]) -> Photo {
    Photo {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        image_url: format!("https://img.example/{id}.jpg"),
        category,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn with_description(mut photo: Photo, description: &str) -> Photo {
    photo.description = description.to_string();
    photo
}

/// `n` photos with ids `"0"..n`, all in the events category.
pub fn numbered(n: usize) -> Vec<Photo> {
    (0..n)
        .map(|i| photo(&i.to_string(), &format!("Photo {i}"), Category::Events, &[]))
        .collect()
}

// =========================================================================
// Extractors
// =========================================================================

pub fn refs(photos: &[Photo]) -> Vec<&Photo> {
    photos.iter().collect()
}

/// Ids of a result sequence, in order.
pub fn ids<'a>(photos: &[&'a Photo]) -> Vec<&'a str> {
    photos.iter().map(|p| p.id.as_str()).collect()
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// A temp content directory holding `config.toml` and/or `photos.toml`.
pub fn content_dir(config: Option<&str>, photos: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    if let Some(config) = config {
        std::fs::write(tmp.path().join("config.toml"), config).unwrap();
    }
    if let Some(photos) = photos {
        std::fs::write(tmp.path().join("photos.toml"), photos).unwrap();
    }
    tmp
}

/// Read a generated file, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
