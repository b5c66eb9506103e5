//! The photo store.
//!
//! A [`Catalog`] is the read-only, ordered list of photos every other module
//! works from. The club's own photos are compiled in ([`Catalog::builtin`]);
//! a content directory can replace them with a `photos.toml`:
//!
//! ```toml
//! [[photos]]
//! id = "1"
//! title = "Cyber Knight Founding Ceremony"
//! description = "The official launch event of Cyber Knight at TIPS."
//! image_url = "https://images.pexels.com/photos/1181354/pexels-photo-1181354.jpeg"
//! category = "events"
//! date = "2024-01-15"
//! tags = ["founding", "ceremony"]
//! ```
//!
//! Dates must be quoted strings. Order in the file is display order.

use crate::types::{Category, Photo};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Catalog validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub photos: Vec<Photo>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    photos: Vec<Photo>,
}

impl Catalog {
    /// The club's compiled-in photo set.
    pub fn builtin() -> Self {
        Self {
            photos: BUILTIN.iter().map(BuiltinPhoto::to_photo).collect(),
        }
    }

    /// Parse a catalog from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        let catalog = Self {
            photos: file.photos,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Load `path` if it exists, otherwise fall back to the built-in set.
    pub fn load_or_builtin(path: &Path) -> Result<Self, CatalogError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Check record-level invariants: unique non-empty ids, non-empty titles
    /// and image URLs, no repeated tag within a photo.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for photo in &self.photos {
            if photo.id.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "photo '{}' has an empty id",
                    photo.title
                )));
            }
            if !ids.insert(photo.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate photo id '{}'",
                    photo.id
                )));
            }
            if photo.title.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "photo '{}' has an empty title",
                    photo.id
                )));
            }
            if photo.image_url.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "photo '{}' has no image_url",
                    photo.id
                )));
            }
            let mut tags = HashSet::new();
            if let Some(dup) = photo.tags.iter().find(|t| !tags.insert(t.as_str())) {
                return Err(CatalogError::Validation(format!(
                    "photo '{}' repeats tag '{}'",
                    photo.id, dup
                )));
            }
        }
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Categories that at least one photo uses, in [`Category::ALL`] order.
    pub fn categories_in_use(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.photos.iter().any(|p| p.category == *c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

struct BuiltinPhoto {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    category: Category,
    date: (i32, u32, u32),
    tags: &'static [&'static str],
}

impl BuiltinPhoto {
    fn to_photo(&self) -> Photo {
        let (y, m, d) = self.date;
        Photo {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
            category: self.category,
            // Literal dates below are all valid calendar dates.
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

const BUILTIN: &[BuiltinPhoto] = &[
    BuiltinPhoto {
        id: "1",
        title: "Cyber Knight Founding Ceremony",
        description: "The official launch event of Cyber Knight at TIPS with founding members and faculty.",
        image_url: "https://images.pexels.com/photos/1181354/pexels-photo-1181354.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Events,
        date: (2024, 1, 15),
        tags: &["founding", "ceremony", "launch", "team"],
    },
    BuiltinPhoto {
        id: "2",
        title: "Ethical Hacking Workshop",
        description: "Hands-on ethical hacking workshop conducted by senior members for junior students.",
        image_url: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Workshops,
        date: (2024, 1, 20),
        tags: &["ethical-hacking", "workshop", "training", "security"],
    },
    BuiltinPhoto {
        id: "3",
        title: "Network Security Competition",
        description: "Inter-college cybersecurity competition hosted by Cyber Knight with participants from various institutions.",
        image_url: "https://images.pexels.com/photos/1181359/pexels-photo-1181359.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Competitions,
        date: (2024, 2, 5),
        tags: &["competition", "network-security", "inter-college", "ctf"],
    },
    BuiltinPhoto {
        id: "4",
        title: "Team Building Session",
        description: "Annual team building and strategy planning session with all department heads.",
        image_url: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Team,
        date: (2024, 1, 30),
        tags: &["team-building", "planning", "strategy", "leadership"],
    },
    BuiltinPhoto {
        id: "5",
        title: "Cyber Awareness Campaign",
        description: "Community outreach program at local NGO schools teaching basic cybersecurity awareness.",
        image_url: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Events,
        date: (2024, 2, 10),
        tags: &["awareness", "outreach", "community", "education"],
    },
    BuiltinPhoto {
        id: "6",
        title: "Advanced Penetration Testing Workshop",
        description: "Advanced workshop on penetration testing techniques and tools for senior members.",
        image_url: "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?auto=compress&cs=tinysrgb&w=800",
        category: Category::Workshops,
        date: (2024, 2, 15),
        tags: &["penetration-testing", "advanced", "tools", "techniques"],
    },
];
