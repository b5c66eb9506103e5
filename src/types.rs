//! Shared types used across the gallery core and the display surfaces.
//!
//! Photos are immutable once loaded: the catalog hands out `&Photo` slices and
//! nothing downstream (filter, grouping, lightbox, site generation) ever
//! mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One photo record.
///
/// Field names on the wire follow the club's original data file, so
/// `imageUrl` is accepted alongside `image_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Photo {
    /// Unique identifier, also used in generated page names.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    pub category: Category,
    /// Calendar date, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fixed photo classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Events,
    Workshops,
    Competitions,
    Team,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Events,
        Category::Workshops,
        Category::Competitions,
        Category::Team,
    ];

    /// Lowercase key used in config, URLs and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::Workshops => "workshops",
            Category::Competitions => "competitions",
            Category::Team => "team",
        }
    }

    /// Human-readable label. The match is exhaustive, so every category a
    /// photo can carry has a label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Events => "Events & Ceremonies",
            Category::Workshops => "Workshops & Training",
            Category::Competitions => "Competitions & CTFs",
            Category::Team => "Team & Leadership",
        }
    }

    /// CSS class for the coloured category badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Events => "badge-events",
            Category::Workshops => "badge-workshops",
            Category::Competitions => "badge-competitions",
            Category::Team => "badge-team",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Header navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_label() {
        for c in Category::ALL {
            assert!(!c.label().is_empty(), "{c} has no label");
        }
    }

    #[test]
    fn category_key_round_trips_through_from_str() {
        for c in Category::ALL {
            assert_eq!(c.key().parse::<Category>(), Ok(c));
        }
        assert!("photos".parse::<Category>().is_err());
    }

    #[test]
    fn photo_accepts_image_url_alias() {
        let toml = r#"
id = "1"
title = "Cyber Knight Founding Ceremony"
description = "Launch event"
imageUrl = "https://example.com/a.jpg"
category = "events"
date = "2024-01-15"
tags = ["founding"]
"#;
        let photo: Photo = toml::from_str(toml).unwrap();
        assert_eq!(photo.image_url, "https://example.com/a.jpg");
        assert_eq!(photo.category, Category::Events);
        assert_eq!(photo.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn photo_rejects_unknown_category() {
        let toml = r#"
id = "1"
title = "x"
description = ""
image_url = "u"
category = "parties"
date = "2024-01-15"
"#;
        assert!(toml::from_str::<Photo>(toml).is_err());
    }
}
