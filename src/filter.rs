//! The filter engine.
//!
//! Given a [`FilterState`] and the full photo list, [`filter_photos`] returns
//! the matching photos in their original order. Three predicates are ANDed:
//!
//! | Predicate | Matches when |
//! |-----------|--------------|
//! | search    | empty, or a case-insensitive substring of title, description or any tag |
//! | category  | `All`, or the photo's category exactly |
//! | event     | unset, or a case-insensitive substring of title or any tag |
//!
//! "No matches" is an ordinary empty result.

use crate::types::{Category, Photo};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("unknown category '{0}' (expected all, events, workshops, competitions or team)")]
    UnknownCategory(String),
}

/// Category selector: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.key(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(FilterError::UnknownCategory)
    }
}

/// Transient selector state of one gallery view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
    pub event: Option<String>,
}

impl FilterState {
    pub fn for_category(category: Category) -> Self {
        Self {
            category: CategoryFilter::Only(category),
            ..Self::default()
        }
    }

    pub fn for_event(name: &str) -> Self {
        Self {
            event: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// No search, all categories, no event. The browse-by-event index is
    /// only offered in this state.
    pub fn is_pristine(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All && self.event.is_none()
    }

    /// Whether a single photo passes all three predicates.
    pub fn matches(&self, photo: &Photo) -> bool {
        matches_search(photo, &self.search)
            && matches_category(photo, self.category)
            && self
                .event
                .as_deref()
                .is_none_or(|event| matches_event(photo, event))
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring match on title, description or any tag.
/// An empty term matches every photo.
pub fn matches_search(photo: &Photo, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    contains_ci(&photo.title, &term)
        || contains_ci(&photo.description, &term)
        || photo.tags.iter().any(|t| contains_ci(t, &term))
}

pub fn matches_category(photo: &Photo, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(c) => photo.category == c,
    }
}

/// Case-insensitive substring match of the event name on title or any tag.
/// Descriptions are not consulted.
pub fn matches_event(photo: &Photo, event: &str) -> bool {
    let event = event.to_lowercase();
    contains_ci(&photo.title, &event) || photo.tags.iter().any(|t| contains_ci(t, &event))
}

/// Apply `state` to `photos`, keeping original order.
pub fn filter_photos<'a>(photos: &'a [Photo], state: &FilterState) -> Vec<&'a Photo> {
    photos.iter().filter(|p| state.matches(p)).collect()
}
