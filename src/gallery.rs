//! Gallery session: filter state, current results and lightbox together.
//!
//! The display surface (CLI `browse` loop, or any UI) sends [`Intent`]s;
//! the session applies them and exposes what to render.
//!
//! ## Results before and after filtering
//!
//! [`Gallery::results`] is `None` until the filter has been applied once.
//! After that an empty slice means "no photos found".
//!
//! ## Filters and the lightbox
//!
//! Changing search, category or event replaces the result sequence the
//! lightbox index points into. The session closes the lightbox on every
//! filter intent; the user re-opens a photo from the new results.

use crate::events::{EventGroup, group_by_event};
use crate::filter::{CategoryFilter, FilterError, FilterState, filter_photos};
use crate::lightbox::Lightbox;
use crate::types::Photo;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GalleryError {
    #[error("photo '{0}' is not in the current results")]
    PhotoNotInResults(String),
    #[error("{0}")]
    Filter(#[from] FilterError),
    #[error("cannot parse command '{0}'")]
    Parse(String),
}

/// A user action emitted by a display surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SearchChanged(String),
    CategoryChanged(CategoryFilter),
    EventSelected(String),
    EventCleared,
    PhotoOpened(String),
    Next,
    Prev,
    LightboxClosed,
}

impl FromStr for Intent {
    type Err = GalleryError;

    /// Parse a one-line command: `search <text>`, `category <key|all>`,
    /// `event <name>`, `clear-event`, `open <id>`, `next`, `prev`, `close`.
    /// `search` with no text clears the search. The search text is taken
    /// verbatim after the first separator, surrounding spaces included;
    /// every other argument is trimmed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (cmd, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if cmd == "search" {
            return Ok(Intent::SearchChanged(raw.to_string()));
        }
        let intent = match (cmd, raw.trim()) {
            ("search", text) => Intent::SearchChanged(text.to_string()),
            ("category", key) if !key.is_empty() => Intent::CategoryChanged(key.parse()?),
            ("event", name) if !name.is_empty() => Intent::EventSelected(name.to_string()),
            ("clear-event", "") => Intent::EventCleared,
            ("open", id) if !id.is_empty() => Intent::PhotoOpened(id.to_string()),
            ("next", "") => Intent::Next,
            ("prev", "") => Intent::Prev,
            ("close", "") => Intent::LightboxClosed,
            _ => return Err(GalleryError::Parse(line.trim_end().to_string())),
        };
        Ok(intent)
    }
}

pub struct Gallery<'a> {
    photos: &'a [Photo],
    state: FilterState,
    results: Option<Vec<&'a Photo>>,
    lightbox: Lightbox,
}

impl<'a> Gallery<'a> {
    /// A session over `photos` with default filters, not yet applied.
    pub fn new(photos: &'a [Photo]) -> Self {
        Self::with_state(photos, FilterState::default())
    }

    pub fn with_state(photos: &'a [Photo], state: FilterState) -> Self {
        Self {
            photos,
            state,
            results: None,
            lightbox: Lightbox::Closed,
        }
    }

    /// Run the filter engine with the current state.
    pub fn apply(&mut self) -> &[&'a Photo] {
        self.results.insert(filter_photos(self.photos, &self.state))
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Filtered sequence, or `None` if filters were never applied.
    pub fn results(&self) -> Option<&[&'a Photo]> {
        self.results.as_deref()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// Photo shown in the lightbox, if open.
    pub fn current(&self) -> Option<&'a Photo> {
        self.results
            .as_deref()
            .and_then(|results| self.lightbox.current(results))
    }

    /// Event groups over the full photo set, not the filtered one.
    pub fn event_groups(&self) -> Vec<EventGroup<'a>> {
        group_by_event(self.photos)
    }

    /// The browse-by-event index is only offered with no filter active.
    pub fn show_event_index(&self) -> bool {
        self.state.is_pristine()
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), GalleryError> {
        match intent {
            Intent::SearchChanged(text) => {
                self.state.search = text;
                self.refilter();
            }
            Intent::CategoryChanged(category) => {
                self.state.category = category;
                self.refilter();
            }
            Intent::EventSelected(name) => {
                self.state = FilterState::for_event(&name);
                self.refilter();
            }
            Intent::EventCleared => {
                self.state.event = None;
                self.refilter();
            }
            Intent::PhotoOpened(id) => {
                let results = self
                    .results
                    .get_or_insert_with(|| filter_photos(self.photos, &self.state));
                if !self.lightbox.open(&id, results) {
                    return Err(GalleryError::PhotoNotInResults(id));
                }
            }
            Intent::Next => self.lightbox.next(self.result_len()),
            Intent::Prev => self.lightbox.prev(self.result_len()),
            Intent::LightboxClosed => self.lightbox.close(),
        }
        Ok(())
    }

    fn refilter(&mut self) {
        self.lightbox.close();
        self.apply();
    }

    fn result_len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }
}
