//! Image fallback chain.
//!
//! Club photos are often shared as Google Drive links
//! (`https://drive.google.com/file/d/<id>/view`), which browsers cannot
//! embed directly. For such URLs the display tries a fixed list of
//! alternative Drive endpoints built from the file id, then a placeholder
//! image, and finally gives up with an "Image unavailable" state. Any other
//! URL is tried as-is with no fallback.
//!
//! The endpoint templates and the placeholder come from
//! [`ImagesConfig`]; the order of the list is the order of attempts.

use crate::config::ImagesConfig;

/// Extract the Drive file id that follows a `/d/` path segment.
pub fn drive_file_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("/d/")?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}

/// Ordered list of URLs to try for `url`.
pub fn candidates(url: &str, images: &ImagesConfig) -> Vec<String> {
    match drive_file_id(url) {
        Some(id) => images
            .drive_templates
            .iter()
            .map(|t| t.replace("{id}", id))
            .chain(std::iter::once(images.placeholder.clone()))
            .collect(),
        None => vec![url.to_string()],
    }
}

/// Load progress of one image over its candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading { attempt: usize },
    Loaded { attempt: usize },
    /// Every candidate failed. Terminal.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct ImageLoad {
    candidates: Vec<String>,
    state: LoadState,
}

impl ImageLoad {
    /// Start loading the first candidate. An empty list is unavailable at once.
    pub fn start(candidates: Vec<String>) -> Self {
        let state = if candidates.is_empty() {
            LoadState::Unavailable
        } else {
            LoadState::Loading { attempt: 0 }
        };
        Self { candidates, state }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// URL currently being loaded or shown.
    pub fn current_url(&self) -> Option<&str> {
        match self.state {
            LoadState::Loading { attempt } | LoadState::Loaded { attempt } => {
                self.candidates.get(attempt).map(String::as_str)
            }
            LoadState::Unavailable => None,
        }
    }

    /// The current candidate failed: move to the next or give up.
    pub fn on_error(&mut self) {
        if let LoadState::Loading { attempt } | LoadState::Loaded { attempt } = self.state {
            self.state = if attempt + 1 < self.candidates.len() {
                LoadState::Loading {
                    attempt: attempt + 1,
                }
            } else {
                LoadState::Unavailable
            };
        }
    }

    /// Candidates still to try after the current one, in order. The static
    /// site hands these to the page script, which continues the walk.
    pub fn pending(&self) -> &[String] {
        match self.state {
            LoadState::Loading { attempt } | LoadState::Loaded { attempt } => {
                self.candidates.get(attempt + 1..).unwrap_or_default()
            }
            LoadState::Unavailable => &[],
        }
    }

    pub fn on_load(&mut self) {
        if let LoadState::Loading { attempt } = self.state {
            self.state = LoadState::Loaded { attempt };
        }
    }
}
