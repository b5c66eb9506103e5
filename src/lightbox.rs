//! Lightbox state machine.
//!
//! ```text
//!            open(id) found
//!   Closed ─────────────────▶ Open { index }
//!     ▲                          │  next / prev: (index ± 1 + len) mod len
//!     │  close, open(id) missing,│
//!     └──── empty or stale seq ◀─┘
//! ```
//!
//! The index always refers to the *filtered* sequence the caller passes in,
//! never to the full catalog. The lightbox keeps no reference to that
//! sequence and does not follow filter changes: when the results change the
//! caller must close or re-open it. Any call that finds its index out of range
//! for the sequence it is given closes the lightbox instead.

use crate::types::Photo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// Open on the photo with `id`. Returns `false` and closes if the photo is
    /// not part of `filtered`.
    pub fn open(&mut self, id: &str, filtered: &[&Photo]) -> bool {
        *self = match filtered.iter().position(|p| p.id == id) {
            Some(index) => Lightbox::Open { index },
            None => Lightbox::Closed,
        };
        self.is_open()
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Step forward with wraparound over a sequence of length `len`.
    pub fn next(&mut self, len: usize) {
        self.step(len, 1);
    }

    /// Step backward with wraparound over a sequence of length `len`.
    pub fn prev(&mut self, len: usize) {
        self.step(len, len.saturating_sub(1));
    }

    // `offset` is taken mod len, so prev is `len - 1`.
    fn step(&mut self, len: usize, offset: usize) {
        if let Lightbox::Open { index } = *self {
            if index >= len {
                self.close();
            } else {
                *self = Lightbox::Open {
                    index: (index + offset) % len,
                };
            }
        }
    }

    /// The photo on display, or `None` when closed or stale.
    pub fn current<'a>(&self, filtered: &[&'a Photo]) -> Option<&'a Photo> {
        self.index().and_then(|i| filtered.get(i).copied())
    }

    /// Neighbour indices `(prev, next)` of the open photo.
    pub fn neighbours(&self, len: usize) -> Option<(usize, usize)> {
        match *self {
            Lightbox::Open { index } if index < len => {
                Some(((index + len - 1) % len, (index + 1) % len))
            }
            _ => None,
        }
    }
}
