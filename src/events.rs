//! Browse-by-event grouping.
//!
//! Photos of one event share a title prefix: `"Hack Night - Round 1"` and
//! `"Hack Night - Finals"` both belong to `"Hack Night"`. A title without the
//! `" - "` separator is its own event.

use crate::types::Photo;

const SEPARATOR: &str = " - ";

/// One event and its photos in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGroup<'a> {
    pub name: &'a str,
    pub photos: Vec<&'a Photo>,
}

impl<'a> EventGroup<'a> {
    /// Card image for the event index: the first photo of the group.
    pub fn cover(&self) -> Option<&'a Photo> {
        self.photos.first().copied()
    }
}

/// Event name derived from a title: the text before the first `" - "`.
/// Falls back to the whole title when there is no separator or nothing
/// precedes it.
pub fn event_name(title: &str) -> &str {
    match title.split_once(SEPARATOR) {
        Some((head, _)) if !head.is_empty() => head,
        _ => title,
    }
}

/// Partition `photos` by event name. Groups are ordered by first occurrence.
pub fn group_by_event(photos: &[Photo]) -> Vec<EventGroup<'_>> {
    let mut groups: Vec<EventGroup<'_>> = Vec::new();
    for photo in photos {
        let name = event_name(&photo.title);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.photos.push(photo),
            None => groups.push(EventGroup {
                name,
                photos: vec![photo],
            }),
        }
    }
    groups
}
