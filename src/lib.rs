//! # Knight Gal
//!
//! The photo gallery of the Cyber Knight club: a fixed catalog of club photos
//! that visitors narrow down by free-text search, category and event, and
//! step through one at a time in a lightbox.
//!
//! # Architecture
//!
//! The gallery logic is a set of pure functions over an immutable catalog.
//! Two front ends drive it:
//!
//! ```text
//! Catalog ──► Filter ──► Events ──► Lightbox
//!                 │
//!                 ├──► Gallery session   (knight-gal browse / list / events)
//!                 └──► Site generator    (knight-gal build → dist/)
//! ```
//!
//! The [`gallery::Gallery`] session owns the transient UI state (the current
//! [`filter::FilterState`], the last computed results, the
//! [`lightbox::Lightbox`]) and advances it one [`gallery::Intent`] at a time.
//! The generator renders every reachable view of that state machine ahead of
//! time: one listing per category and event, one page per photo and view.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | The photo store: built-in photos or `photos.toml`, validated |
//! | [`filter`] | Search, category and event predicates and their conjunction |
//! | [`events`] | Event names from titles, grouping in first-seen order |
//! | [`lightbox`] | Single-photo viewer with wrapping next/prev |
//! | [`gallery`] | Session state machine driven by intents |
//! | [`fallback`] | Ordered image URL candidates for Drive links |
//! | [`generate`] | Static HTML site rendered with Maud |
//! | [`config`] | `config.toml` loading, validation, merging and CSS generation |
//! | [`types`] | `Photo`, `Category`, `NavLink` |
//! | [`naming`] | URL slugs for events and photo pages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Results Are Optional Until Applied
//!
//! A fresh session has not filtered anything yet, which is different from
//! filtering everything away. [`gallery::Gallery::results`] returns `None`
//! before the first application and `Some(&[])` for an empty match, so the
//! "no photos found" state is only shown after a real query.
//!
//! ## The Lightbox Index Never Outlives Its Results
//!
//! The lightbox stores a position into the filtered list, not a photo id.
//! Every filter change closes it, and any navigation against a list that no
//! longer covers the index closes it as well. There is no way to observe a
//! dangling index.
//!
//! ## Static Output
//!
//! The generated site works from any file server. Search runs over the
//! rendered cards in a few lines of vanilla JavaScript; category, event and
//! lightbox navigation are plain links between pre-rendered pages.

pub mod catalog;
pub mod config;
pub mod events;
pub mod fallback;
pub mod filter;
pub mod gallery;
pub mod generate;
pub mod lightbox;
pub mod naming;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
