//! CLI output formatting.
//!
//! Every command reports through this module. Output is information-first:
//! each entity (photo, event, view) leads with a positional index and its
//! title, with secondary context on indented lines.
//!
//! # Output Format
//!
//! ## list
//!
//! ```text
//! Showing 2 photos for "workshop"
//! 001 Ethical Hacking Workshop (Workshops & Training)
//!     Id: 2 · Jan 20, 2024
//!     Tags: ethical-hacking, workshop, training, security
//!     Hands-on ethical hacking workshop conducted by senior members...
//! ```
//!
//! ## events
//!
//! ```text
//! 001 Hack Night (2 photos)
//!     001 Hack Night - Setup
//!     002 Hack Night - Finals
//! ```
//!
//! ## build
//!
//! ```text
//! 001 Photo Gallery → index.html
//!     001 Cyber Knight Founding Ceremony → photo/1.html
//!
//! Generated 11 views, 18 lightbox pages, 0 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O.

use crate::catalog::Catalog;
use crate::events::EventGroup;
use crate::filter::{CategoryFilter, FilterState};
use crate::gallery::Gallery;
use crate::generate::SiteReport;
use crate::lightbox::Lightbox;
use crate::types::{Category, Photo};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn photos_label(n: usize) -> String {
    if n == 1 {
        "1 photo".to_string()
    } else {
        format!("{n} photos")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Index, title and category label, followed by id/date, tags and a
/// description preview.
fn photo_lines(index: usize, photo: &Photo, depth: usize) -> Vec<String> {
    let pad = indent(depth);
    let mut lines = vec![
        format!(
            "{}{} {} ({})",
            pad,
            format_index(index),
            photo.title,
            photo.category.label()
        ),
        format!(
            "{}    Id: {} · {}",
            pad,
            photo.id,
            photo.date.format("%b %-d, %Y")
        ),
    ];
    if !photo.tags.is_empty() {
        lines.push(format!("{}    Tags: {}", pad, photo.tags.join(", ")));
    }
    let desc = truncate_desc(photo.description.trim(), 60);
    if !desc.is_empty() {
        lines.push(format!("{}    {}", pad, desc));
    }
    lines
}

/// One-line description of the active filters.
fn filter_summary(state: &FilterState, count: usize) -> String {
    let mut line = format!("Showing {}", photos_label(count));
    if !state.search.is_empty() {
        line.push_str(&format!(" for \"{}\"", state.search));
    }
    if let CategoryFilter::Only(c) = state.category {
        line.push_str(&format!(" in {}", c.label()));
    }
    if let Some(event) = &state.event {
        line.push_str(&format!(" from event \"{}\"", event));
    }
    line
}

// ============================================================================
// list
// ============================================================================

/// Format filtered results. An empty result prints the "no photos" hint.
pub fn format_list_output(results: &[&Photo], state: &FilterState) -> Vec<String> {
    let mut lines = vec![filter_summary(state, results.len())];
    if results.is_empty() {
        lines.push("No photos found. Try adjusting your search terms or filters.".to_string());
    }
    for (i, photo) in results.iter().enumerate() {
        lines.extend(photo_lines(i + 1, photo, 0));
    }
    lines
}

pub fn print_list_output(results: &[&Photo], state: &FilterState) {
    for line in format_list_output(results, state) {
        println!("{}", line);
    }
}

// ============================================================================
// events
// ============================================================================

pub fn format_events_output(groups: &[EventGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            group.name,
            photos_label(group.photos.len())
        ));
        for (j, photo) in group.photos.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), photo.title));
        }
    }
    lines
}

pub fn print_events_output(groups: &[EventGroup]) {
    for line in format_events_output(groups) {
        println!("{}", line);
    }
}

// ============================================================================
// browse
// ============================================================================

/// Current session state: results summary, then the lightbox.
pub fn format_browse_state(gallery: &Gallery) -> Vec<String> {
    let mut lines = Vec::new();
    match gallery.results() {
        None => lines.push("Filters not applied".to_string()),
        Some(results) => {
            lines.push(filter_summary(gallery.state(), results.len()));
            for (i, photo) in results.iter().enumerate() {
                lines.push(format!("    {} {} [{}]", format_index(i + 1), photo.title, photo.id));
            }
        }
    }
    match (gallery.lightbox(), gallery.current()) {
        (Lightbox::Open { index }, Some(photo)) => {
            let total = gallery.results().map_or(0, <[_]>::len);
            lines.push(format!("Lightbox: {}/{}", index + 1, total));
            lines.extend(photo_lines(index + 1, photo, 1));
        }
        _ => lines.push("Lightbox: closed".to_string()),
    }
    lines
}

pub fn print_browse_state(gallery: &Gallery) {
    for line in format_browse_state(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

/// Catalog inventory: photo counts per category and event count.
pub fn format_check_output(catalog: &Catalog, event_count: usize, catalog_source: &str) -> Vec<String> {
    let mut lines = vec![format!("Photos ({})", photos_label(catalog.len()))];
    for category in Category::ALL {
        let n = catalog.photos.iter().filter(|p| p.category == category).count();
        lines.push(format!("    {}: {}", category.label(), n));
    }
    lines.push(format!("Events: {}", event_count));
    lines.push(String::new());
    lines.push("Catalog".to_string());
    lines.push(format!("    {}", catalog_source));
    lines
}

pub fn print_check_output(catalog: &Catalog, event_count: usize, catalog_source: &str) {
    for line in format_check_output(catalog, event_count, catalog_source) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the generated site: each view with its lightbox pages.
pub fn format_generate_output(report: &SiteReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut lightbox_pages = 0;
    for (i, view) in report.views.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            view.title,
            view.index_path
        ));
        for (j, (title, page)) in view.photos.iter().enumerate() {
            lines.push(format!("    {} {} \u{2192} {}", format_index(j + 1), title, page));
        }
        lightbox_pages += view.photos.len();
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} views, {} lightbox pages, {} assets",
        report.views.len(),
        lightbox_pages,
        report.assets_copied
    ));
    lines
}

pub fn print_generate_output(report: &SiteReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
