//! Static HTML site generation.
//!
//! Renders the gallery as plain HTML pages: one listing page per *view*
//! (all photos, each category, each event) and one lightbox page per photo
//! in each view. Every view is a [`FilterState`]; its listing comes from
//! [`filter_photos`] and its lightbox pages from [`Lightbox`], so the
//! generated prev/next links wrap around exactly like the interactive
//! lightbox does.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                        # All photos + browse-by-event index
//! ├── photo/1.html                      # Lightbox pages of the "all" view
//! ├── category/workshops/index.html     # One view per category in use
//! ├── category/workshops/photo/2.html
//! ├── events/hack-night/index.html      # One view per event group
//! ├── events/hack-night/photo/7.html
//! └── ...                               # assets_dir contents
//! ```
//!
//! ## Search and the Lightbox
//!
//! Listing pages filter their cards in the browser. A search term travels
//! to lightbox pages as `?q=<term>`, and every lightbox page embeds its
//! view's ordered `[page, search text]` sequence, so the script can walk
//! prev/next over the photos matching the term instead of the whole view.
//! Without a term the precomputed links apply.
//!
//! All links between generated pages are relative, so the site works from
//! any sub-path and from `file://`.
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into every page:
//! - `static/style.css`: layout (colors injected from config)
//! - `static/gallery.js`: live search on listing pages, keyboard navigation
//!   on lightbox pages, image fallback walking
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is escaped.

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::events::group_by_event;
use crate::fallback::{self, ImageLoad};
use crate::filter::{CategoryFilter, FilterState, filter_photos};
use crate::lightbox::Lightbox;
use crate::naming::unique_slugs;
use crate::types::{Category, NavLink, Photo};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// One generated listing page and the filter that defines it.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: String,
    /// Directory relative to the output root, `""` for the root view.
    pub dir: String,
    pub state: FilterState,
}

impl View {
    fn depth(&self) -> usize {
        if self.dir.is_empty() {
            0
        } else {
            self.dir.split('/').count()
        }
    }

    /// Listing page path relative to the output root.
    pub fn index_path(&self) -> String {
        self.join("index.html")
    }

    /// Lightbox page path relative to the output root.
    pub fn photo_path(&self, slug: &str) -> String {
        self.join(&format!("photo/{slug}.html"))
    }

    fn join(&self, file: &str) -> String {
        if self.dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.dir, file)
        }
    }
}

/// What was written, for CLI reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteReport {
    pub views: Vec<ViewReport>,
    pub assets_copied: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewReport {
    pub title: String,
    pub index_path: String,
    /// `(photo title, lightbox page path)` in view order.
    pub photos: Vec<(String, String)>,
}

/// One photo of a view's sequence as embedded in its lightbox pages.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SequenceEntry {
    /// Lightbox page file name, relative to the other lightbox pages.
    page: String,
    /// Lowercased searchable text, see [`search_text`].
    search: String,
}

/// The views the site consists of: all photos, each category with photos,
/// each event group.
pub fn plan_views(catalog: &Catalog, config: &SiteConfig) -> Vec<View> {
    let mut views = vec![View {
        title: config.gallery.title.clone(),
        dir: String::new(),
        state: FilterState::default(),
    }];

    for category in catalog.categories_in_use() {
        views.push(View {
            title: category.label().to_string(),
            dir: format!("category/{}", category.key()),
            state: FilterState::for_category(category),
        });
    }

    let groups = group_by_event(&catalog.photos);
    let slugs = unique_slugs(groups.iter().map(|g| g.name));
    for (group, slug) in groups.iter().zip(slugs) {
        views.push(View {
            title: group.name.to_string(),
            dir: format!("events/{slug}"),
            state: FilterState::for_event(group.name),
        });
    }

    views
}

/// Page slug per photo id, unique across the catalog.
fn photo_slugs(catalog: &Catalog) -> HashMap<&str, String> {
    let ids: Vec<&str> = catalog.photos.iter().map(|p| p.id.as_str()).collect();
    ids.iter().copied().zip(unique_slugs(ids.iter().copied())).collect()
}

pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<SiteReport, GenerateError> {
    let css = format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC);
    let views = plan_views(catalog, config);
    let slugs = photo_slugs(catalog);
    let ctx = PageContext {
        config,
        catalog,
        views: &views,
        slugs: &slugs,
        css: &css,
    };

    fs::create_dir_all(output_dir)?;
    let mut reports = Vec::with_capacity(views.len());

    for view in &views {
        let results = filter_photos(&catalog.photos, &view.state);
        write_page(
            output_dir,
            &view.index_path(),
            render_view_page(&ctx, view, &results),
        )?;

        let sequence: Vec<SequenceEntry> = results
            .iter()
            .map(|p| SequenceEntry {
                page: format!("{}.html", ctx.slug(p)),
                search: search_text(p),
            })
            .collect();
        let sequence = serde_json::to_string(&sequence)?;

        let mut photos = Vec::with_capacity(results.len());
        for photo in &results {
            let mut lightbox = Lightbox::Closed;
            lightbox.open(&photo.id, &results);
            let Some((prev, next)) = lightbox.neighbours(results.len()) else {
                continue;
            };
            let page = view.photo_path(ctx.slug(photo));
            let markup = render_lightbox_page(
                &ctx,
                view,
                photo,
                results[prev],
                results[next],
                results.len(),
                &sequence,
            );
            write_page(output_dir, &page, markup)?;
            photos.push((photo.title.clone(), page));
        }

        reports.push(ViewReport {
            title: view.title.clone(),
            index_path: view.index_path(),
            photos,
        });
    }

    let assets_copied = copy_assets(&source_dir.join(&config.assets_dir), output_dir)?;

    Ok(SiteReport {
        views: reports,
        assets_copied,
    })
}

fn write_page(output_dir: &Path, rel: &str, markup: Markup) -> std::io::Result<()> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())
}

/// Copy the assets directory into the output root. Returns the file count;
/// a missing directory copies nothing.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dst = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

struct PageContext<'a> {
    config: &'a SiteConfig,
    catalog: &'a Catalog,
    views: &'a [View],
    slugs: &'a HashMap<&'a str, String>,
    css: &'a str,
}

impl PageContext<'_> {
    fn slug<'p>(&'p self, photo: &'p Photo) -> &'p str {
        self.slugs
            .get(photo.id.as_str())
            .map_or(photo.id.as_str(), String::as_str)
    }

    fn category_view(&self, category: Category) -> Option<&View> {
        self.views
            .iter()
            .find(|v| v.state.category == CategoryFilter::Only(category))
    }

    fn event_view(&self, name: &str) -> Option<&View> {
        self.views
            .iter()
            .find(|v| v.state.event.as_deref() == Some(name))
    }
}

/// `../` repeated once per directory level.
fn up(depth: usize) -> String {
    "../".repeat(depth)
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the site header: club name and configured navigation links.
pub fn site_header(site_title: &str, nav: &[NavLink], root: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href={ (root) "index.html" } { (site_title) }
            nav.site-nav {
                ul {
                    @for link in nav {
                        li { a href=(link.href) { (link.title) } }
                    }
                }
            }
        }
    }
}

fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// An `<img>` at the first attempt of its fallback chain. The remaining
/// candidates go into `data-fallbacks` for the page script.
fn image(photo: &Photo, alt: &str, config: &SiteConfig, class: &str) -> Markup {
    let load = ImageLoad::start(fallback::candidates(&photo.image_url, &config.images));
    let src = load.current_url().unwrap_or_default();
    let fallbacks = serde_json::to_string(load.pending()).unwrap_or_else(|_| "[]".to_string());
    html! {
        img class={ "fallback-img " (class) } src=(src) alt=(alt) loading="lazy" data-fallbacks=(fallbacks);
    }
}

/// Lowercased text a photo is searchable by, mirroring the filter engine.
fn search_text(photo: &Photo) -> String {
    let mut text = format!("{}\n{}", photo.title, photo.description);
    for tag in &photo.tags {
        text.push('\n');
        text.push_str(tag);
    }
    text.to_lowercase()
}

fn category_badge(category: Category) -> Markup {
    html! {
        span class={ "badge " (category.badge_class()) } { (category.label()) }
    }
}

fn format_date(photo: &Photo) -> String {
    photo.date.format("%b %-d, %Y").to_string()
}

fn category_chips(ctx: &PageContext, current: CategoryFilter, root: &str) -> Markup {
    html! {
        nav.category-chips {
            a.chip.current[current == CategoryFilter::All] href={ (root) "index.html" } { "All Categories" }
            @for category in ctx.catalog.categories_in_use() {
                @if let Some(view) = ctx.category_view(category) {
                    a.chip.current[current == CategoryFilter::Only(category)]
                        href={ (root) (view.index_path()) } { (category.label()) }
                }
            }
        }
    }
}

fn event_index(ctx: &PageContext, root: &str) -> Markup {
    let groups = group_by_event(&ctx.catalog.photos);
    html! {
        section.event-index {
            h2 { "Browse by Events" }
            div.event-grid {
                @for group in &groups {
                    @if let (Some(view), Some(cover)) = (ctx.event_view(group.name), group.cover()) {
                        a.event-card href={ (root) (view.index_path()) } {
                            (image(cover, group.name, ctx.config, "event-cover"))
                            span.event-name { (group.name) }
                            span.event-count { (group.photos.len()) " photo" (plural(group.photos.len())) }
                        }
                    }
                }
            }
        }
    }
}

fn photo_card(ctx: &PageContext, view: &View, photo: &Photo, root: &str) -> Markup {
    let preview = ctx.config.gallery.tag_preview;
    let hidden = photo.tags.len().saturating_sub(preview);
    html! {
        a.photo-card href={ (root) (view.photo_path(ctx.slug(photo))) } data-search=(search_text(photo)) {
            div.card-image { (image(photo, &photo.title, ctx.config, "card-img")) }
            div.card-body {
                div.card-meta {
                    (category_badge(photo.category))
                    time datetime=(photo.date.to_string()) { (format_date(photo)) }
                }
                h3.card-title { (photo.title) }
                div.card-tags {
                    @for tag in photo.tags.iter().take(preview) {
                        span.tag { (tag) }
                    }
                    @if hidden > 0 {
                        span.tag.tag-more { "+" (hidden) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a listing page: filter controls or event banner, then the grid.
fn render_view_page(ctx: &PageContext, view: &View, results: &[&Photo]) -> Markup {
    let root = up(view.depth());
    let count = results.len();
    let content = html! {
        (site_header(&ctx.config.site_title, &ctx.config.nav, &root))
        main.gallery-page {
            header.gallery-header {
                h1 { (ctx.config.gallery.title) }
                div.gallery-intro { (markdown(&ctx.config.gallery.intro)) }
            }
            @if let Some(event) = &view.state.event {
                section.event-banner {
                    div {
                        h2 { "Viewing: " (event) }
                        p { "All photos from this event" }
                    }
                    a.back-link href={ (root) "index.html" } { "← Back to All Photos" }
                }
            } @else {
                section.filters {
                    input id="search" type="search" placeholder="Search photos by title, description, or tags..." autocomplete="off";
                    (category_chips(ctx, view.state.category, &root))
                    p.result-count data-total=(count) {
                        "Showing " (count) " photo" (plural(count))
                    }
                }
            }
            @if view.state.is_pristine() {
                (event_index(ctx, &root))
            }
            @if results.is_empty() {
                div.empty-state {
                    h3 { "No photos found" }
                    p { "Try adjusting your search terms or filters" }
                }
            } @else {
                div.photo-grid {
                    @for photo in results {
                        (photo_card(ctx, view, photo, &root))
                    }
                }
                div.empty-state.search-empty hidden {
                    h3 { "No photos found" }
                    p { "Try adjusting your search terms or filters" }
                }
            }
        }
    };
    let title = format!("{} · {}", view.title, ctx.config.site_title);
    base_document(&title, ctx.css, None, content)
}

/// Renders the lightbox page of `photo` within `view`.
///
/// `prev`/`next` are the wrapped neighbours in the view's result sequence;
/// the arrows are hidden when the view has a single photo. `sequence` is the
/// view's serialized [`SequenceEntry`] list.
fn render_lightbox_page(
    ctx: &PageContext,
    view: &View,
    photo: &Photo,
    prev: &Photo,
    next: &Photo,
    total: usize,
    sequence: &str,
) -> Markup {
    // Lightbox pages live one level below their view
    let root = up(view.depth() + 1);
    let close_url = "../index.html";
    let prev_url = format!("{}.html", ctx.slug(prev));
    let next_url = format!("{}.html", ctx.slug(next));
    let page = format!("{}.html", ctx.slug(photo));

    let content = html! {
        div.lightbox {
            a.lightbox-close href=(close_url) aria-label="Close" { "×" }
            @if total > 1 {
                a.lightbox-prev href=(prev_url) aria-label="Previous photo" { "‹" }
                a.lightbox-next href=(next_url) aria-label="Next photo" { "›" }
            }
            figure.lightbox-frame {
                (image(photo, &photo.title, ctx.config, "lightbox-img"))
                figcaption.lightbox-info {
                    div.card-meta {
                        (category_badge(photo.category))
                        time datetime=(photo.date.to_string()) { (format_date(photo)) }
                    }
                    h2 { (photo.title) }
                    p { (photo.description) }
                    div.card-tags {
                        @for tag in &photo.tags {
                            span.tag { (tag) }
                        }
                    }
                }
            }
        }
        div.nav-zones data-prev=[(total > 1).then_some(&prev_url)]
            data-next=[(total > 1).then_some(&next_url)]
            data-close=(close_url) data-home={ (root) "index.html" }
            data-page=(page) data-sequence=(sequence) {}
    };

    let title = format!("{} · {}", photo.title, ctx.config.site_title);
    base_document(&title, ctx.css, Some("lightbox-view"), content)
}

// ============================================================================
// Tests
// ============================================================================
