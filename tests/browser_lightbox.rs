//! Browser lightbox tests: keyboard navigation, live search carried into
//! the lightbox, and image fallback on the generated site.
//!
//! Run with: `cargo test --test browser_lightbox -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_knight-gal");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/browser-content").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run knight-gal");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load(rel: &str) -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(rel);
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

fn location(tab: &Tab) -> String {
    eval(tab, "window.location.href")
        .as_str()
        .expect("href is not a string")
        .to_string()
}

fn press(tab: &Tab, key: &str) {
    tab.press_key(key).unwrap();
    tab.wait_until_navigated().unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn arrow_right_moves_to_next_photo() {
    let tab = load("photo/finals.html");
    press(&tab, "ArrowRight");
    let href = location(&tab);
    assert!(href.ends_with("photo/crypto.html"), "href was {}", href);
}

#[test]
#[ignore]
fn arrow_right_wraps_from_last_to_first() {
    let tab = load("photo/crypto.html");
    press(&tab, "ArrowRight");
    let href = location(&tab);
    assert!(href.ends_with("photo/setup.html"), "href was {}", href);
}

#[test]
#[ignore]
fn arrow_left_wraps_from_first_to_last() {
    let tab = load("photo/setup.html");
    press(&tab, "ArrowLeft");
    let href = location(&tab);
    assert!(href.ends_with("photo/crypto.html"), "href was {}", href);
}

#[test]
#[ignore]
fn escape_returns_to_listing() {
    let tab = load("category/workshops/photo/crypto.html");
    press(&tab, "Escape");
    let href = location(&tab);
    assert!(
        href.ends_with("category/workshops/index.html"),
        "href was {}",
        href
    );
}

#[test]
#[ignore]
fn single_photo_view_has_no_arrows() {
    let tab = load("category/workshops/photo/crypto.html");
    let arrows = eval(
        &tab,
        "document.querySelectorAll('.lightbox-prev, .lightbox-next').length",
    );
    assert_eq!(arrows.as_u64(), Some(0));
}

#[test]
#[ignore]
fn live_search_hides_non_matching_cards() {
    let tab = load("index.html");
    let visible = eval(
        &tab,
        r#"(function() {
            const input = document.getElementById('search');
            input.value = 'CRYPTO';
            input.dispatchEvent(new Event('input'));
            return Array.from(document.querySelectorAll('.photo-card'))
                .filter(c => !c.hidden).length;
        })()"#,
    );
    assert_eq!(visible.as_u64(), Some(1));

    let count = eval(&tab, "document.querySelector('.result-count').textContent");
    assert_eq!(count.as_str(), Some("Showing 1 photo for \"CRYPTO\""));

    let events_hidden = eval(&tab, "document.querySelector('.event-index').hidden");
    assert_eq!(events_hidden.as_bool(), Some(true));
}

#[test]
#[ignore]
fn clearing_search_restores_event_index() {
    let tab = load("index.html");
    let events_hidden = eval(
        &tab,
        r#"(function() {
            const input = document.getElementById('search');
            input.value = 'night';
            input.dispatchEvent(new Event('input'));
            input.value = '';
            input.dispatchEvent(new Event('input'));
            return document.querySelector('.event-index').hidden;
        })()"#,
    );
    assert_eq!(events_hidden.as_bool(), Some(false));
}

/// Search on the root listing, then follow the card of `id`.
fn open_searched(term: &str, id: &str) -> Arc<Tab> {
    let tab = load("index.html");
    let href = eval(
        &tab,
        &format!(
            r#"(function() {{
                const input = document.getElementById('search');
                input.value = '{term}';
                input.dispatchEvent(new Event('input'));
                return document.querySelector('a.photo-card[href^="photo/{id}.html"]').href;
            }})()"#
        ),
    );
    let href = href.as_str().expect("href is not a string").to_string();
    assert!(href.ends_with(&format!("photo/{id}.html?q={term}")), "href was {}", href);
    tab.navigate_to(&href).unwrap().wait_until_navigated().unwrap();
    tab
}

#[test]
#[ignore]
fn searched_lightbox_steps_over_matches_only() {
    // "night" matches setup and finals; crypto follows finals in the view
    let tab = open_searched("night", "finals");
    press(&tab, "ArrowRight");
    let href = location(&tab);
    assert!(href.ends_with("photo/setup.html?q=night"), "href was {}", href);

    press(&tab, "ArrowLeft");
    let href = location(&tab);
    assert!(href.ends_with("photo/finals.html?q=night"), "href was {}", href);
}

#[test]
#[ignore]
fn single_match_hides_arrows() {
    let tab = open_searched("crypto", "crypto");
    let visible = eval(
        &tab,
        "Array.from(document.querySelectorAll('.lightbox-prev, .lightbox-next')).filter(a => !a.hidden).length",
    );
    assert_eq!(visible.as_u64(), Some(0));
}

#[test]
#[ignore]
fn escape_keeps_search_on_listing() {
    let tab = open_searched("night", "setup");
    press(&tab, "Escape");
    let href = location(&tab);
    assert!(href.ends_with("index.html?q=night"), "href was {}", href);

    let visible = eval(
        &tab,
        "Array.from(document.querySelectorAll('.photo-card')).filter(c => !c.hidden).length",
    );
    assert_eq!(visible.as_u64(), Some(2));
}

#[test]
#[ignore]
fn live_search_without_matches_shows_empty_state() {
    let tab = load("index.html");
    let empty_hidden = eval(
        &tab,
        r#"(function() {
            const input = document.getElementById('search');
            input.value = 'zzz';
            input.dispatchEvent(new Event('input'));
            return document.querySelector('.search-empty').hidden;
        })()"#,
    );
    assert_eq!(empty_hidden.as_bool(), Some(false));
}

#[test]
#[ignore]
fn broken_images_end_unavailable() {
    let tab = load("photo/finals.html");
    std::thread::sleep(std::time::Duration::from_millis(500));
    let unavailable = eval(
        &tab,
        "document.querySelectorAll('.image-unavailable').length",
    );
    assert_eq!(unavailable.as_u64(), Some(1));
}
