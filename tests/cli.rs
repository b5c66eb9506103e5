//! End-to-end tests of the `knight-gal` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn knight_gal(source: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knight-gal"))
        .arg("--source")
        .arg(source)
        .args(args)
        .output()
        .expect("failed to run knight-gal")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn gen_config_prints_stock_config() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("site_title = \"Cyber Knight\""));
    assert!(text.contains("[images]"));
}

#[test]
fn generated_config_loads_back() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["gen-config"]);
    std::fs::write(tmp.path().join("config.toml"), out.stdout).unwrap();

    let check = knight_gal(tmp.path(), &["check"]);
    assert!(check.status.success(), "stderr: {}", stderr(&check));
}

#[test]
fn list_searches_builtin_catalog() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["list", "--search", "WORKSHOP"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Showing 2 photos for \"WORKSHOP\""));
    assert!(text.contains("001 Ethical Hacking Workshop (Workshops & Training)"));
    assert!(text.contains("002 Advanced Penetration Testing Workshop"));
}

#[test]
fn list_without_matches_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["list", "--search", "zzz"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("No photos found"));
}

#[test]
fn list_json_by_category() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["list", "--category", "team", "--json"]);
    assert!(out.status.success());
    let photos: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let photos = photos.as_array().unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["id"], "4");
    assert_eq!(photos[0]["category"], "team");
    assert_eq!(photos[0]["date"], "2024-01-30");
}

#[test]
fn list_rejects_unknown_category() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["list", "--category", "parties"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("parties"));
}

#[test]
fn events_groups_custom_catalog() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("photos.toml"),
        r#"
[[photos]]
id = "1"
title = "Hack Night - Setup"
description = ""
image_url = "1.jpg"
category = "events"
date = "2024-03-01"

[[photos]]
id = "2"
title = "Crypto Workshop"
description = ""
image_url = "2.jpg"
category = "workshops"
date = "2024-03-02"

[[photos]]
id = "3"
title = "Hack Night - Finals"
description = ""
image_url = "3.jpg"
category = "competitions"
date = "2024-03-03"
"#,
    )
    .unwrap();

    let out = knight_gal(tmp.path(), &["events"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let lines: Vec<String> = stdout(&out).lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "001 Hack Night (2 photos)",
            "    001 Hack Night - Setup",
            "    002 Hack Night - Finals",
            "002 Crypto Workshop (1 photo)",
            "    001 Crypto Workshop",
        ]
    );
}

#[test]
fn browse_reads_intents_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_knight-gal"))
        .arg("--source")
        .arg(tmp.path())
        .arg("browse")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run knight-gal");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"category workshops\nopen 6\nnext\ndance\nopen 1\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("Showing 2 photos in Workshops & Training"));
    assert!(text.contains("Lightbox: 2/2"));
    // next wraps to the first workshop
    assert!(text.contains("Lightbox: 1/2"));

    let err = stderr(&out);
    assert!(err.contains("cannot parse command 'dance'"));
    // photo 1 is not a workshop
    assert!(err.contains("photo '1' is not in the current results"));
}

#[test]
fn check_rejects_unknown_config_keys() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "sitetitle = \"typo\"\n").unwrap();
    let out = knight_gal(tmp.path(), &["check"]);
    assert!(!out.status.success());
}

#[test]
fn check_reports_builtin_inventory() {
    let tmp = TempDir::new().unwrap();
    let out = knight_gal(tmp.path(), &["check"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Photos (6 photos)"));
    assert!(text.contains("Events: 6"));
    assert!(text.contains("built-in"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn build_writes_site() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    let dist = tmp.path().join("dist");
    std::fs::create_dir_all(source.join("assets")).unwrap();
    std::fs::write(source.join("assets/favicon.ico"), b"icon").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_knight-gal"))
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&dist)
        .arg("build")
        .output()
        .expect("failed to run knight-gal");
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    assert!(dist.join("index.html").exists());
    assert!(dist.join("photo/1.html").exists());
    assert!(dist.join("category/team/index.html").exists());
    assert!(dist.join("favicon.ico").exists());
    assert!(stdout(&out).contains("==> Build complete"));
}
