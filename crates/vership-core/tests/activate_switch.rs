//! Tests for the `current` symlink switch.

#![cfg(unix)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use vership_core::activate::{CURRENT_LINK, activate};

fn current_target(root: &Path) -> std::path::PathBuf {
    fs::read_link(root.join(CURRENT_LINK)).expect("current should be a symlink")
}

#[test]
fn points_current_at_the_target() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app-1")).unwrap();

    activate(temp.path(), "app-1").unwrap();

    assert_eq!(current_target(temp.path()), Path::new("app-1"));
}

#[test]
fn repoints_from_a_previous_target() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app-1")).unwrap();
    fs::create_dir(temp.path().join("app-2")).unwrap();

    activate(temp.path(), "app-1").unwrap();
    activate(temp.path(), "app-2").unwrap();

    assert_eq!(current_target(temp.path()), Path::new("app-2"));
    // old release directory is untouched
    assert!(temp.path().join("app-1").is_dir());
}

#[test]
fn reactivating_the_same_target_succeeds() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app-2")).unwrap();

    activate(temp.path(), "app-2").unwrap();
    activate(temp.path(), "app-2").unwrap();

    assert_eq!(current_target(temp.path()), Path::new("app-2"));
}

#[test]
fn replaces_a_plain_directory_at_current() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app-1")).unwrap();
    fs::create_dir(temp.path().join(CURRENT_LINK)).unwrap();
    fs::write(temp.path().join(CURRENT_LINK).join("stray.txt"), "x").unwrap();

    activate(temp.path(), "app-1").unwrap();

    assert_eq!(current_target(temp.path()), Path::new("app-1"));
}

#[test]
fn leaves_no_temp_link_behind() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("app-1")).unwrap();

    activate(temp.path(), "app-1").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".current.tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp links: {leftovers:?}");
}
