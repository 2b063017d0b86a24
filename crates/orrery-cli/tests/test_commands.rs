//! End-to-end command flow tests.
//!
//! Drive the command functions against a temporary store, the same way the
//! binary dispatches them.

use std::process::ExitCode;

use orrery_cli::commands::preset::{run_delete, run_list, run_load, run_save};
use orrery_cli::store::PresetStore;

fn assert_success(code: ExitCode) {
    assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::SUCCESS));
}

#[test]
fn save_load_delete_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store_dir = dir.path().join("store");
    let store_str = store_dir.to_str().unwrap();
    let out_png = dir.path().join("out.png");

    // Save a gaseous planet with a pinned seed.
    let code = run_save(
        store_str,
        "Amber Giant",
        Some(0.42),
        "gaseous",
        "ammonia",
        0.5,
        2.0,
        1.5,
        26.7,
        0.8,
        true,
    )
    .unwrap();
    assert_success(code);

    // The record landed in the store with its seed intact.
    let store = PresetStore::open(store_str).unwrap();
    let saved = store.load("Amber Giant").unwrap();
    assert_eq!(saved.seed, 0.42);
    assert!(saved.show_rings);

    // Load regenerates the texture to disk.
    let code = run_load(store_str, "Amber Giant", 16, out_png.to_str().unwrap()).unwrap();
    assert_success(code);
    let png_bytes = std::fs::read(&out_png).unwrap();
    assert_eq!(&png_bytes[..8], b"\x89PNG\r\n\x1a\n");

    // Listing and deleting complete the lifecycle.
    assert_success(run_list(store_str).unwrap());
    assert_success(run_delete(store_str, "Amber Giant").unwrap());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn load_missing_preset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store_str = dir.path().to_str().unwrap();
    let code = run_load(store_str, "ghost", 16, "unused.png").unwrap();
    assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(1)));
}

#[test]
fn save_rejects_invalid_name() {
    let dir = tempfile::tempdir().unwrap();
    let store_str = dir.path().to_str().unwrap();
    let code = run_save(
        store_str,
        "bad/name",
        Some(0.1),
        "terrain",
        "methane",
        0.5,
        1.0,
        0.01,
        23.0,
        0.5,
        false,
    )
    .unwrap();
    assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(1)));
}
