//! Integration tests for file-backed document storage

use tempfile::TempDir;
use unitracker::core::storage::{FileStorage, Storage, PLAN_KEY, STATUSES_KEY};

#[test]
fn test_file_storage_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().join("docs"));

    assert!(storage.get(PLAN_KEY).is_none());

    storage
        .set(PLAN_KEY, "{\"plan\":\"X\"}")
        .expect("Failed to write document");
    assert_eq!(storage.get(PLAN_KEY).as_deref(), Some("{\"plan\":\"X\"}"));

    // One file per key under the storage directory
    assert!(temp_dir
        .path()
        .join("docs")
        .join("unitracker-plan.json")
        .exists());

    storage.remove(PLAN_KEY).expect("Failed to remove document");
    assert!(storage.get(PLAN_KEY).is_none());
}

#[test]
fn test_file_storage_creates_directory_on_first_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("nested").join("docs");
    let storage = FileStorage::new(dir.clone());

    assert!(!dir.exists());
    storage
        .set(STATUSES_KEY, "{}")
        .expect("Failed to write document");
    assert!(dir.exists());
}

#[test]
fn test_file_storage_overwrites_existing_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().to_path_buf());

    storage.set(PLAN_KEY, "first").expect("Failed to write");
    storage.set(PLAN_KEY, "second").expect("Failed to write");
    assert_eq!(storage.get(PLAN_KEY).as_deref(), Some("second"));
}

#[test]
fn test_file_storage_keys_are_independent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().to_path_buf());

    storage.set(PLAN_KEY, "plan").expect("Failed to write");
    storage.set(STATUSES_KEY, "statuses").expect("Failed to write");

    storage.remove(PLAN_KEY).expect("Failed to remove");
    assert!(storage.get(PLAN_KEY).is_none());
    assert_eq!(storage.get(STATUSES_KEY).as_deref(), Some("statuses"));
}

#[test]
fn test_file_storage_remove_missing_key_is_ok() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().to_path_buf());

    assert!(storage.remove("unitracker-never-written").is_ok());
}
