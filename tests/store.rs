mod common;
use common::*;
use kairo::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn create_store() -> (TempDir, JsonStore) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("b.json"), SAMPLER_WORKFLOW_JSON).unwrap();
    fs::write(root.join("a.json"), "{}").unwrap();
    fs::write(root.join("notes.txt"), "ignored").unwrap();
    fs::create_dir_all(root.join("portraits/faces")).unwrap();
    fs::create_dir(root.join("landscapes")).unwrap();
    fs::write(root.join("portraits/face.json"), "{\"nodes\": []}").unwrap();
    let store = JsonStore::new(root);
    (dir, store)
}

#[test]
fn test_list_root() {
    let (_dir, store) = create_store();
    let listing = store.list(".").unwrap();

    assert_eq!(listing.directory, ".");
    let files: Vec<_> = listing.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(files, vec!["a.json", "b.json"]);
    assert_eq!(listing.files[0].size, 2);
    assert!(listing.files[0].modified > 0.0);

    let directories: Vec<_> = listing
        .directories
        .iter()
        .map(|d| (d.name.as_str(), d.path.as_str()))
        .collect();
    assert_eq!(
        directories,
        vec![("landscapes", "landscapes"), ("portraits", "portraits")]
    );
}

#[test]
fn test_list_nested_directory() {
    let (_dir, store) = create_store();
    let listing = store.list("portraits").unwrap();

    assert_eq!(listing.directory, "portraits");
    assert_eq!(listing.files.len(), 1);
    assert_eq!(listing.files[0].name, "face.json");
    assert_eq!(listing.directories[0].path, "portraits/faces");

    let normalized = store.list("portraits/faces/..").unwrap();
    assert_eq!(normalized.directory, "portraits");
}

#[test]
fn test_list_rejects_traversal() {
    let (_dir, store) = create_store();

    assert!(matches!(
        store.list("../"),
        Err(StoreError::PathEscapesRoot(_))
    ));
    assert!(matches!(
        store.list("portraits/../../etc"),
        Err(StoreError::PathEscapesRoot(_))
    ));
    assert!(matches!(
        store.list("/etc"),
        Err(StoreError::PathEscapesRoot(_))
    ));
}

#[test]
fn test_list_missing_directory() {
    let (_dir, store) = create_store();
    assert!(matches!(store.list("missing"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.list("a.json"), Err(StoreError::NotFound(_))));
}

#[test]
fn test_read_file() {
    let (_dir, store) = create_store();

    assert_eq!(store.read_to_string("a.json").unwrap(), "{}");
    assert_eq!(
        store.read_to_string("portraits/face.json").unwrap(),
        "{\"nodes\": []}"
    );
}

#[test]
fn test_read_rejects_bad_names() {
    let (_dir, store) = create_store();

    assert!(matches!(
        store.read_to_string("notes.txt"),
        Err(StoreError::InvalidFileName(_))
    ));
    assert!(matches!(
        store.read_to_string("../secret.json"),
        Err(StoreError::PathEscapesRoot(_))
    ));
    assert!(matches!(
        store.read_to_string("missing.json"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn test_load_workflow() {
    let (_dir, store) = create_store();

    let workflow = store.load_workflow("b.json").unwrap();
    assert_eq!(workflow.nodes.len(), 5);

    fs::write(store.root().join("broken.json"), "[]").unwrap();
    assert!(matches!(
        store.load_workflow("broken.json"),
        Err(StoreError::Workflow(WorkflowError::NotAnObject(_)))
    ));
}

#[test]
fn test_listing_serializes_to_json() {
    let (_dir, store) = create_store();
    let value = serde_json::to_value(store.list("portraits").unwrap()).unwrap();

    assert_eq!(value["directory"], "portraits");
    assert_eq!(value["files"][0]["name"], "face.json");
    assert_eq!(value["directories"][0]["name"], "faces");
}

#[cfg(unix)]
#[test]
fn test_list_follows_symlinks() {
    use std::os::unix::fs::symlink;

    let outside = tempfile::tempdir().unwrap();
    fs::write(outside.path().join("real.json"), "{}").unwrap();
    fs::create_dir(outside.path().join("sub")).unwrap();

    let (dir, store) = create_store();
    symlink(outside.path().join("real.json"), dir.path().join("linked.json")).unwrap();
    symlink(outside.path().join("sub"), dir.path().join("linkdir")).unwrap();
    symlink(outside.path().join("gone.json"), dir.path().join("dangling.json")).unwrap();

    let listing = store.list(".").unwrap();
    let files: Vec<_> = listing.files.iter().map(|f| f.name.as_str()).collect();
    let directories: Vec<_> = listing.directories.iter().map(|d| d.name.as_str()).collect();

    assert_eq!(files, vec!["a.json", "b.json", "linked.json"]);
    assert_eq!(listing.files[2].size, 2);
    assert_eq!(directories, vec!["landscapes", "linkdir", "portraits"]);
    assert_eq!(store.read_to_string("linked.json").unwrap(), "{}");
    assert!(store.list("linkdir").unwrap().files.is_empty());
}

#[test]
fn test_ensure_root_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("locales"));

    assert!(matches!(store.list("."), Err(StoreError::NotFound(_))));

    store.ensure_root().unwrap();
    let listing = store.list(".").unwrap();
    assert_eq!(listing.directory, ".");
    assert!(listing.files.is_empty());
    assert!(listing.directories.is_empty());

    // Idempotent on an existing directory.
    store.ensure_root().unwrap();
}
