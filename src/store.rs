//! Read-only access to directories of `.json` documents.
//!
//! Used for saved workflows (nested folders allowed) and locale tables
//! (flat). Every path handed in is resolved lexically against the store
//! root and rejected if it would leave it.

use crate::error::StoreError;
use crate::workflow::Workflow;
use itertools::Itertools;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::UNIX_EPOCH;

const JSON_EXTENSION: &str = ".json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, seconds since the Unix epoch.
    pub modified: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    /// Path relative to the store root, `/`-separated.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    /// The listed directory relative to the store root; `"."` for the root itself.
    pub directory: String,
    pub files: Vec<FileEntry>,
    pub directories: Vec<DirectoryEntry>,
}

/// A directory of JSON documents.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Lists the `.json` files and sub-directories of `subpath`, sorted by name.
    pub fn list(&self, subpath: &str) -> Result<DirectoryListing, StoreError> {
        let parts = contained_parts(subpath)?;
        let target = join_parts(&self.root, &parts);
        if !target.is_dir() {
            return Err(StoreError::NotFound(subpath.to_string()));
        }

        let relative = relative_display(&parts);
        let mut files = Vec::new();
        let mut directories = Vec::new();

        for entry in fs::read_dir(&target)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follows symlinks; dangling links are left out.
            let Ok(metadata) = fs::metadata(entry.path()) else {
                log::debug!("Skipping unreadable entry '{}'", entry.path().display());
                continue;
            };
            if metadata.is_file() {
                if !name.ends_with(JSON_EXTENSION) {
                    continue;
                }
                let modified = metadata
                    .modified()
                    .ok()
                    .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                    .map_or(0.0, |elapsed| elapsed.as_secs_f64());
                files.push(FileEntry {
                    name,
                    size: metadata.len(),
                    modified,
                });
            } else if metadata.is_dir() {
                let path = if parts.is_empty() {
                    name.clone()
                } else {
                    format!("{relative}/{name}")
                };
                directories.push(DirectoryEntry { name, path });
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        directories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(DirectoryListing {
            directory: relative,
            files,
            directories,
        })
    }

    /// Reads the raw contents of a `.json` file inside the store.
    pub fn read_to_string(&self, filename: &str) -> Result<String, StoreError> {
        let path = self.file_path(filename)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Reads and decodes a saved workflow.
    pub fn load_workflow(&self, filename: &str) -> Result<Workflow, StoreError> {
        let content = self.read_to_string(filename)?;
        Ok(Workflow::from_json(&content)?)
    }

    /// Resolves `filename` to an existing `.json` file inside the store.
    pub fn file_path(&self, filename: &str) -> Result<PathBuf, StoreError> {
        if !filename.ends_with(JSON_EXTENSION) {
            return Err(StoreError::InvalidFileName(filename.to_string()));
        }
        let parts = contained_parts(filename)?;
        let path = join_parts(&self.root, &parts);
        if !path.is_file() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        Ok(path)
    }
}

/// Normalizes a relative path lexically. Fails if it is absolute or climbs
/// above its starting point.
fn contained_parts(relative: &str) -> Result<Vec<&OsStr>, StoreError> {
    let mut parts = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(StoreError::PathEscapesRoot(relative.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(StoreError::PathEscapesRoot(relative.to_string()));
            }
        }
    }
    Ok(parts)
}

fn join_parts(root: &Path, parts: &[&OsStr]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}

fn relative_display(parts: &[&OsStr]) -> String {
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.iter().map(|part| part.to_string_lossy()).join("/")
    }
}
