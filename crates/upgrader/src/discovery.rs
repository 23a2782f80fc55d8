// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blob repository discovery under `config/blobs/*/resource.yml`

use bup_pipeline::{parse_resource_file, ParseError, Resource};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory, relative to the release root, holding one subdirectory per repository
pub const BLOBS_DIR: &str = "config/blobs";

/// Descriptor file name inside each repository directory
pub const DESCRIPTOR_FILE: &str = "resource.yml";

/// Errors that can occur while discovering repositories
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid descriptor {path}: {source}")]
    Descriptor {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// A discovered blob repository
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryDescriptor {
    /// Name of the directory containing the descriptor
    pub name: String,
    /// Resource specification; its name is replaced during augmentation
    pub resource: Resource,
}

impl RepositoryDescriptor {
    pub fn new(name: impl Into<String>, resource: Resource) -> Self {
        Self {
            name: name.into(),
            resource,
        }
    }
}

/// Find every `<root>/config/blobs/<name>/resource.yml`, sorted by name.
///
/// A missing `config/blobs` directory means no repositories. Any unreadable
/// or malformed descriptor fails the whole discovery.
pub fn discover(root: &Path) -> Result<Vec<RepositoryDescriptor>, DiscoveryError> {
    let dir = root.join(BLOBS_DIR);
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %dir.display(), "no blobs directory");
            return Ok(Vec::new());
        }
        Err(source) => return Err(DiscoveryError::Io { path: dir, source }),
    };

    let mut repositories = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path().join(DESCRIPTOR_FILE);
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let resource = parse_resource_file(&path).map_err(|source| DiscoveryError::Descriptor {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(repository = %name, kind = %resource.kind, "discovered blob repository");
        repositories.push(RepositoryDescriptor::new(name, resource));
    }

    repositories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(repositories)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
