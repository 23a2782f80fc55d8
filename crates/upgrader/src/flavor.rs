// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrader flavors and what each one supports

use bup_pipeline::Resource;
use std::fmt;

/// Which upgrader pipeline is being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Minimal flavor: sync, optional upload, `update-*` jobs
    Metalink,
    /// Extended flavor: serial groups, hooks, tracked files, `upgrade-*` jobs
    Blob,
}

/// The companion repository providing `sync-blobs` and `upload-blobs` tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    pub name: &'static str,
    pub uri: &'static str,
}

impl Bootstrap {
    pub fn resource(&self) -> Resource {
        Resource::git(self.name, self.uri)
    }

    /// Path of a task definition inside the fetched bootstrap resource
    pub fn task_file(&self, task: &str) -> String {
        format!("{}/tasks/{}.yml", self.name, task)
    }
}

/// Optional parts of the extension config a flavor accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub serial_groups: bool,
    pub track_files: bool,
    pub hooks: bool,
    pub check_every: bool,
}

/// Static description of a flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Top-level pipeline key holding the extension config
    pub ext_key: &'static str,
    /// Prefix of generated job names
    pub job_prefix: &'static str,
    pub bootstrap: Bootstrap,
    /// Extension key of the fragment spliced in after `sync-blobs`
    pub post_sync_key: &'static str,
    pub capabilities: Capabilities,
}

static METALINK: Profile = Profile {
    ext_key: "metalink_upgrader_pipeline",
    job_prefix: "update",
    bootstrap: Bootstrap {
        name: "metalink-upgrader-pipeline",
        uri: "https://github.com/dpb587/metalink-upgrader-pipeline.git",
    },
    post_sync_key: "after_sync_blobs",
    capabilities: Capabilities {
        serial_groups: false,
        track_files: false,
        hooks: false,
        check_every: false,
    },
};

static BLOB: Profile = Profile {
    ext_key: "blob_upgrader_pipeline",
    job_prefix: "upgrade",
    bootstrap: Bootstrap {
        name: "blob-upgrader-pipeline",
        uri: "https://github.com/dpb587/bosh-release-blobs-upgrader-pipeline.git",
    },
    post_sync_key: "before_upload_blobs",
    capabilities: Capabilities {
        serial_groups: true,
        track_files: true,
        hooks: true,
        check_every: true,
    },
};

/// Name of the resource generated for a repository, the same in every flavor
pub fn resource_name(repository: &str) -> String {
    format!("{}-blob", repository)
}

impl Flavor {
    pub fn profile(self) -> &'static Profile {
        match self {
            Flavor::Metalink => &METALINK,
            Flavor::Blob => &BLOB,
        }
    }

    /// Name of the job generated for a repository
    pub fn job_name(self, repository: &str) -> String {
        format!("{}-{}-blob", self.profile().job_prefix, repository)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Metalink => write!(f, "metalink"),
            Flavor::Blob => write!(f, "blob"),
        }
    }
}

#[cfg(test)]
#[path = "flavor_tests.rs"]
mod tests;
