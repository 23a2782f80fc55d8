// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use bup_pipeline::{parse_pipeline, PipelineDocument};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const METALINK_BIN: &str = "metalink-upgrader-pipeline";
pub const BLOB_BIN: &str = "blob-upgrader-pipeline";

/// A release directory with a base pipeline and blob descriptors
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    pub fn pipeline(&self, content: &str) -> &Self {
        self.file("pipeline.yml", content)
    }

    /// Add `config/blobs/<name>/resource.yml`
    pub fn blob(&self, name: &str, descriptor: &str) -> &Self {
        self.file(&format!("config/blobs/{}/resource.yml", name), descriptor)
    }

    /// Run a binary with `pipeline.yml` and the project as release directory
    pub fn run(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary should be built");
        cmd.arg(self.path().join("pipeline.yml")).arg(self.path());
        cmd
    }

    /// Run a binary from inside the project without a release directory argument
    pub fn run_in_place(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary should be built");
        cmd.arg("pipeline.yml").current_dir(self.path());
        cmd
    }
}

/// Run to success and parse stdout as a pipeline
pub fn generated(mut cmd: Command) -> PipelineDocument {
    let output = cmd.assert().success().get_output().stdout.clone();
    let yaml = String::from_utf8(output).expect("stdout should be UTF-8");
    parse_pipeline(&yaml).expect("stdout should be a pipeline")
}
