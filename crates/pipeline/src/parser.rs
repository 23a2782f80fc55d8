// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML parsing for pipelines and resource descriptors

use crate::document::PipelineDocument;
use crate::resource::Resource;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur reading or writing pipeline YAML
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("YAML emit error: {0}")]
    Emit(#[source] serde_yaml::Error),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a pipeline from YAML content.
///
/// An empty document parses to an empty pipeline.
pub fn parse_pipeline(content: &str) -> Result<PipelineDocument, ParseError> {
    if content.trim().is_empty() {
        return Ok(PipelineDocument::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a pipeline from a YAML file
pub fn parse_pipeline_file(path: &Path) -> Result<PipelineDocument, ParseError> {
    parse_pipeline(&read(path)?)
}

/// Parse a single resource specification.
///
/// The `name` key is optional here; descriptors get their name from where
/// they live on disk.
pub fn parse_resource(content: &str) -> Result<Resource, ParseError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a single resource specification from a YAML file
pub fn parse_resource_file(path: &Path) -> Result<Resource, ParseError> {
    parse_resource(&read(path)?)
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
