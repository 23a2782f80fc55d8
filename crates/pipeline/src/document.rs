// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The full pipeline document

use crate::job::{Group, Job};
use crate::parser::ParseError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A CI pipeline: resources, jobs and groups, plus anything else found at
/// the top level.
///
/// Top-level keys other than the four known sections land in `extra` and are
/// emitted unchanged, which is also where tool-specific configuration blocks
/// live until they are taken out with [`PipelineDocument::take_extension`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Custom resource types, never interpreted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_types: Vec<Value>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl PipelineDocument {
    /// Get a resource by name
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Get a job by name
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.name == name)
    }

    /// Get a group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn has_resource(&self, name: &str) -> bool {
        self.resource(name).is_some()
    }

    /// Remove a top-level key and return its value, if it was present
    pub fn take_extension(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    /// Serialize the document to YAML
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        serde_yaml::to_string(self).map_err(ParseError::Emit)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
