// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline resources

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A named, typed data source the pipeline fetches from or pushes to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name, unique within a pipeline
    #[serde(default)]
    pub name: String,
    /// Resource type (`git`, `s3`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Type-specific source parameters
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub source: Mapping,
    /// How often the resource is checked for new versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_every: Option<String>,
    /// Keys the tool does not interpret, preserved verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Resource {
    /// A `git` resource pointing at `uri`
    pub fn git(name: impl Into<String>, uri: impl Into<String>) -> Self {
        let mut source = Mapping::new();
        source.insert(Value::String("uri".to_string()), Value::String(uri.into()));
        Self {
            name: name.into(),
            kind: "git".to_string(),
            source,
            ..Self::default()
        }
    }

    /// Look up a string source parameter
    pub fn source_str(&self, key: &str) -> Option<&str> {
        self.source.get(key)?.as_str()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
