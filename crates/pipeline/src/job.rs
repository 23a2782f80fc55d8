// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs and UI groups

use crate::plan::PlanStep;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A step in a job plan or hook.
///
/// Held as plain YAML so steps from an existing pipeline are emitted exactly
/// as read, whatever keys they use. Generated steps are converted from
/// [`PlanStep`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobStep(pub Value);

impl JobStep {
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// A top-level string field such as `get`, `file` or `resource`
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// The step's `get`/`put`/`task` name
    pub fn name(&self) -> Option<&str> {
        ["get", "put", "task"]
            .into_iter()
            .find_map(|key| self.str_field(key))
    }

    /// Look up a string parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.0.get("params")?.get(key)?.as_str()
    }

    /// Steps nested under `aggregate`, `in_parallel` (either form) or `do`
    pub fn children(&self) -> Vec<JobStep> {
        let nested = self
            .0
            .get("aggregate")
            .or_else(|| self.0.get("do"))
            .or_else(|| {
                let parallel = self.0.get("in_parallel")?;
                parallel.get("steps").or(Some(parallel))
            });
        nested
            .and_then(Value::as_sequence)
            .map(|steps| steps.iter().cloned().map(JobStep).collect())
            .unwrap_or_default()
    }
}

impl TryFrom<&PlanStep> for JobStep {
    type Error = serde_yaml::Error;

    fn try_from(step: &PlanStep) -> Result<Self, Self::Error> {
        serde_yaml::to_value(step).map(JobStep)
    }
}

/// A named unit of work with an ordered plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    /// Jobs sharing a serial group never run concurrently
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub serial_groups: Vec<String>,
    #[serde(default)]
    pub plan: Vec<JobStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<JobStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<JobStep>,
    /// Keys the tool does not interpret, preserved verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Job {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get a plan step by its `get`/`put`/`task` name
    pub fn step(&self, name: &str) -> Option<&JobStep> {
        self.plan.iter().find(|s| s.name() == Some(name))
    }
}

/// A named collection of job names used for UI grouping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    /// Keys the tool does not interpret, preserved verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn contains(&self, job: &str) -> bool {
        self.jobs.iter().any(|j| j == job)
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
