// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job plan steps

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// An ordered sequence of plan steps
pub type PlanSequence = Vec<PlanStep>;

/// A single step in a job plan.
///
/// Unknown keys are rejected so that a fragment mangled by placeholder
/// substitution fails loudly instead of silently dropping fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanStep {
    /// Fetch a resource under this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,
    /// Push to a resource under this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<String>,
    /// Run a task under this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Steps run concurrently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<PlanSequence>,
    /// Steps run concurrently (newer spelling of `aggregate`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_parallel: Option<InParallel>,
    /// Steps run in order
    #[serde(rename = "do", default, skip_serializing_if = "Option::is_none")]
    pub do_steps: Option<PlanSequence>,
    /// Step whose failure is ignored
    #[serde(rename = "try", default, skip_serializing_if = "Option::is_none")]
    pub try_step: Option<Box<PlanStep>>,
    /// Configure a pipeline from a file under this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_pipeline: Option<String>,
    /// Load a file's content into a local variable under this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_var: Option<String>,

    /// Resource backing a `get`/`put` when it differs from the step name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passed: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub trigger: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_params: Option<Mapping>,
    /// Artifacts a `put` may see (`all`, `detect` or a list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_get: bool,

    /// Path to a task definition file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Inline task definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub privileged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mapping: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_mapping: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_limits: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub var_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_vars: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reveal: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    /// Run the step once per combination of the listed values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Box<PlanStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Box<PlanStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_abort: Option<Box<PlanStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_error: Option<Box<PlanStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensure: Option<Box<PlanStep>>,
}

impl PlanStep {
    /// A `get` step fetching the resource of the same name
    pub fn get(name: impl Into<String>) -> Self {
        Self {
            get: Some(name.into()),
            ..Self::default()
        }
    }

    /// A `task` step loading its definition from `file`
    pub fn task(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            task: Some(name.into()),
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// An `aggregate` step running `steps` concurrently
    pub fn aggregate(steps: PlanSequence) -> Self {
        Self {
            aggregate: Some(steps),
            ..Self::default()
        }
    }

    /// Fetch from `resource` instead of the resource named by the step
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Start the job whenever the fetched resource changes
    pub fn triggered(mut self) -> Self {
        self.trigger = true;
        self
    }

    /// Set a single string parameter, keeping insertion order
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Mapping::new)
            .insert(Value::String(key.to_string()), Value::String(value.into()));
        self
    }

    /// Look up a string parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key)?.as_str()
    }

    /// Steps nested directly under `aggregate`/`in_parallel`/`do`
    pub fn children(&self) -> &[PlanStep] {
        self.aggregate
            .as_deref()
            .or(self.in_parallel.as_ref().map(InParallel::steps))
            .or(self.do_steps.as_deref())
            .unwrap_or_default()
    }
}

/// `in_parallel` takes either a bare list of steps or a configured block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InParallel {
    Steps(PlanSequence),
    Config(InParallelConfig),
}

impl InParallel {
    pub fn steps(&self) -> &[PlanStep] {
        match self {
            InParallel::Steps(steps) => steps,
            InParallel::Config(config) => &config.steps,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InParallelConfig {
    pub steps: PlanSequence,
    /// Maximum number of steps run at once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fail_fast: bool,
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
