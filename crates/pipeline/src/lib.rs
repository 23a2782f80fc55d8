// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Typed pipeline document model and YAML round-tripping

mod document;
mod job;
mod parser;
mod plan;
mod resource;

pub use document::PipelineDocument;
pub use job::{Group, Job, JobStep};
pub use parser::{
    parse_pipeline, parse_pipeline_file, parse_resource, parse_resource_file, ParseError,
};
pub use plan::{InParallel, InParallelConfig, PlanSequence, PlanStep};
pub use resource::Resource;
