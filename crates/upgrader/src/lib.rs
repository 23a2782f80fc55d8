// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Blob upgrader pipeline synthesis
//!
//! Reads a base pipeline, discovers blob repositories under
//! `config/blobs/*/resource.yml`, and appends one resource and one sync job
//! per repository.

mod augment;
mod builder;
mod discovery;
mod error;
mod ext_config;
mod flavor;
mod template;

pub use augment::{augment, augment_with_config};
pub use builder::{GroupPolicy, PipelineBuilder, GROUP_ALL, GROUP_BLOBS, GROUP_POLICY};
pub use discovery::{
    discover, DiscoveryError, RepositoryDescriptor, BLOBS_DIR, DESCRIPTOR_FILE,
};
pub use error::UpgradeError;
pub use ext_config::{extract_ext_config, ExtConfigError, ExtensionConfig};
pub use flavor::{resource_name, Bootstrap, Capabilities, Flavor, Profile};
pub use template::{instantiate, instantiate_str, TemplateError, PLACEHOLDER};
