// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrader configuration embedded in the base pipeline

use crate::flavor::Flavor;
use bup_pipeline::{PipelineDocument, PlanSequence, PlanStep};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;

/// Errors in the embedded extension config
#[derive(Debug, Error)]
pub enum ExtConfigError {
    #[error("invalid {key}: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{key}.{field} is not supported by the {flavor} upgrader")]
    Unsupported {
        key: &'static str,
        field: &'static str,
        flavor: Flavor,
    },
}

/// Tool configuration read from the pipeline's reserved top-level key.
///
/// Plan fragments may contain [`crate::PLACEHOLDER`], which is replaced with
/// the repository name for each generated job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionConfig {
    /// Steps after `sync-blobs` (metalink flavor)
    #[serde(default)]
    pub after_sync_blobs: Option<PlanSequence>,
    /// Steps after `sync-blobs` (blob flavor)
    #[serde(default)]
    pub before_upload_blobs: Option<PlanSequence>,
    /// Enables the upload stage; these steps follow `upload-blob`.
    /// Presence counts, an empty list still enables upload.
    #[serde(default)]
    pub after_upload_blobs: Option<PlanSequence>,
    #[serde(default)]
    pub serial_groups: Vec<String>,
    /// File patterns passed to `sync-blobs`, space-joined
    #[serde(default)]
    pub track_files: Vec<String>,
    /// Default `check_every` for generated resources
    #[serde(default)]
    pub check_every: Option<String>,
    #[serde(default)]
    pub on_success: Option<PlanStep>,
    #[serde(default)]
    pub on_failure: Option<PlanStep>,
}

impl ExtensionConfig {
    /// Fragment spliced in right after `sync-blobs` for this flavor
    pub fn post_sync(&self, flavor: Flavor) -> Option<&PlanSequence> {
        match flavor {
            Flavor::Metalink => self.after_sync_blobs.as_ref(),
            Flavor::Blob => self.before_upload_blobs.as_ref(),
        }
    }

    /// Whether jobs get the `upload-blob` stage
    pub fn uploads(&self) -> bool {
        self.after_upload_blobs.is_some()
    }

    pub(crate) fn check_supported(&self, flavor: Flavor) -> Result<(), ExtConfigError> {
        let profile = flavor.profile();
        let caps = profile.capabilities;
        let post_sync_foreign = match flavor {
            Flavor::Metalink => ("before_upload_blobs", self.before_upload_blobs.is_some()),
            Flavor::Blob => ("after_sync_blobs", self.after_sync_blobs.is_some()),
        };
        let checks = [
            post_sync_foreign,
            ("serial_groups", !self.serial_groups.is_empty() && !caps.serial_groups),
            ("track_files", !self.track_files.is_empty() && !caps.track_files),
            ("check_every", self.check_every.is_some() && !caps.check_every),
            ("on_success", self.on_success.is_some() && !caps.hooks),
            ("on_failure", self.on_failure.is_some() && !caps.hooks),
        ];
        match checks.into_iter().find(|(_, rejected)| *rejected) {
            Some((field, _)) => Err(ExtConfigError::Unsupported {
                key: profile.ext_key,
                field,
                flavor,
            }),
            None => Ok(()),
        }
    }
}

/// Take the flavor's extension config out of the document.
///
/// The key is removed whether or not it parses, so the document never carries
/// it forward. A missing or null block yields the default config.
pub fn extract_ext_config(
    doc: &mut PipelineDocument,
    flavor: Flavor,
) -> Result<ExtensionConfig, ExtConfigError> {
    let key = flavor.profile().ext_key;
    let config = match doc.take_extension(key) {
        None | Some(Value::Null) => ExtensionConfig::default(),
        Some(value) => serde_yaml::from_value(value)
            .map_err(|source| ExtConfigError::Invalid { key, source })?,
    };
    config.check_supported(flavor)?;
    Ok(config)
}

#[cfg(test)]
#[path = "ext_config_tests.rs"]
mod tests;
