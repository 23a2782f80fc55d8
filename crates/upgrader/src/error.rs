// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::discovery::DiscoveryError;
use crate::ext_config::ExtConfigError;
use crate::template::TemplateError;
use bup_pipeline::ParseError;
use thiserror::Error;

/// Any failure while generating an upgrader pipeline. None are recoverable.
#[derive(Debug, Error)]
pub enum UpgradeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    ExtConfig(#[from] ExtConfigError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}
