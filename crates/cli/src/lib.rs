// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shared entry point for the upgrader pipeline binaries.
//!
//! Each binary reads a base pipeline, discovers blob repositories under the
//! release directory and prints the augmented pipeline to stdout. Nothing is
//! printed unless the whole run succeeds.

mod logging;

use anyhow::{Context, Result};
use bup_pipeline::parse_pipeline_file;
use bup_upgrader::{augment, discover, Flavor};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Base pipeline YAML file
    pub pipeline: PathBuf,

    /// Release directory containing config/blobs [default: current directory]
    pub release_dir: Option<PathBuf>,
}

/// Binary name for a flavor
pub fn binary_name(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::Metalink => "metalink-upgrader-pipeline",
        Flavor::Blob => "blob-upgrader-pipeline",
    }
}

fn about(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::Metalink => "Add metalink blob update jobs to a Concourse pipeline",
        Flavor::Blob => "Add blob upgrade jobs to a Concourse pipeline",
    }
}

/// Parse arguments, generate the pipeline and print it
pub fn main(flavor: Flavor) -> Result<()> {
    logging::init();

    let matches = Args::command()
        .name(binary_name(flavor))
        .about(about(flavor))
        .get_matches();
    let args = Args::from_arg_matches(&matches)?;

    let yaml = generate(flavor, &args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .context("failed to write pipeline")?;
    stdout.flush().context("failed to write pipeline")?;
    Ok(())
}

/// Generate the augmented pipeline YAML
pub fn generate(flavor: Flavor, args: &Args) -> Result<String> {
    let release_dir = match &args.release_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    tracing::debug!(
        %flavor,
        pipeline = %args.pipeline.display(),
        release_dir = %release_dir.display(),
        "generating pipeline"
    );

    let base = parse_pipeline_file(&args.pipeline)
        .with_context(|| format!("failed to load pipeline {}", args.pipeline.display()))?;
    let repositories = discover(&release_dir).with_context(|| {
        format!(
            "failed to discover blob repositories in {}",
            release_dir.display()
        )
    })?;

    let doc = augment(flavor, base, &repositories)?;
    Ok(doc.to_yaml()?)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
