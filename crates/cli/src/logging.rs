// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics go to stderr; stdout carries only the pipeline

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Level comes from `RUST_LOG`, default `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
