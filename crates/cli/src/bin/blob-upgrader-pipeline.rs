// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! blob-upgrader-pipeline - add blob upgrade jobs to a pipeline

fn main() -> anyhow::Result<()> {
    bup::main(bup_upgrader::Flavor::Blob)
}
