// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! metalink-upgrader-pipeline - add metalink blob update jobs to a pipeline

fn main() -> anyhow::Result<()> {
    bup::main(bup_upgrader::Flavor::Metalink)
}
