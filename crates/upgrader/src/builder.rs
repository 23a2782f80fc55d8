// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incremental construction of the augmented pipeline

use bup_pipeline::{Group, Job, PipelineDocument, Resource};

pub const GROUP_ALL: &str = "all";
pub const GROUP_BLOBS: &str = "blobs";

/// How a group that every generated job joins is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPolicy {
    pub name: &'static str,
    /// Append the group when the base pipeline lacks it
    pub ensure_exists: bool,
}

/// Groups every generated job is added to.
///
/// Both are created when missing, even when no jobs were generated.
pub const GROUP_POLICY: &[GroupPolicy] = &[
    GroupPolicy {
        name: GROUP_ALL,
        ensure_exists: true,
    },
    GroupPolicy {
        name: GROUP_BLOBS,
        ensure_exists: true,
    },
];

#[derive(Debug)]
enum GroupSlot {
    /// Index into the document's groups
    Existing(usize),
    /// Not in the document yet
    Detached(Group),
}

/// Owns the pipeline under construction.
///
/// Existing groups are extended in place; groups missing from the base
/// pipeline are collected on the side and appended by [`finish`] according
/// to their policy.
///
/// [`finish`]: PipelineBuilder::finish
#[derive(Debug)]
pub struct PipelineBuilder {
    doc: PipelineDocument,
    groups: Vec<(GroupPolicy, GroupSlot)>,
}

impl PipelineBuilder {
    pub fn new(doc: PipelineDocument) -> Self {
        Self::with_policy(doc, GROUP_POLICY)
    }

    pub fn with_policy(doc: PipelineDocument, policy: &[GroupPolicy]) -> Self {
        let groups = policy
            .iter()
            .map(|p| {
                let slot = match doc.groups.iter().position(|g| g.name == p.name) {
                    Some(idx) => GroupSlot::Existing(idx),
                    None => GroupSlot::Detached(Group::new(p.name)),
                };
                (*p, slot)
            })
            .collect();
        Self { doc, groups }
    }

    pub fn document(&self) -> &PipelineDocument {
        &self.doc
    }

    /// Append a resource unless one with the same name exists.
    /// Returns whether it was added.
    pub fn ensure_resource(&mut self, resource: Resource) -> bool {
        if self.doc.has_resource(&resource.name) {
            return false;
        }
        self.add_resource(resource);
        true
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.doc.resources.push(resource);
    }

    /// Append a job and list it in every tracked group
    pub fn add_job(&mut self, job: Job) {
        for (_, slot) in &mut self.groups {
            let group = match slot {
                GroupSlot::Existing(idx) => match self.doc.groups.get_mut(*idx) {
                    Some(group) => group,
                    None => continue,
                },
                GroupSlot::Detached(group) => group,
            };
            group.jobs.push(job.name.clone());
        }
        self.doc.jobs.push(job);
    }

    /// Append the detached groups that must exist and return the document
    pub fn finish(mut self) -> PipelineDocument {
        for (policy, slot) in self.groups {
            if let GroupSlot::Detached(group) = slot {
                if policy.ensure_exists {
                    self.doc.groups.push(group);
                }
            }
        }
        self.doc
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
