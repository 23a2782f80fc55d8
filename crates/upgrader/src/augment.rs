// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline augmentation: one resource and one sync job per repository

use crate::builder::PipelineBuilder;
use crate::discovery::RepositoryDescriptor;
use crate::error::UpgradeError;
use crate::ext_config::{extract_ext_config, ExtensionConfig};
use crate::flavor::{resource_name, Flavor};
use crate::template::{instantiate, instantiate_str, TemplateError};
use bup_pipeline::{Job, JobStep, PipelineDocument, PlanStep, Resource};

/// Step name the blob resource is fetched under
const BLOB_INPUT: &str = "blob";
/// Step name of the release repository, which the base pipeline must define
const REPO_INPUT: &str = "repo";

const SYNC_TASK: &str = "sync-blobs";
const UPLOAD_TASK: &str = "upload-blob";
const UPLOAD_TASK_FILE: &str = "upload-blobs";

/// Augment `base` with jobs for `repositories`, reading the extension config
/// from the flavor's key in `base` and removing it.
pub fn augment(
    flavor: Flavor,
    mut base: PipelineDocument,
    repositories: &[RepositoryDescriptor],
) -> Result<PipelineDocument, UpgradeError> {
    let ext = extract_ext_config(&mut base, flavor)?;
    augment_with_config(flavor, base, &ext, repositories)
}

/// Augment `base` with jobs for `repositories` using an explicit config.
///
/// The flavor's extension key is stripped from the result either way.
pub fn augment_with_config(
    flavor: Flavor,
    mut base: PipelineDocument,
    ext: &ExtensionConfig,
    repositories: &[RepositoryDescriptor],
) -> Result<PipelineDocument, UpgradeError> {
    ext.check_supported(flavor)?;
    let profile = flavor.profile();
    base.take_extension(profile.ext_key);

    let mut builder = PipelineBuilder::new(base);

    if !repositories.is_empty() && builder.ensure_resource(profile.bootstrap.resource()) {
        tracing::debug!(resource = profile.bootstrap.name, "added bootstrap resource");
    }

    for repository in repositories {
        let resource = blob_resource(ext, repository);
        let job = blob_job(flavor, ext, &repository.name, &resource.name)?;
        tracing::debug!(
            repository = %repository.name,
            resource = %resource.name,
            job = %job.name,
            steps = job.plan.len(),
            "generated blob job"
        );
        builder.add_resource(resource);
        builder.add_job(job);
    }

    let doc = builder.finish();
    tracing::info!(
        %flavor,
        repositories = repositories.len(),
        jobs = doc.jobs.len(),
        "augmented pipeline"
    );
    Ok(doc)
}

fn blob_resource(ext: &ExtensionConfig, repository: &RepositoryDescriptor) -> Resource {
    let mut resource = repository.resource.clone();
    resource.name = resource_name(&repository.name);
    if resource.check_every.is_none() {
        resource.check_every = ext.check_every.clone();
    }
    resource
}

fn blob_job(
    flavor: Flavor,
    ext: &ExtensionConfig,
    repository: &str,
    resource: &str,
) -> Result<Job, TemplateError> {
    let profile = flavor.profile();
    let bootstrap = profile.bootstrap;
    let mut plan = vec![PlanStep::aggregate(vec![
        PlanStep::get(BLOB_INPUT).with_resource(resource).triggered(),
        PlanStep::get(REPO_INPUT),
        PlanStep::get(bootstrap.name),
    ])];

    let mut sync =
        PlanStep::task(SYNC_TASK, bootstrap.task_file(SYNC_TASK)).with_param("blob", repository);
    if profile.capabilities.track_files {
        let files: Vec<String> = ext
            .track_files
            .iter()
            .map(|f| instantiate_str(f, repository))
            .collect();
        sync = sync.with_param("track_files", files.join(" "));
    }
    plan.push(sync);

    if let Some(fragment) = ext.post_sync(flavor) {
        plan.extend(instantiate(fragment, repository)?);
    }

    if let Some(fragment) = &ext.after_upload_blobs {
        plan.push(
            PlanStep::task(UPLOAD_TASK, bootstrap.task_file(UPLOAD_TASK_FILE))
                .with_param("release_private_yml", "((release_private_yml))")
                .with_param("git_user_email", "((maintainer_email))")
                .with_param("git_user_name", "((maintainer_name))"),
        );
        plan.extend(instantiate(fragment, repository)?);
    }

    let mut job = Job::new(flavor.job_name(repository));
    job.plan = plan.iter().map(job_step).collect::<Result<_, _>>()?;
    job.serial_groups = ext
        .serial_groups
        .iter()
        .map(|g| instantiate_str(g, repository))
        .collect();
    job.on_success = hook(ext.on_success.as_ref(), repository)?;
    job.on_failure = hook(ext.on_failure.as_ref(), repository)?;

    Ok(job)
}

fn hook(step: Option<&PlanStep>, repository: &str) -> Result<Option<JobStep>, TemplateError> {
    step.map(|step| job_step(&instantiate(step, repository)?)).transpose()
}

fn job_step(step: &PlanStep) -> Result<JobStep, TemplateError> {
    JobStep::try_from(step).map_err(TemplateError::Serialize)
}

#[cfg(test)]
#[path = "augment_tests.rs"]
mod tests;
