// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box behavior of `metalink-upgrader-pipeline`

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::*;
use predicates::prelude::*;

const BASE: &str = r#"
groups:
- name: all
  jobs: [test]
resources:
- name: repo
  type: git
  source:
    uri: https://example/release.git
jobs:
- name: test
  plan:
  - get: repo
    trigger: true
metalink_upgrader_pipeline:
  after_sync_blobs:
  - put: repo
    params:
      repository: repo
      rebase: true
  after_upload_blobs:
  - put: repo
    params:
      repository: repo
"#;

#[test]
fn generates_update_job_per_blob() {
    let project = Project::empty();
    project
        .pipeline(BASE)
        .blob("libfoo", "type: git\nsource:\n  uri: https://example/libfoo\n")
        .blob("zlib", "type: git\nsource:\n  uri: https://example/zlib\n");

    let doc = generated(project.run(METALINK_BIN));

    let names: Vec<_> = doc.jobs.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["test", "update-libfoo-blob", "update-zlib-blob"]);
    assert_eq!(
        doc.group("all").unwrap().jobs,
        vec!["test", "update-libfoo-blob", "update-zlib-blob"]
    );
    assert_eq!(
        doc.group("blobs").unwrap().jobs,
        vec!["update-libfoo-blob", "update-zlib-blob"]
    );
    assert!(doc.has_resource("metalink-upgrader-pipeline"));
    assert!(doc.has_resource("libfoo-blob"));
    assert!(doc.has_resource("zlib-blob"));

    let job = doc.job("update-libfoo-blob").unwrap();
    let steps: Vec<_> = job
        .plan
        .iter()
        .map(|s| s.name().unwrap_or("aggregate"))
        .collect();
    assert_eq!(steps, vec!["aggregate", "sync-blobs", "repo", "upload-blob", "repo"]);
}

#[test]
fn output_omits_ext_config() {
    let project = Project::empty();
    project
        .pipeline(BASE)
        .blob("libfoo", "type: git\nsource: {}\n");

    project
        .run(METALINK_BIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("metalink_upgrader_pipeline").not())
        .stdout(predicate::str::contains("update-libfoo-blob"));
}

#[test]
fn release_dir_defaults_to_current_directory() {
    let project = Project::empty();
    project
        .pipeline(BASE)
        .blob("libfoo", "type: git\nsource: {}\n");

    let doc = generated(project.run_in_place(METALINK_BIN));
    assert!(doc.job("update-libfoo-blob").is_some());
}

#[test]
fn no_blobs_leaves_jobs_untouched() {
    let project = Project::empty();
    project.pipeline(BASE);

    let doc = generated(project.run(METALINK_BIN));
    assert_eq!(doc.jobs.len(), 1);
    assert!(!doc.has_resource("metalink-upgrader-pipeline"));
    assert!(doc.group("blobs").unwrap().jobs.is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let project = Project::empty();
    project
        .pipeline(BASE)
        .blob("b", "type: git\nsource: {}\n")
        .blob("a", "type: git\nsource: {}\n");

    let first = project.run(METALINK_BIN).assert().success().get_output().stdout.clone();
    let second = project.run(METALINK_BIN).assert().success().get_output().stdout.clone();
    similar_asserts::assert_eq!(
        String::from_utf8(first).unwrap(),
        String::from_utf8(second).unwrap()
    );
}

#[test]
fn feeding_output_back_keeps_single_bootstrap() {
    let project = Project::empty();
    project
        .pipeline(BASE)
        .blob("libfoo", "type: git\nsource: {}\n");

    let once = project.run(METALINK_BIN).assert().success().get_output().stdout.clone();
    project.pipeline(&String::from_utf8(once).unwrap());
    let twice = generated(project.run(METALINK_BIN));

    let bootstraps = twice
        .resources
        .iter()
        .filter(|r| r.name == "metalink-upgrader-pipeline")
        .count();
    assert_eq!(bootstraps, 1);
    assert_eq!(twice.groups.iter().filter(|g| g.name == "blobs").count(), 1);
}

#[test]
fn base_jobs_using_newer_step_keys_are_passed_through() {
    let project = Project::empty();
    project
        .pipeline(
            r#"
resources:
- name: repo
  type: git
  source: {uri: https://example/release.git}
jobs:
- name: publish
  plan:
  - get: repo
  - load_var: version
    file: repo/VERSION
  - set_pipeline: self
    file: repo/ci/pipeline.yml
  - put: repo
    inputs: [repo]
    no_get: true
    params: {repository: repo}
    on_error:
      task: notify
      file: repo/ci/notify.yml
"#,
        )
        .blob("libfoo", "type: git\nsource: {}\n");

    let doc = generated(project.run(METALINK_BIN));
    let publish = doc.job("publish").unwrap();
    assert_eq!(publish.plan.len(), 4);
    assert_eq!(publish.plan[1].str_field("load_var"), Some("version"));
    assert!(publish.step("repo").is_some());
    assert!(publish.plan[3].value().get("on_error").is_some());
    assert!(doc.job("update-libfoo-blob").is_some());
}
