// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn empty_content_is_empty_pipeline() {
    let doc = parse_pipeline("  \n").unwrap();
    assert!(doc.resources.is_empty());
    assert!(doc.jobs.is_empty());
    assert!(doc.groups.is_empty());
}

#[test]
fn malformed_yaml_is_an_error() {
    let err = parse_pipeline("resources: [\n").unwrap_err();
    assert!(matches!(err, ParseError::Yaml(_)));
}

#[test]
fn wrong_shape_is_an_error() {
    assert!(parse_pipeline("jobs: not-a-list\n").is_err());
}

#[test]
fn parse_resource_descriptor() {
    let resource = parse_resource("type: git\nsource:\n  uri: https://example/libfoo\n").unwrap();
    assert_eq!(resource.kind, "git");
    assert_eq!(resource.source_str("uri"), Some("https://example/libfoo"));
}

#[test]
fn parse_resource_requires_type() {
    assert!(parse_resource("source: {uri: x}\n").is_err());
}

#[test]
fn parse_pipeline_file_reads_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "resources:\n- name: repo\n  type: git\n  source: {{uri: x}}").unwrap();

    let doc = parse_pipeline_file(file.path()).unwrap();
    assert!(doc.has_resource("repo"));
}

#[test]
fn missing_file_reports_path() {
    let err = parse_resource_file(Path::new("/nonexistent/resource.yml")).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/resource.yml"));
}
