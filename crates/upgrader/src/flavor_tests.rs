use super::*;

#[test]
fn resource_name_appends_blob_suffix() {
    assert_eq!(resource_name("libfoo"), "libfoo-blob");
    assert_eq!(resource_name("my-lib"), "my-lib-blob");
}

#[test]
fn job_name_uses_flavor_prefix() {
    assert_eq!(Flavor::Metalink.job_name("libfoo"), "update-libfoo-blob");
    assert_eq!(Flavor::Blob.job_name("libfoo"), "upgrade-libfoo-blob");
}

#[test]
fn bootstrap_task_file_lives_in_bootstrap_resource() {
    let bootstrap = Flavor::Metalink.profile().bootstrap;
    assert_eq!(
        bootstrap.task_file("sync-blobs"),
        "metalink-upgrader-pipeline/tasks/sync-blobs.yml"
    );
    let resource = bootstrap.resource();
    assert_eq!(resource.name, "metalink-upgrader-pipeline");
    assert_eq!(resource.kind, "git");
}

#[test]
fn only_blob_flavor_has_capabilities() {
    assert_eq!(Flavor::Metalink.profile().capabilities, Capabilities::default());
    let caps = Flavor::Blob.profile().capabilities;
    assert!(caps.hooks && caps.serial_groups && caps.track_files && caps.check_every);
}

#[test]
fn ext_keys_differ() {
    assert_ne!(Flavor::Metalink.profile().ext_key, Flavor::Blob.profile().ext_key);
    assert_eq!(Flavor::Blob.to_string(), "blob");
}
