//! Creation, ownership and policy-driven cleanup of managed directories

mod common;

use common::RecordingFilesystem;
use scopedir_tempdir::{Cleanup, Config, TempDir, TempDirError};
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

/// Create a handle, then panic while it is alive; returns the handle's path
fn path_after_panicking_scope(make: impl FnOnce() -> TempDir) -> PathBuf {
    let mut path = PathBuf::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let dir = make();
        path = dir.path().to_path_buf();
        assert!(path.is_dir());
        panic!("some-expected-test-error");
    }));
    assert!(result.is_err());
    path
}

#[test]
fn test_default_location_is_os_temp_dir() {
    let dir = TempDir::new().unwrap();
    assert!(dir.path().is_dir());
    assert_eq!(dir.path().parent().unwrap(), std::env::temp_dir());
    assert!(dir
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("temp_dir_"));
}

#[test]
fn test_root_path_is_configurable() {
    let scratch = tempfile::tempdir().unwrap();
    let root = scratch.path().join("my-custom-root");

    let dir_1 = TempDir::in_root(&root).unwrap();
    assert!(dir_1.path().is_dir());
    assert_eq!(dir_1.path().parent().unwrap(), root);

    let dir_2 = TempDir::in_root_with_cleanup(&root, Cleanup::OnSuccess).unwrap();
    assert_eq!(dir_2.path().parent().unwrap(), root);
    assert_eq!(dir_2.cleanup_policy(), Cleanup::OnSuccess);

    let dir_3 = TempDir::with_config(Config::default().with_root_path(&root)).unwrap();
    assert_eq!(dir_3.path().parent().unwrap(), root);
}

#[test]
fn test_missing_intermediate_directories_are_created() {
    let scratch = tempfile::tempdir().unwrap();
    let root = scratch.path().join("a").join("b").join("c");

    let dir = TempDir::in_root(&root).unwrap();
    assert!(dir.path().is_dir());
    assert!(dir.path().is_absolute());
}

#[test]
fn test_prefix_is_configurable() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = TempDir::with_config(
        Config::default()
            .with_root_path(scratch.path())
            .with_prefix("my-project"),
    )
    .unwrap();

    let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("my-project_"));
}

#[test]
fn test_rapid_constructions_get_distinct_paths() {
    let scratch = tempfile::tempdir().unwrap();
    let dirs: Vec<TempDir> = (0..100)
        .map(|_| TempDir::in_root(scratch.path()).unwrap())
        .collect();

    let unique: HashSet<_> = dirs.iter().map(|d| d.path().to_path_buf()).collect();
    assert_eq!(unique.len(), dirs.len());
}

#[test]
fn test_moved_handle_keeps_directory_alive() {
    let scratch = tempfile::tempdir().unwrap();
    let dir_1 = TempDir::in_root(scratch.path()).unwrap();
    let path = dir_1.path().to_path_buf();

    let dir_2 = dir_1;
    assert!(path.is_dir());
    assert_eq!(dir_2.path(), path);

    let moved_into_vec = vec![dir_2];
    assert!(path.is_dir());
    drop(moved_into_vec);
    assert!(!path.exists());
}

#[test]
fn test_always_removes_on_clean_exit() {
    let scratch = tempfile::tempdir().unwrap();
    let path = {
        let dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::Always).unwrap();
        std::fs::write(dir.path().join("test.txt"), "Hello, world!").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        dir.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[test]
fn test_always_removes_on_panic() {
    let scratch = tempfile::tempdir().unwrap();
    let root = scratch.path().to_path_buf();
    let path = path_after_panicking_scope(|| {
        TempDir::in_root_with_cleanup(&root, Cleanup::Always).unwrap()
    });
    assert!(!path.exists());
}

#[test]
fn test_never_keeps_on_clean_exit() {
    let scratch = tempfile::tempdir().unwrap();
    let path = {
        let dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::Never).unwrap();
        dir.path().to_path_buf()
    };
    assert!(path.is_dir());
}

#[test]
fn test_never_keeps_on_panic() {
    let scratch = tempfile::tempdir().unwrap();
    let root = scratch.path().to_path_buf();
    let path = path_after_panicking_scope(|| {
        TempDir::in_root_with_cleanup(&root, Cleanup::Never).unwrap()
    });
    assert!(path.is_dir());
}

#[test]
fn test_on_success_removes_on_clean_exit() {
    let scratch = tempfile::tempdir().unwrap();
    let path = {
        let dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::OnSuccess).unwrap();
        dir.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[test]
fn test_on_success_keeps_on_panic() {
    let scratch = tempfile::tempdir().unwrap();
    let root = scratch.path().to_path_buf();
    let path = path_after_panicking_scope(|| {
        TempDir::in_root_with_cleanup(&root, Cleanup::OnSuccess).unwrap()
    });
    assert!(path.is_dir());
}

#[test]
fn test_on_success_keeps_when_marked_failed() {
    let scratch = tempfile::tempdir().unwrap();
    let path = {
        let mut dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::OnSuccess).unwrap();
        assert!(!dir.is_marked_failed());
        dir.mark_failed();
        assert!(dir.is_marked_failed());
        dir.path().to_path_buf()
    };
    assert!(path.is_dir());
}

#[test]
fn test_always_ignores_failure_mark() {
    let scratch = tempfile::tempdir().unwrap();
    let path = {
        let mut dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::Always).unwrap();
        dir.mark_failed();
        dir.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[test]
fn test_scope_outcome_drives_on_success() {
    let scratch = tempfile::tempdir().unwrap();
    let config = Config::default()
        .with_root_path(scratch.path())
        .with_cleanup(Cleanup::OnSuccess);

    let ok_path = TempDir::scope(config.clone(), |dir| {
        std::fs::write(dir.path().join("out.txt"), "ok").unwrap();
        Ok::<_, TempDirError>(dir.path().to_path_buf())
    })
    .unwrap();
    assert!(!ok_path.exists());

    let mut failed_path = PathBuf::new();
    let result: Result<(), Box<dyn std::error::Error>> = TempDir::scope(config, |dir| {
        failed_path = dir.path().to_path_buf();
        Err("assertion on directory contents failed".into())
    });
    assert!(result.is_err());
    assert!(failed_path.is_dir());
}

#[test]
fn test_scope_reports_construction_failure() {
    let scratch = tempfile::tempdir().unwrap();
    let file_root = scratch.path().join("plain-file");
    std::fs::write(&file_root, "not a directory").unwrap();

    let mut called = false;
    let result: Result<(), TempDirError> =
        TempDir::scope(Config::default().with_root_path(&file_root), |_| {
            called = true;
            Ok(())
        });
    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn test_explicit_cleanup_is_idempotent() {
    let scratch = tempfile::tempdir().unwrap();
    let fs = Arc::new(RecordingFilesystem::default());
    let dir = TempDir::with_config_and_filesystem(
        Config::default().with_root_path(scratch.path()),
        fs.clone(),
    )
    .unwrap();
    let path = dir.path().to_path_buf();

    dir.cleanup().unwrap();
    assert!(!path.exists());
    assert_eq!(fs.removes(), 1);

    dir.cleanup().unwrap();
    assert_eq!(fs.removes(), 1);

    drop(dir);
    assert_eq!(fs.removes(), 1);
}

#[test]
fn test_cleanup_after_external_removal_is_quiet() {
    let scratch = tempfile::tempdir().unwrap();
    let (sink, lines) = common::capture_lines();
    let dir = TempDir::with_config(
        Config::default()
            .with_root_path(scratch.path())
            .log_to(sink),
    )
    .unwrap();

    std::fs::remove_dir_all(dir.path()).unwrap();
    dir.cleanup().unwrap();
    drop(dir);

    assert_eq!(lines.lock().unwrap().len(), 1);
}

#[test]
fn test_persist_leaves_directory() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = TempDir::in_root_with_cleanup(scratch.path(), Cleanup::Always).unwrap();
    let expected = dir.path().to_path_buf();

    let path = dir.persist();
    assert_eq!(path, expected);
    assert!(path.is_dir());
}

#[test]
fn test_path_as_ref() {
    let scratch = tempfile::tempdir().unwrap();
    let dir = TempDir::in_root(scratch.path()).unwrap();
    let file = dir.as_ref().join("test.txt");
    std::fs::write(&file, "Hello, world!").unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap().len(), 13);
    assert_eq!(dir.config().root_path, scratch.path());
}
