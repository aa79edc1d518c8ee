//! Shared helpers for the tempdir integration tests
#![allow(dead_code)]

use scopedir_tempdir::{Filesystem, LogSink, OsFilesystem};
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Sink that collects rendered lines
pub fn capture_lines() -> (LogSink, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    let sink = LogSink::callback(move |line| captured.lock().unwrap().push(line.to_string()));
    (sink, lines)
}

/// Real filesystem that counts mutating calls
#[derive(Debug, Default)]
pub struct RecordingFilesystem {
    pub creates: AtomicUsize,
    pub removes: AtomicUsize,
}

impl RecordingFilesystem {
    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        OsFilesystem.create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        OsFilesystem.create_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        OsFilesystem.exists(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        OsFilesystem.remove_dir_all(path)
    }
}

/// Real filesystem that refuses creation or removal with `PermissionDenied`
#[derive(Debug, Default)]
pub struct DenyingFilesystem {
    pub deny_create: bool,
    pub deny_remove: bool,
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied")
}

impl Filesystem for DenyingFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        OsFilesystem.create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        if self.deny_create {
            return Err(denied());
        }
        OsFilesystem.create_dir(path)
    }

    fn exists(&self, path: &Path) -> bool {
        OsFilesystem.exists(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.deny_remove {
            return Err(denied());
        }
        OsFilesystem.remove_dir_all(path)
    }
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
}

/// Whether directory permissions actually stop this process (they don't for root)
#[cfg(unix)]
pub fn permissions_enforced(scratch: &Path) -> bool {
    let probe = scratch.join("permission-probe");
    std::fs::create_dir(&probe).unwrap();
    set_mode(&probe, 0o555);
    let enforced = std::fs::create_dir(probe.join("child")).is_err();
    set_mode(&probe, 0o755);
    std::fs::remove_dir_all(&probe).unwrap();
    enforced
}
