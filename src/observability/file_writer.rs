//! Size-capped span file with numbered backups.
//!
//! Spans are emitted on every input event, so the trace file would grow for as
//! long as the page is open. [`RotatingFile`] caps it: once the file passes
//! its size limit it is shifted to `<name>.1`, older backups move up by one,
//! and anything past the backup limit is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Append-only line writer that rotates by size.
///
/// Not synchronized on its own; the exporter wraps it in a `Mutex`.
///
/// # Rotation Strategy
///
/// 1. Before each write, check the size of the file on disk
/// 2. If it exceeds the limit:
///    - Delete `<name>.<max_backups>` if present
///    - Rename `<name>.<n>` to `<name>.<n + 1>`, newest last
///    - Rename the live file to `<name>.1`
/// 3. Reopen the live file lazily
pub(super) struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily opened handle; dropped whenever the file is rotated away.
    file: Option<File>,
}

impl RotatingFile {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// Nothing is opened until the first write.
    pub(super) const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit limits.
    ///
    /// # Parameters
    ///
    /// * `max_bytes` - size past which the live file is rotated
    /// * `max_backups` - rotated files kept; `0` discards the old file outright
    pub(super) const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: None,
        }
    }

    /// Appends every line, each followed by a newline, then flushes.
    ///
    /// Rotation is checked once per call, so a single batch never spans two
    /// files.
    ///
    /// # Errors
    ///
    /// Fails if rotating, opening, writing or flushing fails.
    pub(super) fn write_lines<I>(&mut self, lines: I) -> std::io::Result<()>
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        self.rotate_if_needed()?;

        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.file = Some(file);
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No file available"))?;

        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()
    }

    fn rotate_if_needed(&mut self) -> std::io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() <= self.max_bytes {
            return Ok(());
        }

        self.file = None;

        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = backup_path(&self.file_path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, n + 1))?;
            }
        }

        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// `spans.jsonl` + 2 → `spans.jsonl.2`
fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "{\"name\":\"handle_event\"}";

    #[test]
    fn rotates_past_threshold_and_caps_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let mut writer = RotatingFile::with_limits(path.clone(), 32, 2);

        for _ in 0..10 {
            writer.write_lines([LINE]).unwrap();
        }

        assert!(path.exists());
        assert!(backup_path(&path, 1).exists());
        assert!(backup_path(&path, 2).exists());
        assert!(!backup_path(&path, 3).exists());

        let line_len = (LINE.len() + 1) as u64;
        for file in [path.clone(), backup_path(&path, 1), backup_path(&path, 2)] {
            assert!(fs::metadata(&file).unwrap().len() <= 2 * line_len, "{file:?}");
        }
    }

    #[test]
    fn newest_backup_holds_latest_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let mut writer = RotatingFile::with_limits(path.clone(), 1, 3);

        writer.write_lines(["first"]).unwrap();
        writer.write_lines(["second"]).unwrap();
        writer.write_lines(["third"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "third\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 1)).unwrap(), "second\n");
        assert_eq!(fs::read_to_string(backup_path(&path, 2)).unwrap(), "first\n");
    }

    #[test]
    fn zero_backups_truncates_instead() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let mut writer = RotatingFile::with_limits(path.clone(), 1, 0);

        writer.write_lines(["first"]).unwrap();
        writer.write_lines(["second"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn under_threshold_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let mut writer = RotatingFile::new(path.clone());

        writer.write_lines(["a", "b"]).unwrap();
        writer.write_lines(["c"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
        assert!(!backup_path(&path, 1).exists());
    }
}
