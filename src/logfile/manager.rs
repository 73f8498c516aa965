use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use chrono::Local;

/// Manages a set of named log files and writes timestamped lines to them.
///
/// Files must be opened before they can be written; reading goes straight
/// to disk and works whether or not the file is currently open. Open files
/// are buffered and flushed after every write, and anything still open is
/// flushed when the manager is dropped.
#[derive(Default)]
pub struct LogFileManager {
    files: HashMap<String, BufWriter<File>>,
}

impl LogFileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (create or truncate) a log file for writing.
    ///
    /// Opening a file that is already open is a no-op success, matching
    /// the rest of the API's idempotent style.
    pub fn open(&mut self, name: &str) -> Result<()> {
        if self.files.contains_key(name) {
            return Ok(());
        }

        let file =
            File::create(name).with_context(|| format!("failed to open log file '{name}'"))?;
        self.files.insert(name.to_string(), BufWriter::new(file));
        tracing::debug!("opened log file '{name}'");
        Ok(())
    }

    /// Append a timestamped message line to an open log file.
    ///
    /// The line format is `[YYYY-MM-DD HH:MM:SS] message`. Fails if the
    /// file was never opened (or has been closed).
    pub fn write(&mut self, name: &str, message: &str) -> Result<()> {
        let Some(writer) = self.files.get_mut(name) else {
            bail!("log file '{name}' is not open");
        };

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(writer, "[{timestamp}] {message}")
            .with_context(|| format!("failed to write to log file '{name}'"))?;
        writer
            .flush()
            .with_context(|| format!("failed to flush log file '{name}'"))
    }

    /// Read every line of a log file from disk.
    pub fn read(&self, name: &str) -> Result<Vec<String>> {
        let file = File::open(name).with_context(|| format!("failed to read log file '{name}'"))?;
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("failed to read log file '{name}'"))
    }

    /// Flush and close an open log file.
    pub fn close(&mut self, name: &str) -> Result<()> {
        let Some(mut writer) = self.files.remove(name) else {
            bail!("log file '{name}' is not open");
        };

        writer
            .flush()
            .with_context(|| format!("failed to flush log file '{name}' on close"))?;
        tracing::debug!("closed log file '{name}'");
        Ok(())
    }

    /// Whether a file is currently open for writing.
    pub fn is_open(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Number of currently open log files.
    pub fn open_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_in(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().to_string()
    }

    #[test]
    fn open_write_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "app.log");
        let mut manager = LogFileManager::new();

        manager.open(&path).unwrap();
        manager.write(&path, "server started").unwrap();
        manager.write(&path, "client connected").unwrap();

        let lines = manager.read(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("server started"));
        assert!(lines[1].ends_with("client connected"));
    }

    #[test]
    fn lines_carry_timestamp_prefix() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "ts.log");
        let mut manager = LogFileManager::new();

        manager.open(&path).unwrap();
        manager.write(&path, "hello").unwrap();

        let lines = manager.read(&path).unwrap();
        // "[YYYY-MM-DD HH:MM:SS] hello"
        assert!(lines[0].starts_with('['));
        assert_eq!(lines[0].chars().nth(20), Some(']'));
        assert!(lines[0].ends_with("] hello"));
    }

    #[test]
    fn write_requires_open_file() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "missing.log");
        let mut manager = LogFileManager::new();
        assert!(manager.write(&path, "nope").is_err());
    }

    #[test]
    fn open_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "idem.log");
        let mut manager = LogFileManager::new();

        manager.open(&path).unwrap();
        manager.write(&path, "first").unwrap();
        manager.open(&path).unwrap();

        // The second open must not truncate the already-open file.
        assert_eq!(manager.read(&path).unwrap().len(), 1);
        assert_eq!(manager.open_count(), 1);
    }

    #[test]
    fn close_removes_the_handle() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "close.log");
        let mut manager = LogFileManager::new();

        manager.open(&path).unwrap();
        assert!(manager.is_open(&path));
        manager.close(&path).unwrap();
        assert!(!manager.is_open(&path));
        assert!(manager.close(&path).is_err());
        assert!(manager.write(&path, "after close").is_err());
    }

    #[test]
    fn reopen_truncates_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "trunc.log");
        let mut manager = LogFileManager::new();

        manager.open(&path).unwrap();
        manager.write(&path, "old").unwrap();
        manager.close(&path).unwrap();

        manager.open(&path).unwrap();
        assert!(manager.read(&path).unwrap().is_empty());
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = path_in(&dir, "nofile.log");
        let manager = LogFileManager::new();
        assert!(manager.read(&path).is_err());
    }
}
