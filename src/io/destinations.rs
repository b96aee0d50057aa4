//! Output destinations for rendered drift reports.
//!
//! Renderers produce strings; a destination decides where they land
//! (a file or stdout).

use crate::errors::{Error, Result};
use std::io::{self, Write};
use std::path::PathBuf;

/// Trait for destinations that can receive rendered output.
pub trait OutputDestination {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<()>;

    /// Get a description of the destination for log messages.
    fn description(&self) -> String;
}

/// File system output destination.
///
/// Parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            super::ensure_dir(parent)?;
        }
        super::write_file(&self.path, content)
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes()).map_err(Error::Io)
    }

    fn flush(&self) -> Result<()> {
        io::stdout().lock().flush().map_err(Error::Io)
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Pick a destination from an optional output path.
pub fn destination_for(output: Option<PathBuf>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path)),
        None => Box::new(StdoutDestination::new()),
    }
}
