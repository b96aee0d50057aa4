pub mod destinations;

pub use destinations::{FileDestination, OutputDestination, StdoutDestination};

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::file_system(format!("Failed to read {}", path.display()), path, e)
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}
