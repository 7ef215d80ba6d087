//! Reading Tonto sources from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::base::constants::TONTO_EXT;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension for {}: expected .{expected}", .path.display())]
    UnsupportedExtension { path: PathBuf, expected: String },
    #[error("directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Validate that `path` ends in `.{extension}`
pub fn validate_extension<'p>(path: &'p Path, extension: &str) -> Result<&'p str, LoadError> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| *e == extension)
        .ok_or_else(|| LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: extension.to_string(),
        })
}

/// Read a source file after checking it is a Tonto file
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    validate_extension(path, TONTO_EXT)?;
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}

/// All files under `dir` with the given extension, recursively, sorted by path
pub fn collect_file_paths(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }
    let mut paths = Vec::new();
    collect_recursive(dir, extension, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(
    dir: &Path,
    extension: &str,
    paths: &mut Vec<PathBuf>,
) -> Result<(), LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        if path.is_dir() {
            collect_recursive(&path, extension, paths)?;
        } else if path.is_file() && validate_extension(&path, extension).is_ok() {
            paths.push(path);
        }
    }
    Ok(())
}
