use std::path::Path;

use rayon::prelude::*;

use super::file_loader::{self, LoadError};
use crate::analysis::{self, AnalysisOptions, AnalysisResult, ProjectResult};
use crate::base::constants::TONTO_EXT;

/// Options for loading a directory of sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Extension of the files to pick up, without the dot
    pub extension: String,
    /// Analyze files on the rayon thread pool
    pub parallel: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            extension: TONTO_EXT.to_string(),
            parallel: true,
        }
    }
}

/// Loads and analyzes every source file of a directory.
///
/// Each file is analyzed on its own; nothing is shared between files.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceLoader {
    options: ProjectOptions,
    analysis: AnalysisOptions,
}

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ProjectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_analysis_options(mut self, analysis: AnalysisOptions) -> Self {
        self.analysis = analysis;
        self
    }

    /// Read one file and analyze it
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, LoadError> {
        file_loader::validate_extension(path, &self.options.extension)?;
        let source = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(analysis::analyze(
            &source,
            &path.display().to_string(),
            &self.analysis,
        ))
    }

    /// Analyze every matching file under `dir`, in path order.
    ///
    /// Fails on the first file that cannot be read.
    pub fn analyze_directory(&self, dir: &Path) -> Result<ProjectResult, LoadError> {
        let paths = file_loader::collect_file_paths(dir, &self.options.extension)?;
        tracing::debug!("[PROJECT] {} files under {}", paths.len(), dir.display());

        let files = if self.options.parallel {
            paths
                .par_iter()
                .map(|path| self.analyze_file(path))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            paths
                .iter()
                .map(|path| self.analyze_file(path))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(ProjectResult::new(files))
    }
}
