//! Loading sources from disk and analyzing whole directories.

pub mod file_loader;
pub mod workspace_loader;

pub use file_loader::LoadError;
pub use workspace_loader::{ProjectOptions, WorkspaceLoader};
