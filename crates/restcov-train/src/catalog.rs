//! Experiment catalog helpers.
//!
//! The experiment workspace keeps the APIs under test and the testing
//! tools as one directory each under the workspace root; these helpers
//! list them for run setup and progress banners.

use std::io;
use std::path::Path;

/// Directory holding one subdirectory per API under test.
pub const APIS_DIR: &str = "apis";

/// Directory holding one subdirectory per testing tool.
pub const TOOLS_DIR: &str = "tools";

/// Names of the APIs available under `root`, sorted.
pub fn list_apis(root: &Path) -> io::Result<Vec<String>> {
    list_names(&root.join(APIS_DIR))
}

/// Names of the tools available under `root`, sorted.
pub fn list_tools(root: &Path) -> io::Result<Vec<String>> {
    list_names(&root.join(TOOLS_DIR))
}

fn list_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
