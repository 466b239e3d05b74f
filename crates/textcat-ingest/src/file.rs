//! Depth-bounded file discovery for corpora and classification targets.
//!
//! Depth counts from the root: files directly inside a root directory are at
//! level 1, files inside its subdirectories at level 2, and a root that is
//! itself a file is at level 0.

use std::path::{Path, PathBuf};

use textcat_core::{Error, Result};
use tracing::warn;

/// Inclusive range of directory levels to collect files from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: usize,
    pub max: usize,
}

impl LevelRange {
    /// Every file at any depth, including a file root.
    pub const ANY: LevelRange = LevelRange {
        min: 0,
        max: usize::MAX,
    };

    /// Files exactly one directory below the root: `root/<category>/<file>`.
    pub const CATEGORY_FILES: LevelRange = LevelRange { min: 2, max: 2 };

    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn contains(&self, level: usize) -> bool {
        level >= self.min && level <= self.max
    }
}

/// Find all files under `root` within `levels`. Results are sorted.
pub fn find_files(root: &Path, levels: LevelRange) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if levels.min > levels.max {
        warn!(
            "No files collected from {}: max level below min level",
            root.display()
        );
        return Ok(files);
    }

    let metadata = std::fs::metadata(root).map_err(|_| {
        Error::InputData(format!(
            "directory or file {} does not exist",
            root.display()
        ))
    })?;

    if metadata.is_dir() {
        walk(root, 1, levels, &mut files)?;
    } else if levels.contains(0) {
        files.push(root.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Same as [`find_files`] over several roots, concatenated in root order.
pub fn find_files_in<P: AsRef<Path>>(roots: &[P], levels: LevelRange) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        files.extend(find_files(root.as_ref(), levels)?);
    }
    Ok(files)
}

fn walk(dir: &Path, level: usize, levels: LevelRange, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut found_something = false;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        found_something = true;
        if entry.file_type()?.is_dir() {
            if level < levels.max {
                walk(&path, level + 1, levels, files)?;
            }
        } else if levels.contains(level) {
            files.push(path);
        }
    }
    if !found_something {
        warn!("Directory {} skipped, empty", dir.display());
    }
    Ok(())
}

/// Category label of a corpus file: the name of its parent directory.
pub fn category_of(path: &Path) -> Result<String> {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::InputData(format!(
                "could not extract category from file path {}",
                path.display()
            ))
        })
}
